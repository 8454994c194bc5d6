pub mod app;
pub mod image_uploader;
pub mod upload_form;
pub mod image_grid;

pub use app::App;
pub use image_uploader::ImageUploader;
pub use upload_form::UploadForm;
pub use image_grid::ImageGrid;
