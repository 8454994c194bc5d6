pub mod uploader_view;

pub use uploader_view::{GridView, ImageTile, SubmitButtonView, UploaderView};
