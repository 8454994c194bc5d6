pub mod image_api;
pub mod api_client;
pub mod preview;

pub use image_api::{ApiError, ImageApi};
pub use api_client::ApiClient;
pub use preview::{PreviewSource, PreviewUrl};
