pub mod image;

pub use image::{UploadErrorBody, UploadResponse, UploadedImage};
