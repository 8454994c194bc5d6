pub mod use_image_uploader;

pub use use_image_uploader::{use_image_uploader, UseImageUploaderHandle};
