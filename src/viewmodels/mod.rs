pub mod uploader_viewmodel;

pub use uploader_viewmodel::{Dispatch, ListRequestCounter, UploaderViewModel, UploadingGuard};
