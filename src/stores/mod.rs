pub mod uploader_store;

pub use uploader_store::{Selection, UploaderAction, UploaderStore};
