/// URL base por defecto si no se define API_BASE al compilar
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

// Endpoints
pub const IMAGES_LIST_PATH: &str = "/images-list";
pub const UPLOAD_PATH: &str = "/upload";

/// Nombre del campo multipart que espera el backend
pub const UPLOAD_FIELD_NAME: &str = "image";

// Mensajes visibles para el usuario
pub const MSG_CHOOSE_IMAGE: &str = "Please choose an image first";
pub const MSG_LOAD_IMAGES_FAILED: &str = "Failed to load images";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed";
pub const MSG_PREVIEW_FAILED: &str = "Could not preview the selected file";
pub const MSG_NO_IMAGES: &str = "No images uploaded yet.";

// Etiquetas
pub const LABEL_UPLOAD: &str = "Upload";
pub const LABEL_UPLOADING: &str = "Uploading...";
