use serde::{Deserialize, Serialize};

/// Imagen ya subida, tal como la devuelve `/images-list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub url: String,
}

/// Respuesta exitosa de `/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub url: String,
}

/// Cuerpo de error opcional de `/upload`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UploadErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
