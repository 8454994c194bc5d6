// ============================================================================
// IMAGE API - Contrato de comunicación con el backend de imágenes
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{UploadResponse, UploadedImage};

/// Error de la capa HTTP
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No se pudo construir la petición (FormData, body...)
    #[error("{0}")]
    Request(String),

    /// Red caída, CORS, petición abortada...
    #[error("{0}")]
    Network(String),

    /// Respuesta con status fuera de 2xx. `message` viene del cuerpo si el servidor lo envía.
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// Cuerpo de respuesta exitosa que no es el JSON esperado
    #[error("{0}")]
    Parse(String),
}

impl ApiError {
    /// Texto que se muestra en el banner de error
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            ApiError::Http { message, .. } => message.clone().unwrap_or_default(),
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Backend de imágenes. `File` es el handle del archivo elegido por el usuario.
#[async_trait(?Send)]
pub trait ImageApi {
    type File: Clone + 'static;

    /// GET `/images-list`
    async fn list_images(&self) -> Result<Vec<UploadedImage>, ApiError>;

    /// POST `/upload` con un único campo multipart `image`
    async fn upload_image(&self, file: &Self::File) -> Result<UploadResponse, ApiError>;
}
