// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de UI, solo hace requests HTTP contra el backend de imágenes
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{normalize_base_url, CONFIG};
use crate::models::{UploadErrorBody, UploadResponse, UploadedImage};
use crate::services::image_api::{ApiError, ImageApi};
use crate::utils::constants::{IMAGES_LIST_PATH, UPLOAD_FIELD_NAME, UPLOAD_PATH};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ImageApi for ApiClient {
    type File = File;

    /// Listar imágenes subidas
    async fn list_images(&self) -> Result<Vec<UploadedImage>, ApiError> {
        let url = self.endpoint(IMAGES_LIST_PATH);
        log::info!("🖼️ [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("⚠️ [API] {} respondió HTTP {}", url, response.status());
            return Err(ApiError::Http {
                status: response.status(),
                message: None,
            });
        }

        response
            .json::<Vec<UploadedImage>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Subir imagen como multipart/form-data
    async fn upload_image(&self, file: &File) -> Result<UploadResponse, ApiError> {
        let url = self.endpoint(UPLOAD_PATH);
        log::info!("📤 [API] POST {} ({}, {} bytes)", url, file.name(), file.size());

        let form = FormData::new()
            .map_err(|e| ApiError::Request(format!("FormData error: {:?}", e)))?;
        form.append_with_blob(UPLOAD_FIELD_NAME, file)
            .map_err(|e| ApiError::Request(format!("FormData error: {:?}", e)))?;

        // Sin Content-Type manual: el navegador pone el boundary
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("⚠️ [API] Upload rechazado: HTTP {}", status);
            return Err(ApiError::Http {
                status,
                message: parse_upload_error(&body),
            });
        }

        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Extrae `error` de un cuerpo `{ "error": "..." }`; cualquier otra cosa cuenta como vacío
pub fn parse_upload_error(body: &str) -> Option<String> {
    serde_json::from_str::<UploadErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
}
