// ============================================================================
// PREVIEW - Object URLs locales para la miniatura del archivo elegido
// ============================================================================
// Cada URL creada con URL.createObjectURL se libera al hacer Drop del
// PreviewUrl que la posee. El store la guarda en un Rc, así que la liberación
// ocurre una sola vez, cuando el último estado que la referencia desaparece.
// ============================================================================

use std::fmt;

use web_sys::{File, Url};

type ReleaseFn = Box<dyn FnOnce(&str)>;

/// URL temporal de vista previa. Se libera al salir de scope.
pub struct PreviewUrl {
    url: String,
    release: Option<ReleaseFn>,
}

impl PreviewUrl {
    pub fn new(url: impl Into<String>, release: impl FnOnce(&str) + 'static) -> Self {
        Self {
            url: url.into(),
            release: Some(Box::new(release)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&self.url);
        }
    }
}

impl PartialEq for PreviewUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewUrl").field(&self.url).finish()
    }
}

/// Algo de lo que se puede sacar una vista previa local
pub trait PreviewSource {
    fn create_preview(&self) -> Result<PreviewUrl, String>;
}

impl PreviewSource for File {
    fn create_preview(&self) -> Result<PreviewUrl, String> {
        let url = Url::create_object_url_with_blob(self)
            .map_err(|e| format!("createObjectURL error: {:?}", e))?;

        log::debug!("🔗 [PREVIEW] Object URL creada para {}", self.name());

        Ok(PreviewUrl::new(url, |url| {
            if let Err(e) = Url::revoke_object_url(url) {
                log::warn!("⚠️ [PREVIEW] No se pudo liberar {}: {:?}", url, e);
            }
        }))
    }
}
