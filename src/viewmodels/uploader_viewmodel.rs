// ============================================================================
// UPLOADER VIEWMODEL - LÓGICA DE SUBIDA Y LISTADO
// ============================================================================
// Orquesta la API y emite UploaderAction; el hook aplica las acciones al store
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use yew::Callback;

use crate::services::{ImageApi, PreviewSource};
use crate::stores::{Selection, UploaderAction};
use crate::utils::constants::{
    MSG_CHOOSE_IMAGE, MSG_LOAD_IMAGES_FAILED, MSG_PREVIEW_FAILED, MSG_UPLOAD_FAILED,
};

/// Canal por el que la lógica publica cambios de estado
pub type Dispatch<F> = Callback<UploaderAction<F>>;

/// Mantiene `uploading = true` mientras vive. Se suelta en cualquier salida,
/// incluido el drop del future a medio camino.
pub struct UploadingGuard<F: 'static> {
    dispatch: Dispatch<F>,
}

impl<F: 'static> UploadingGuard<F> {
    pub fn acquire(dispatch: &Dispatch<F>) -> Self {
        dispatch.emit(UploaderAction::UploadStarted);
        Self {
            dispatch: dispatch.clone(),
        }
    }
}

impl<F: 'static> Drop for UploadingGuard<F> {
    fn drop(&mut self) {
        self.dispatch.emit(UploaderAction::UploadFinished);
    }
}

/// Numeración de peticiones a `/images-list`. Se comparte entre todos los
/// ViewModels que escriben en el mismo store.
#[derive(Debug, Clone, Default)]
pub struct ListRequestCounter(Rc<Cell<u64>>);

impl ListRequestCounter {
    pub fn next(&self) -> u64 {
        let generation = self.0.get() + 1;
        self.0.set(generation);
        generation
    }
}

/// ViewModel del uploader - SOLO lógica
pub struct UploaderViewModel<A: ImageApi> {
    api: A,
    list_requests: ListRequestCounter,
}

impl<A: ImageApi> UploaderViewModel<A> {
    pub fn new(api: A) -> Self {
        Self::with_counter(api, ListRequestCounter::default())
    }

    pub fn with_counter(api: A, list_requests: ListRequestCounter) -> Self {
        Self { api, list_requests }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn next_list_generation(&self) -> u64 {
        self.list_requests.next()
    }

    /// Recarga la lista completa de imágenes
    pub async fn load_images(&self, dispatch: &Dispatch<A::File>) {
        let generation = self.next_list_generation();
        dispatch.emit(UploaderAction::ListRequested(generation));

        log::info!("🖼️ [IMAGES] Cargando lista de imágenes (petición #{})", generation);

        match self.api.list_images().await {
            Ok(images) => {
                log::info!("✅ [IMAGES] {} imágenes recibidas (petición #{})", images.len(), generation);
                dispatch.emit(UploaderAction::ListLoaded { generation, images });
            }
            Err(e) => {
                log::error!("❌ [IMAGES] Error cargando imágenes: {}", e);
                dispatch.emit(UploaderAction::ListFailed {
                    generation,
                    message: e.user_message(MSG_LOAD_IMAGES_FAILED),
                });
            }
        }
    }

    /// Sube el archivo elegido y, si sale bien, recarga la lista
    pub async fn submit(&self, file: Option<A::File>, dispatch: &Dispatch<A::File>) {
        let Some(file) = file else {
            log::warn!("⚠️ [UPLOAD] Submit sin archivo");
            dispatch.emit(UploaderAction::ValidationFailed(MSG_CHOOSE_IMAGE.to_string()));
            return;
        };

        let _uploading = UploadingGuard::acquire(dispatch);
        log::info!("📤 [UPLOAD] Subiendo imagen...");

        match self.api.upload_image(&file).await {
            Ok(response) => {
                log::info!("✅ [UPLOAD] Imagen subida: {}", response.url);
                dispatch.emit(UploaderAction::UploadSucceeded(response.url));
                self.load_images(dispatch).await;
            }
            Err(e) => {
                log::error!("❌ [UPLOAD] Error subiendo imagen: {}", e);
                dispatch.emit(UploaderAction::UploadFailed(e.user_message(MSG_UPLOAD_FAILED)));
            }
        }
    }
}

impl<A> UploaderViewModel<A>
where
    A: ImageApi,
    A::File: PreviewSource,
{
    /// Cambio en el input de archivo. `None` = el usuario canceló.
    pub fn select_file(&self, file: Option<A::File>, dispatch: &Dispatch<A::File>) {
        let Some(file) = file else {
            dispatch.emit(UploaderAction::FileSelected(None));
            return;
        };

        match file.create_preview() {
            Ok(preview) => {
                dispatch.emit(UploaderAction::FileSelected(Some(Selection::new(file, preview))));
            }
            Err(e) => {
                log::error!("❌ [PREVIEW] {}", e);
                dispatch.emit(UploaderAction::PreviewFailed(MSG_PREVIEW_FAILED.to_string()));
            }
        }
    }
}
