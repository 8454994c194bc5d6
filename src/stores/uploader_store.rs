// ============================================================================
// UPLOADER STORE - Estado inmutable del uploader + reducer
// ============================================================================
// Todo cambio de estado pasa por un UploaderAction; reduce() devuelve un
// estado nuevo y nunca muta el anterior.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::config::ListPolicy;
use crate::models::UploadedImage;
use crate::services::PreviewUrl;

/// Archivo elegido junto con su vista previa. Uno no existe sin el otro.
#[derive(Debug, Clone)]
pub struct Selection<F> {
    pub file: F,
    pub preview: Rc<PreviewUrl>,
}

impl<F> Selection<F> {
    pub fn new(file: F, preview: PreviewUrl) -> Self {
        Self {
            file,
            preview: Rc::new(preview),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploaderStore<F> {
    pub selection: Option<Selection<F>>,
    pub uploading: bool,
    pub error: Option<String>,
    pub images: Rc<Vec<UploadedImage>>,
    pub last_uploaded_url: Option<String>,
    /// Última petición de `/images-list` emitida
    pub list_generation: u64,
    pub list_policy: ListPolicy,
    /// Sube cada vez que hay que vaciar el `<input type="file">`
    pub input_resets: u64,
}

impl<F> UploaderStore<F> {
    pub fn new(list_policy: ListPolicy) -> Self {
        Self {
            selection: None,
            uploading: false,
            error: None,
            images: Rc::new(Vec::new()),
            last_uploaded_url: None,
            list_generation: 0,
            list_policy,
            input_resets: 0,
        }
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.preview.as_str())
    }

    /// Respuesta de una petición ya superada por otra más reciente
    fn is_stale(&self, generation: u64) -> bool {
        self.list_policy == ListPolicy::LatestRequestWins && generation < self.list_generation
    }
}

impl<F> Default for UploaderStore<F> {
    fn default() -> Self {
        Self::new(ListPolicy::default())
    }
}

#[derive(Debug)]
pub enum UploaderAction<F> {
    /// Nuevo archivo (o cancelación) desde el input
    FileSelected(Option<Selection<F>>),
    /// El navegador no pudo crear la vista previa
    PreviewFailed(String),
    /// Submit sin archivo
    ValidationFailed(String),
    ListRequested(u64),
    ListLoaded { generation: u64, images: Vec<UploadedImage> },
    ListFailed { generation: u64, message: String },
    UploadStarted,
    UploadSucceeded(String),
    UploadFailed(String),
    UploadFinished,
}

impl<F: Clone + 'static> Reducible for UploaderStore<F> {
    type Action = UploaderAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match &action {
            UploaderAction::ListLoaded { generation, .. }
            | UploaderAction::ListFailed { generation, .. }
                if self.is_stale(*generation) =>
            {
                log::info!(
                    "⏭️ [STORE] Respuesta de lista #{} descartada (última #{})",
                    generation,
                    self.list_generation
                );
                return self;
            }
            _ => {}
        }

        let mut next = (*self).clone();

        match action {
            UploaderAction::FileSelected(selection) => {
                next.selection = selection;
                next.last_uploaded_url = None;
            }
            UploaderAction::PreviewFailed(message) => {
                next.selection = None;
                next.last_uploaded_url = None;
                next.error = Some(message);
                next.input_resets += 1;
            }
            UploaderAction::ValidationFailed(message) => {
                next.error = Some(message);
            }
            UploaderAction::ListRequested(generation) => {
                next.error = None;
                next.list_generation = next.list_generation.max(generation);
            }
            UploaderAction::ListLoaded { images, .. } => {
                next.images = Rc::new(images);
            }
            UploaderAction::ListFailed { message, .. } => {
                next.error = Some(message);
            }
            UploaderAction::UploadStarted => {
                next.uploading = true;
                next.error = None;
            }
            UploaderAction::UploadSucceeded(url) => {
                next.last_uploaded_url = Some(url).filter(|url| !url.is_empty());
                next.selection = None;
                next.input_resets += 1;
            }
            UploaderAction::UploadFailed(message) => {
                next.error = Some(message);
            }
            UploaderAction::UploadFinished => {
                next.uploading = false;
            }
        }

        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Store = UploaderStore<&'static str>;

    fn image(name: &str) -> UploadedImage {
        UploadedImage {
            filename: name.to_string(),
            url: format!("http://x/{}", name),
        }
    }

    fn selection(file: &'static str, released: &Rc<Cell<usize>>) -> Selection<&'static str> {
        let released = released.clone();
        let preview = PreviewUrl::new(format!("blob:{}", file), move |_| {
            released.set(released.get() + 1)
        });
        Selection::new(file, preview)
    }

    fn apply(store: Rc<Store>, actions: Vec<UploaderAction<&'static str>>) -> Rc<Store> {
        actions.into_iter().fold(store, |store, action| store.reduce(action))
    }

    #[test]
    fn starts_empty() {
        let store = Store::default();
        assert!(store.selection.is_none());
        assert!(!store.uploading);
        assert!(store.error.is_none());
        assert!(store.images.is_empty());
        assert!(store.last_uploaded_url.is_none());
    }

    #[test]
    fn selecting_a_file_clears_last_uploaded_url() {
        let released = Rc::new(Cell::new(0));
        let mut store = Rc::new(Store::default());
        store = store.reduce(UploaderAction::UploadSucceeded("http://x/old.png".into()));
        assert_eq!(store.last_uploaded_url.as_deref(), Some("http://x/old.png"));

        store = store.reduce(UploaderAction::FileSelected(Some(selection("a.png", &released))));
        assert!(store.last_uploaded_url.is_none());
        assert_eq!(store.preview_url(), Some("blob:a.png"));

        store = store.reduce(UploaderAction::UploadSucceeded("http://x/a.png".into()));
        store = store.reduce(UploaderAction::FileSelected(None));
        assert!(store.last_uploaded_url.is_none());
        assert!(store.selection.is_none());
    }

    #[test]
    fn superseded_preview_is_released() {
        let released = Rc::new(Cell::new(0));
        let store = Rc::new(Store::default());
        let store = store.reduce(UploaderAction::FileSelected(Some(selection("a.png", &released))));
        assert_eq!(released.get(), 0);

        let store = store.reduce(UploaderAction::FileSelected(Some(selection("b.png", &released))));
        assert_eq!(released.get(), 1);

        let store = store.reduce(UploaderAction::FileSelected(None));
        assert_eq!(released.get(), 2);

        drop(store);
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn preview_released_when_store_dropped() {
        let released = Rc::new(Cell::new(0));
        let store = Rc::new(Store::default())
            .reduce(UploaderAction::FileSelected(Some(selection("a.png", &released))));
        let rendered = store.clone();

        drop(store);
        assert_eq!(released.get(), 0);
        drop(rendered);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn preview_failure_clears_selection() {
        let released = Rc::new(Cell::new(0));
        let store = apply(
            Rc::new(Store::default()),
            vec![
                UploaderAction::FileSelected(Some(selection("a.png", &released))),
                UploaderAction::PreviewFailed("Could not preview the selected file".into()),
            ],
        );
        assert!(store.selection.is_none());
        assert_eq!(released.get(), 1);
        assert_eq!(store.error.as_deref(), Some("Could not preview the selected file"));
    }

    #[test]
    fn rejected_first_file_resets_input() {
        let failed = || UploaderAction::PreviewFailed("Could not preview the selected file".into());
        let store = Rc::new(Store::default());
        assert_eq!(store.input_resets, 0);

        let store = store.reduce(failed());
        assert!(store.selection.is_none());
        assert_eq!(store.input_resets, 1);

        let store = store.reduce(failed());
        assert_eq!(store.input_resets, 2);
    }

    #[test]
    fn successful_upload_resets_input() {
        let store = Rc::new(Store::default())
            .reduce(UploaderAction::UploadSucceeded("http://x/a.png".into()));
        assert_eq!(store.input_resets, 1);

        let store = store.reduce(UploaderAction::FileSelected(None));
        assert_eq!(store.input_resets, 1);
    }

    #[test]
    fn list_failure_keeps_stale_images() {
        let store = apply(
            Rc::new(Store::default()),
            vec![
                UploaderAction::ListRequested(1),
                UploaderAction::ListLoaded { generation: 1, images: vec![image("a.png")] },
                UploaderAction::ListRequested(2),
                UploaderAction::ListFailed { generation: 2, message: "Failed to load images".into() },
            ],
        );
        assert_eq!(store.images.len(), 1);
        assert_eq!(store.error.as_deref(), Some("Failed to load images"));
    }

    #[test]
    fn list_request_clears_error() {
        let store = apply(
            Rc::new(Store::default()),
            vec![
                UploaderAction::ValidationFailed("Please choose an image first".into()),
                UploaderAction::ListRequested(1),
            ],
        );
        assert!(store.error.is_none());
        assert_eq!(store.list_generation, 1);
    }

    #[test]
    fn last_response_wins_by_default() {
        let store = apply(
            Rc::new(Store::default()),
            vec![
                UploaderAction::ListRequested(1),
                UploaderAction::ListRequested(2),
                UploaderAction::ListLoaded { generation: 2, images: vec![image("new.png")] },
                UploaderAction::ListLoaded { generation: 1, images: vec![image("old.png")] },
            ],
        );
        assert_eq!(store.images[0].filename, "old.png");
    }

    #[test]
    fn latest_request_wins_discards_stale_responses() {
        let store = apply(
            Rc::new(Store::new(ListPolicy::LatestRequestWins)),
            vec![
                UploaderAction::ListRequested(1),
                UploaderAction::ListRequested(2),
                UploaderAction::ListLoaded { generation: 2, images: vec![image("new.png")] },
                UploaderAction::ListLoaded { generation: 1, images: vec![image("old.png")] },
                UploaderAction::ListFailed { generation: 1, message: "boom".into() },
            ],
        );
        assert_eq!(store.images.len(), 1);
        assert_eq!(store.images[0].filename, "new.png");
        assert!(store.error.is_none());
    }

    #[test]
    fn upload_lifecycle() {
        let released = Rc::new(Cell::new(0));
        let store = apply(
            Rc::new(Store::default()),
            vec![
                UploaderAction::FileSelected(Some(selection("a.png", &released))),
                UploaderAction::ValidationFailed("leftover".into()),
                UploaderAction::UploadStarted,
            ],
        );
        assert!(store.uploading);
        assert!(store.error.is_none());

        let store = apply(
            store,
            vec![
                UploaderAction::UploadSucceeded("http://x/a.png".into()),
                UploaderAction::UploadFinished,
            ],
        );
        assert!(!store.uploading);
        assert!(store.selection.is_none());
        assert_eq!(released.get(), 1);
        assert_eq!(store.last_uploaded_url.as_deref(), Some("http://x/a.png"));
    }

    #[test]
    fn empty_upload_url_shows_no_link() {
        let store = Rc::new(Store::default()).reduce(UploaderAction::UploadSucceeded(String::new()));
        assert!(store.last_uploaded_url.is_none());
    }
}
