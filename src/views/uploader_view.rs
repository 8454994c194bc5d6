// ============================================================================
// UPLOADER VIEW - Proyección pura del store a datos de render
// ============================================================================
// Sin lógica de negocio: los componentes pintan exactamente lo que sale de aquí
// ============================================================================

use crate::stores::UploaderStore;
use crate::utils::constants::{LABEL_UPLOAD, LABEL_UPLOADING, MSG_NO_IMAGES};

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

/// Una tarjeta de la galería
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTile {
    pub key: String,
    pub href: String,
    pub src: String,
    pub alt: String,
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Empty(&'static str),
    Tiles(Vec<ImageTile>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploaderView {
    pub submit: SubmitButtonView,
    pub preview_src: Option<String>,
    pub uploaded_url: Option<String>,
    pub error_banner: Option<String>,
    pub input_resets: u64,
    pub grid: GridView,
}

impl UploaderView {
    pub fn from_store<F>(store: &UploaderStore<F>) -> Self {
        let submit = SubmitButtonView {
            label: if store.uploading { LABEL_UPLOADING } else { LABEL_UPLOAD },
            disabled: store.uploading,
        };

        let grid = if store.images.is_empty() {
            GridView::Empty(MSG_NO_IMAGES)
        } else {
            GridView::Tiles(
                store
                    .images
                    .iter()
                    .map(|image| ImageTile {
                        key: image.filename.clone(),
                        href: image.url.clone(),
                        src: image.url.clone(),
                        alt: image.filename.clone(),
                        title: image.filename.clone(),
                        caption: image.filename.clone(),
                    })
                    .collect(),
            )
        };

        Self {
            submit,
            preview_src: store.preview_url().map(str::to_string),
            uploaded_url: store.last_uploaded_url.clone(),
            error_banner: store
                .error
                .as_deref()
                .filter(|message| !message.is_empty())
                .map(|message| format!("⚠️ {}", message)),
            input_resets: store.input_resets,
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListPolicy;
    use crate::models::UploadedImage;
    use crate::services::PreviewUrl;
    use crate::stores::{Selection, UploaderAction};
    use std::rc::Rc;
    use yew::Reducible;

    type Store = UploaderStore<()>;

    fn loaded(images: Vec<UploadedImage>) -> Rc<Store> {
        Rc::new(Store::new(ListPolicy::default()))
            .reduce(UploaderAction::ListRequested(1))
            .reduce(UploaderAction::ListLoaded { generation: 1, images })
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let view = UploaderView::from_store(&*loaded(Vec::new()));
        assert_eq!(view.grid, GridView::Empty("No images uploaded yet."));
    }

    #[test]
    fn one_tile_per_image() {
        let store = loaded(vec![UploadedImage {
            filename: "a.png".into(),
            url: "http://x/a.png".into(),
        }]);
        let view = UploaderView::from_store(&*store);

        let GridView::Tiles(tiles) = view.grid else {
            panic!("expected tiles");
        };
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].key, "a.png");
        assert_eq!(tiles[0].href, "http://x/a.png");
        assert_eq!(tiles[0].src, "http://x/a.png");
        assert_eq!(tiles[0].alt, "a.png");
        assert_eq!(tiles[0].title, "a.png");
        assert_eq!(tiles[0].caption, "a.png");
    }

    #[test]
    fn button_reflects_uploading() {
        let idle = UploaderView::from_store(&Store::default());
        assert_eq!(idle.submit, SubmitButtonView { label: "Upload", disabled: false });

        let busy = Rc::new(Store::default()).reduce(UploaderAction::UploadStarted);
        let view = UploaderView::from_store(&*busy);
        assert_eq!(view.submit, SubmitButtonView { label: "Uploading...", disabled: true });
    }

    #[test]
    fn optional_blocks() {
        let idle = UploaderView::from_store(&Store::default());
        assert!(idle.preview_src.is_none());
        assert!(idle.uploaded_url.is_none());
        assert!(idle.error_banner.is_none());

        let store = Rc::new(Store::default())
            .reduce(UploaderAction::FileSelected(Some(Selection::new(
                (),
                PreviewUrl::new("blob:local", |_| {}),
            ))))
            .reduce(UploaderAction::ValidationFailed("bad format".into()));
        let view = UploaderView::from_store(&*store);
        assert_eq!(view.input_resets, 0);
        assert_eq!(view.preview_src.as_deref(), Some("blob:local"));
        assert_eq!(view.error_banner.as_deref(), Some("⚠️ bad format"));

        let uploaded = store.reduce(UploaderAction::UploadSucceeded("http://x/a.png".into()));
        let view = UploaderView::from_store(&*uploaded);
        assert_eq!(view.uploaded_url.as_deref(), Some("http://x/a.png"));
        assert!(view.preview_src.is_none());
        assert_eq!(view.input_resets, 1);
    }
}
