// ============================================================================
// IMAGE UPLOADER COMPONENT
// ============================================================================
// Formulario de subida + galería. Todo el estado vive en use_image_uploader.
// ============================================================================

use yew::prelude::*;

use crate::components::{ImageGrid, UploadForm};
use crate::hooks::use_image_uploader;
use crate::views::UploaderView;

#[derive(Properties, PartialEq, Default)]
pub struct ImageUploaderProps {
    /// Sobrescribe la API_BASE de compilación
    #[prop_or_default]
    pub api_base: Option<AttrValue>,
}

#[function_component(ImageUploader)]
pub fn image_uploader(props: &ImageUploaderProps) -> Html {
    let uploader = use_image_uploader(props.api_base.clone());
    let view = UploaderView::from_store(&*uploader.state);

    html! {
        <div class="uploader">
            <h2>{"Image Uploader"}</h2>

            <UploadForm
                submit={view.submit}
                preview_src={view.preview_src}
                uploaded_url={view.uploaded_url}
                error_banner={view.error_banner}
                input_resets={view.input_resets}
                on_file_change={uploader.on_file_change}
                on_submit={uploader.on_submit}
            />

            <ImageGrid grid={view.grid} on_refresh={uploader.on_refresh} />
        </div>
    }
}
