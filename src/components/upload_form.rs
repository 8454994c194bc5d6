// ============================================================================
// UPLOAD FORM COMPONENT
// ============================================================================

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::views::SubmitButtonView;

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    pub submit: SubmitButtonView,
    pub preview_src: Option<String>,
    pub uploaded_url: Option<String>,
    pub error_banner: Option<String>,
    pub input_resets: u64,
    pub on_file_change: Callback<Option<File>>,
    pub on_submit: Callback<()>,
}

#[function_component(UploadForm)]
pub fn upload_form(props: &UploadFormProps) -> Html {
    let input_ref = use_node_ref();

    // Subida completada o preview fallida => vaciar el input
    {
        let input_ref = input_ref.clone();
        use_effect_with(props.input_resets, move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            || ()
        });
    }

    let onchange = {
        let on_file_change = props.on_file_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            on_file_change.emit(file);
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let button_class = if props.submit.disabled {
        "btn-upload busy"
    } else {
        "btn-upload"
    };

    html! {
        <form class="upload-form" onsubmit={onsubmit}>
            <div class="upload-row">
                <input
                    ref={input_ref}
                    type="file"
                    accept="image/*"
                    onchange={onchange}
                />
                <button type="submit" class={button_class} disabled={props.submit.disabled}>
                    {props.submit.label}
                </button>
            </div>

            if let Some(src) = &props.preview_src {
                <div class="preview">
                    <p>{"Preview:"}</p>
                    <img src={src.clone()} alt="preview" />
                </div>
            }

            if let Some(url) = &props.uploaded_url {
                <div class="uploaded">
                    <span>{"Uploaded:"}</span>{" "}
                    <a href={url.clone()} target="_blank" rel="noreferrer">{url.clone()}</a>
                </div>
            }

            if let Some(banner) = &props.error_banner {
                <div class="error-banner">{banner.clone()}</div>
            }
        </form>
    }
}
