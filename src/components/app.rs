use yew::prelude::*;

use crate::components::ImageUploader;

/// Raíz de la aplicación
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="app">
            <ImageUploader />
        </main>
    }
}
