// ============================================================================
// USE IMAGE UPLOADER HOOK
// ============================================================================
// Conecta el store (use_reducer) con el ViewModel y lanza la carga inicial
// ============================================================================

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::ApiClient;
use crate::stores::UploaderStore;
use crate::viewmodels::{Dispatch, ListRequestCounter, UploaderViewModel};

#[derive(Clone)]
pub struct UseImageUploaderHandle {
    pub state: UseReducerHandle<UploaderStore<File>>,
    pub on_file_change: Callback<Option<File>>,
    pub on_submit: Callback<()>,
    pub on_refresh: Callback<()>,
}

#[hook]
pub fn use_image_uploader(api_base: Option<AttrValue>) -> UseImageUploaderHandle {
    let state = use_reducer(|| UploaderStore::<File>::new(CONFIG.list_policy));

    // Vive lo mismo que el store: los ViewModels nuevos siguen la numeración
    let list_requests = use_memo((), |_| ListRequestCounter::default());

    // Un ViewModel por api_base; si cambia la base se crea otro cliente
    let viewmodel: Rc<UploaderViewModel<ApiClient>> = use_memo(api_base.clone(), |base| {
        let client = match base {
            Some(base) => ApiClient::with_base_url(base),
            None => ApiClient::new(),
        };
        log::info!("🔌 [UPLOADER] API base: {}", client.base_url());
        UploaderViewModel::with_counter(client, (*list_requests).clone())
    });

    let dispatch: Dispatch<File> = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action| dispatcher.dispatch(action))
    };

    // Cargar imágenes al montar (y cuando cambia api_base)
    {
        let viewmodel = viewmodel.clone();
        let dispatch = dispatch.clone();
        use_effect_with(api_base, move |_| {
            spawn_local(async move {
                viewmodel.load_images(&dispatch).await;
            });
            || ()
        });
    }

    let on_file_change = {
        let viewmodel = viewmodel.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |file: Option<File>| {
            viewmodel.select_file(file, &dispatch);
        })
    };

    let on_submit = {
        let state = state.clone();
        let viewmodel = viewmodel.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let file = state.selection.as_ref().map(|selection| selection.file.clone());
            let viewmodel = viewmodel.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                viewmodel.submit(file, &dispatch).await;
            });
        })
    };

    let on_refresh = {
        let viewmodel = viewmodel.clone();
        Callback::from(move |_| {
            log::info!("🔄 [UPLOADER] Refresh manual");
            let viewmodel = viewmodel.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                viewmodel.load_images(&dispatch).await;
            });
        })
    };

    UseImageUploaderHandle {
        state,
        on_file_change,
        on_submit,
        on_refresh,
    }
}
