use image_uploader::components::App;
use image_uploader::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Image Uploader starting... (API: {})", CONFIG.api_base());

    yew::Renderer::<App>::new().render();
}
