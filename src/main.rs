use yew_swipe::components::app::App;
use yew_swipe::util::init_logging;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    init_logging(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
