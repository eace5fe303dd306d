use std::sync::Once;

use log::Level;

static LOGGER_INIT: Once = Once::new();

/// Route `log` output to the browser console. Only the first call installs the logger;
/// off wasm32 there is no console and this does nothing.
pub fn init_logging(level: Level) {
    LOGGER_INIT.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        wasm_logger::init(wasm_logger::Config::new(level));
        #[cfg(not(target_arch = "wasm32"))]
        let _ = level;
    });
}
