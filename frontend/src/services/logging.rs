//! Browser console logging through `wasm-logger`.

use log::{Level, LevelFilter};

/// Install the console logger. The logger itself passes every level and
/// `log::max_level` does the filtering, so the configured level can be
/// applied once the backend has loaded.
pub fn init(level: LevelFilter) {
    wasm_logger::init(wasm_logger::Config::new(Level::Trace));
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_init_then_config_level_applies() {
        init(LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
        log::debug!("🧪 console logger installed");

        log::set_max_level(LevelFilter::Warn);
        assert_eq!(log::max_level(), LevelFilter::Warn);
        assert!(!log::log_enabled!(Level::Info));
    }
}
