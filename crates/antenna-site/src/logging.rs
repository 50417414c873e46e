//! Console Logging

use std::sync::Once;

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

static INIT: Once = Once::new();

/// Route panics and `tracing` events to the browser console.
///
/// Only the first call installs anything; the level chosen then sticks.
pub fn init(debug: bool) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        let level = if debug { Level::DEBUG } else { Level::INFO };
        let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
        tracing_wasm::set_as_global_default_with_config(config);

        tracing::debug!("Debug logging enabled");
    });
}
