//! antenna Web Frontend
//!
//! Leptos-based WASM frontend for browsing antenna query results.
//! On load it mounts the [`Root`] view into the page's `#root` element and
//! keeps the mounted instance reachable through [`root`].

mod app;
mod dom;
mod handle;
mod logging;
mod root;

pub use app::Root;
pub use dom::BrowserDocument;
pub use handle::{bootstrap, dispose, dispose_root, is_mounted, remount, remount_root, root};
pub use root::RootApp;

use antenna_mount::MountConfig;
use wasm_bindgen::prelude::*;

/// Configuration for the current page, with overrides from its query string
pub fn page_config() -> MountConfig {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| MountConfig::from_query(&search))
        .unwrap_or_default()
}

/// WASM entry point
///
/// A missing anchor is returned as an error, which the host reports on its
/// console; the page stays blank.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let config = page_config();
    logging::init(config.debug);
    tracing::info!(anchor = %config.anchor_id, "Starting antenna site");

    bootstrap(&config)
        .map(|_| ())
        .map_err(|err| handle::to_js_error(&err))
}
