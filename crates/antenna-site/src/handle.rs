//! Exported Root Instance
//!
//! The page holds at most one mounted [`RootApp`]. It lives in a
//! thread-local slot because DOM handles cannot cross threads.

use std::cell::RefCell;
use std::rc::Rc;

use antenna_mount::{MountConfig, MountError, RootSlot};
use wasm_bindgen::prelude::*;

use crate::dom::BrowserDocument;
use crate::root::RootApp;

thread_local! {
    static ROOT: RefCell<RootSlot<RootApp>> = const { RefCell::new(RootSlot::new()) };
}

fn current_document(config: &MountConfig) -> Result<BrowserDocument, MountError> {
    BrowserDocument::current().ok_or_else(|| {
        tracing::error!("No document available to mount into");
        MountError::TargetNotFound {
            anchor: config.anchor_id.clone(),
        }
    })
}

pub(crate) fn to_js_error(err: &MountError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Mount the root view into the configured anchor of the current page.
///
/// Rejected with [`MountError::AlreadyMounted`] while a root is mounted.
pub fn bootstrap(config: &MountConfig) -> Result<Rc<RootApp>, MountError> {
    let document = current_document(config)?;
    ROOT.with(|slot| slot.borrow_mut().mount(&document, config))
}

/// The mounted root instance, if any
pub fn root() -> Option<Rc<RootApp>> {
    ROOT.with(|slot| slot.borrow().get())
}

/// Dispose the mounted root instance. Returns `Ok(true)` if one was torn down.
///
/// Fails with [`MountError::StillReferenced`] while handles obtained from
/// [`root`] are alive; the view stays mounted.
pub fn dispose() -> Result<bool, MountError> {
    ROOT.with(|slot| slot.borrow_mut().dispose())
}

/// Forget the mounted root without disposing it
#[cfg(test)]
pub(crate) fn reset() {
    ROOT.with(|slot| slot.borrow_mut().reset());
}

/// Dispose the mounted root instance, if any, and mount a fresh one
pub fn remount(config: &MountConfig) -> Result<Rc<RootApp>, MountError> {
    let document = current_document(config)?;
    ROOT.with(|slot| slot.borrow_mut().remount(&document, config))
}

#[wasm_bindgen(js_name = isMounted)]
pub fn is_mounted() -> bool {
    ROOT.with(|slot| slot.borrow().is_mounted())
}

#[wasm_bindgen(js_name = disposeRoot)]
pub fn dispose_root() -> Result<bool, JsValue> {
    dispose().map_err(|err| to_js_error(&err))
}

/// Hot-reload hook: tear down the current root and mount it again
#[wasm_bindgen(js_name = remountRoot)]
pub fn remount_root() -> Result<(), JsValue> {
    remount(&crate::page_config())
        .map(|_| ())
        .map_err(|err| to_js_error(&err))
}
