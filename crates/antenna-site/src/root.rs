//! Leptos Root Instance

use antenna_mount::{MountOptions, RootComponent};
use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use web_sys::HtmlElement;

use crate::app::Root;

/// The site's [`Root`] view mounted into a target element.
///
/// Dropping the instance, or disposing it, unmounts the view and cleans up
/// its reactive owner.
pub struct RootApp {
    target: HtmlElement,
    handle: UnmountHandle<AnyViewState>,
}

impl RootApp {
    /// Element the view is rendered into
    pub fn target(&self) -> &HtmlElement {
        &self.target
    }
}

impl RootComponent for RootApp {
    type Target = HtmlElement;

    fn construct(options: MountOptions<HtmlElement>) -> Self {
        let target = options.target;
        tracing::debug!(id = %target.id(), "Rendering root view");

        let handle = mount_to(target.clone(), || view! { <Root/> }.into_any());

        Self { target, handle }
    }

    fn dispose(self) {
        let Self { target, handle } = self;
        drop(handle);
        tracing::debug!(id = %target.id(), "Root view unmounted");
    }
}
