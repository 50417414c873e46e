//! Mount Operation

use crate::component::{MountOptions, RootComponent};
use crate::config::MountConfig;
use crate::error::{MountError, Result};
use crate::host::HostDocument;

/// Resolve the configured anchor and construct a root component bound to it.
///
/// Returns [`MountError::TargetNotFound`] when the document has no element
/// with the anchor identifier. Nothing is retried; without its anchor the
/// application has nowhere to render.
pub fn mount<D, C>(document: &D, config: &MountConfig) -> Result<C>
where
    D: HostDocument<Node = C::Target> + ?Sized,
    C: RootComponent,
{
    let anchor = config.anchor_id.as_str();
    tracing::debug!(anchor, "Resolving mount target");

    let target = document.element_by_id(anchor).ok_or_else(|| {
        tracing::error!(anchor, "Mount target not found");
        MountError::TargetNotFound {
            anchor: anchor.to_owned(),
        }
    })?;

    let instance = C::construct(MountOptions::new(target));
    tracing::info!(anchor, "Root component mounted");

    Ok(instance)
}
