//! Root Slot
//!
//! Single-assignment holder for the mounted root instance. A slot is either
//! empty or holds exactly one instance; mounting into an occupied slot is
//! rejected until the current instance is disposed.

use std::rc::Rc;

use crate::component::RootComponent;
use crate::config::MountConfig;
use crate::error::{MountError, Result};
use crate::host::HostDocument;
use crate::mount::mount;

struct Mounted<C> {
    anchor: String,
    instance: Rc<C>,
}

/// Holder for the application's root instance
pub struct RootSlot<C> {
    mounted: Option<Mounted<C>>,
}

impl<C> Default for RootSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for RootSlot<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootSlot")
            .field("anchor", &self.anchor())
            .finish()
    }
}

impl<C> RootSlot<C> {
    pub const fn new() -> Self {
        Self { mounted: None }
    }

    pub const fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// The mounted instance, if any. Every call returns the same instance
    /// until it is disposed.
    pub fn get(&self) -> Option<Rc<C>> {
        self.mounted.as_ref().map(|m| Rc::clone(&m.instance))
    }

    /// Anchor the current instance was mounted on
    pub fn anchor(&self) -> Option<&str> {
        self.mounted.as_ref().map(|m| m.anchor.as_str())
    }

    /// Empty the slot without running the instance's disposal.
    ///
    /// Meant for test harnesses that tear down the host document themselves.
    pub fn reset(&mut self) {
        self.mounted = None;
    }
}

impl<C: RootComponent> RootSlot<C> {
    /// Mount a root instance and store it in the slot.
    ///
    /// Fails with [`MountError::AlreadyMounted`] while an instance is held;
    /// the held instance is left untouched and nothing is constructed.
    pub fn mount<D>(&mut self, document: &D, config: &MountConfig) -> Result<Rc<C>>
    where
        D: HostDocument<Node = C::Target> + ?Sized,
    {
        if let Some(mounted) = &self.mounted {
            tracing::warn!(
                anchor = %mounted.anchor,
                "Rejecting mount: root instance already mounted"
            );
            return Err(MountError::AlreadyMounted {
                anchor: mounted.anchor.clone(),
            });
        }

        let instance = Rc::new(mount::<D, C>(document, config)?);
        self.mounted = Some(Mounted {
            anchor: config.anchor_id.clone(),
            instance: Rc::clone(&instance),
        });

        Ok(instance)
    }

    /// Dispose the held instance and empty the slot.
    ///
    /// Returns `Ok(true)` when an instance was disposed and `Ok(false)` when
    /// the slot was empty. While other handles to the instance are alive it
    /// cannot be torn down: the slot stays occupied and
    /// [`MountError::StillReferenced`] is returned.
    pub fn dispose(&mut self) -> Result<bool> {
        let Some(Mounted { anchor, instance }) = self.mounted.take() else {
            tracing::debug!("Dispose requested with nothing mounted");
            return Ok(false);
        };

        match Rc::try_unwrap(instance) {
            Ok(instance) => {
                instance.dispose();
                tracing::info!(anchor = %anchor, "Root component disposed");
                Ok(true)
            }
            Err(shared) => {
                let holders = Rc::strong_count(&shared) - 1;
                tracing::warn!(
                    anchor = %anchor,
                    holders,
                    "Root instance still referenced; keeping it mounted"
                );
                self.mounted = Some(Mounted {
                    anchor: anchor.clone(),
                    instance: shared,
                });
                Err(MountError::StillReferenced { anchor, holders })
            }
        }
    }

    /// Dispose any held instance, then mount a fresh one.
    ///
    /// Nothing is constructed if the held instance cannot be disposed. If the
    /// disposal succeeds but the lookup fails, the slot is left empty.
    pub fn remount<D>(&mut self, document: &D, config: &MountConfig) -> Result<Rc<C>>
    where
        D: HostDocument<Node = C::Target> + ?Sized,
    {
        self.dispose()?;
        self.mount(document, config)
    }
}
