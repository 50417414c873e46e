//! # antenna-mount
//!
//! Host-agnostic bootstrapper for the antenna site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        RootSlot                          │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐  │
//! │  │ HostDocument │──▶│    mount     │──▶│ RootComponent│  │
//! │  │  (lookup)    │   │ { target }   │   │  (instance)  │  │
//! │  └──────────────┘   └──────────────┘   └──────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The `HostDocument` and `RootComponent` traits keep the mount logic free of
//! any browser types, so the same code drives the `web_sys` document in the
//! browser and the in-memory document in tests.

pub mod component;
pub mod config;
pub mod error;
pub mod host;
pub mod memory;
pub mod mount;
pub mod slot;

#[cfg(test)]
mod test_support;

pub use component::{MountOptions, RootComponent};
pub use config::{ANCHOR_ID, MountConfig};
pub use error::{MountError, Result};
pub use host::HostDocument;
pub use memory::{MemoryDocument, MemoryNode};
pub use mount::mount;
pub use slot::RootSlot;
