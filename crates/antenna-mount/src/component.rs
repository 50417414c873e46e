//! Root Component Contract
//!
//! A root component is constructed against a mount target, renders into it
//! synchronously, and tears its output down when disposed.

/// Options passed to a root component on construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountOptions<T> {
    /// Node the component renders into
    pub target: T,
}

impl<T> MountOptions<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }
}

/// A constructible, disposable top-level UI component
pub trait RootComponent: Sized {
    /// Node type the component can be mounted into
    type Target;

    /// Construct the component and render it into `options.target`.
    ///
    /// Panics raised while rendering belong to the component and are not
    /// caught by the bootstrapper.
    fn construct(options: MountOptions<Self::Target>) -> Self;

    /// Tear down the rendered output and release held resources
    fn dispose(self);
}
