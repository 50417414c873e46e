//! Shared fixtures for unit tests

use std::cell::Cell;

use crate::component::{MountOptions, RootComponent};
use crate::memory::MemoryNode;

thread_local! {
    static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
    static DISPOSED: Cell<usize> = const { Cell::new(0) };
}

/// Number of `Greeting` instances constructed on this test thread
pub fn constructed() -> usize {
    CONSTRUCTED.with(Cell::get)
}

/// Number of `Greeting` instances disposed on this test thread
pub fn disposed() -> usize {
    DISPOSED.with(Cell::get)
}

/// Root component rendering "Hello" into its target
#[derive(Debug)]
pub struct Greeting {
    target: MemoryNode,
}

impl Greeting {
    pub fn target(&self) -> &MemoryNode {
        &self.target
    }
}

impl RootComponent for Greeting {
    type Target = MemoryNode;

    fn construct(options: MountOptions<MemoryNode>) -> Self {
        CONSTRUCTED.with(|c| c.set(c.get() + 1));
        options.target.set_text_content("Hello");
        Self {
            target: options.target,
        }
    }

    fn dispose(self) {
        DISPOSED.with(|c| c.set(c.get() + 1));
        self.target.clear();
    }
}
