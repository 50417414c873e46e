//! In-Memory Host Document
//!
//! A minimal document for development and testing: elements keyed by id,
//! each holding text content. Node handles are shared, so whatever a
//! component renders into a target is visible through the document.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::host::HostDocument;

#[derive(Debug, Default)]
struct NodeState {
    id: String,
    text: String,
}

/// Shared handle to an element of a [`MemoryDocument`]
#[derive(Clone, Debug)]
pub struct MemoryNode(Rc<RefCell<NodeState>>);

impl MemoryNode {
    fn new(id: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(NodeState {
            id: id.into(),
            text: String::new(),
        })))
    }

    pub fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    pub fn text_content(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text_content(&self, text: &str) {
        self.0.borrow_mut().text = text.to_owned();
    }

    /// Remove all content
    pub fn clear(&self) {
        self.0.borrow_mut().text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().text.is_empty()
    }

    /// Whether both handles refer to the same element
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// In-memory host document (for development/testing)
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryNode>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing a single empty element with the given id
    pub fn with_element(id: &str) -> Self {
        let mut document = Self::new();
        document.insert(id);
        document
    }

    /// Add an empty element, replacing any element with the same id
    pub fn insert(&mut self, id: &str) -> MemoryNode {
        let node = MemoryNode::new(id);
        self.elements.insert(id.to_owned(), node.clone());
        node
    }

    #[cfg(test)]
    pub(crate) fn remove(&mut self, id: &str) -> Option<MemoryNode> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&MemoryNode> {
        self.elements.get(id)
    }
}

impl HostDocument for MemoryDocument {
    type Node = MemoryNode;

    fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
        self.elements.get(id).cloned()
    }
}
