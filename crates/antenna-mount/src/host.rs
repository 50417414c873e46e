//! Host Document Abstraction

/// The document the application is loaded into.
///
/// Implementations resolve an element identifier to a node handle able to
/// host child content, or `None` when no such node exists.
pub trait HostDocument {
    /// Handle to a node in the document tree
    type Node;

    /// Look up an element by its identifier
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}
