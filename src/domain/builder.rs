//! Builder for initial, childless nodes.

use std::fmt;
use std::sync::Arc;

use crate::domain::node::Node;

/// Collects the fields of a new node.
///
/// `id` and `data` are required; `tag` and `description` default to the empty
/// string. The builder is a plain value: [`build`](Self::build) borrows it, so
/// it can be reused or cloned, and every node built from it shares the same
/// payload allocation.
pub struct NodeBuilder<T> {
    id: String,
    data: Arc<T>,
    tag: String,
    description: String,
}

impl<T> NodeBuilder<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
            tag: String::new(),
            description: String::new(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Snapshot the configured fields into a node without children.
    pub fn build(&self) -> Node<T> {
        Node::from_parts(
            Arc::from(self.id.as_str()),
            Arc::clone(&self.data),
            Arc::from(self.tag.as_str()),
            Arc::from(self.description.as_str()),
        )
    }
}

impl<T> Clone for NodeBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            data: Arc::clone(&self.data),
            tag: self.tag.clone(),
            description: self.description.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeBuilder")
            .field("id", &self.id)
            .field("data", &self.data)
            .field("tag", &self.tag)
            .field("description", &self.description)
            .finish()
    }
}
