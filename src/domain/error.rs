//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Structural edit failures raised by [`Node::add_child`](crate::domain::Node::add_child).
///
/// The receiver is never modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("duplicate child '{child}' under node '{parent}'")]
    DuplicateChild { parent: String, child: String },

    #[error("node '{0}' cannot be its own child")]
    SelfReference(String),
}

/// Result type for node operations.
pub type NodeResult<T> = Result<T, NodeError>;
