//! Domain layer: the node type and its construction
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod builder;
pub mod error;
pub mod iter;
pub mod node;

pub use builder::NodeBuilder;
pub use error::{NodeError, NodeResult};
pub use iter::{PostOrder, PreOrder};
pub use node::Node;
