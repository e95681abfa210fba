//! Immutable, identity-keyed tree nodes.
//!
//! A [`Node`] carries an id, a payload, a tag, a description and an ordered
//! list of children. [`Node::add_child`] never mutates the receiver: it returns
//! a new node that shares the unchanged structure with the old one, so every
//! previous value stays a valid version of the tree.
//!
//! ```
//! use arbor::Node;
//!
//! let root = Node::builder("root", "r").build();
//! let root = root
//!     .add_child(Node::builder("1", "c").build())?
//!     .add_child(Node::builder("2", "c").tag("relation").build())?;
//!
//! assert_eq!(root.to_string(), "root --> [ 1 , 2 ]");
//! assert_eq!(root.child_by_id("2").map(|n| n.tag()), Some("relation"));
//! assert!(root.child_by_index(2).is_none());
//! # Ok::<(), arbor::NodeError>(())
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod render;
pub mod tree_traits;
pub mod util;

pub use config::{RenderSettings, Settings};
pub use domain::{Node, NodeBuilder, NodeError, NodeResult, PostOrder, PreOrder};
pub use errors::{ArborError, ArborResult};
pub use tree_traits::TreeNodeConvert;
