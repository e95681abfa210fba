//! Immutable tree node with persistent append.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::config::RenderSettings;
use crate::domain::builder::NodeBuilder;
use crate::domain::error::{NodeError, NodeResult};
use crate::domain::iter::{PostOrder, PreOrder};
use crate::render::render_inline;

/// One point in a tree plus the subtree reachable from it.
///
/// A node never changes after construction. [`add_child`](Self::add_child)
/// returns a new value; the receiver stays valid and unchanged. Cloning is
/// cheap: all fields are reference counted and shared between versions.
///
/// Equality and hashing look at the `id` only. Two nodes with the same id but
/// different payloads, tags or subtrees compare equal and collide in sets and
/// maps.
pub struct Node<T> {
    id: Arc<str>,
    data: Arc<T>,
    tag: Arc<str>,
    description: Arc<str>,
    children: Arc<[Node<T>]>,
}

impl<T> Node<T> {
    pub fn builder(id: impl Into<String>, data: T) -> NodeBuilder<T> {
        NodeBuilder::new(id, data)
    }

    pub(crate) fn from_parts(
        id: Arc<str>,
        data: Arc<T>,
        tag: Arc<str>,
        description: Arc<str>,
    ) -> Self {
        Self {
            id,
            data,
            tag,
            description,
            children: Arc::from(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns a new node equal to `self` with `child` appended.
    ///
    /// Fails if a direct child with the same id already exists, or if `child`
    /// has the receiver's own id. Each call copies the child handles, so
    /// appending `m` children one by one costs O(m²) in total.
    #[instrument(level = "trace", skip(self, child), fields(parent = %self.id, child = %child.id))]
    pub fn add_child(&self, child: Node<T>) -> NodeResult<Node<T>> {
        if self.contains(&child) {
            debug!("rejecting duplicate child");
            return Err(NodeError::DuplicateChild {
                parent: self.id.to_string(),
                child: child.id.to_string(),
            });
        }
        if *self == child {
            debug!("rejecting self reference");
            return Err(NodeError::SelfReference(child.id.to_string()));
        }

        let children: Vec<Node<T>> = self
            .children
            .iter()
            .cloned()
            .chain(std::iter::once(child))
            .collect();
        trace!(count = children.len(), "child appended");

        Ok(Self {
            id: Arc::clone(&self.id),
            data: Arc::clone(&self.data),
            tag: Arc::clone(&self.tag),
            description: Arc::clone(&self.description),
            children: Arc::from(children),
        })
    }

    /// Child at `index` in insertion order.
    ///
    /// Any index that is negative or past the end yields `None`.
    pub fn child_by_index<I>(&self, index: I) -> Option<&Node<T>>
    where
        I: TryInto<usize>,
    {
        index
            .try_into()
            .ok()
            .and_then(|index| self.children.get(index))
    }

    /// First direct child with the given id.
    pub fn child_by_id(&self, id: &str) -> Option<&Node<T>> {
        self.children.iter().find(|child| &*child.id == id)
    }

    /// Whether a direct child has the same id as `node`.
    pub fn contains(&self, node: &Node<T>) -> bool {
        self.children.iter().any(|child| child == node)
    }

    /// Pre-order iterator over the subtree, starting with `self`.
    pub fn iter(&self) -> PreOrder<'_, T> {
        PreOrder::new(self)
    }

    /// Post-order iterator over the subtree, ending with `self`.
    pub fn iter_postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self)
    }

    /// Nodes without children, in pre-order. A childless node is its own leaf.
    #[instrument(level = "trace", skip(self), fields(id = %self.id))]
    pub fn leaves(&self) -> Vec<&Node<T>> {
        self.iter().filter(|node| !node.has_children()).collect()
    }

    /// Every node of the subtree, `self` included, whose tag equals `tag`,
    /// in pre-order.
    #[instrument(level = "trace", skip(self), fields(id = %self.id))]
    pub fn children_by_tag(&self, tag: &str) -> Vec<&Node<T>> {
        self.iter().filter(|node| &*node.tag == tag).collect()
    }

    /// Number of levels in the subtree; a childless node has depth 1.
    #[instrument(level = "trace", skip(self), fields(id = %self.id))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)]; // (node, depth)

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }

        max_depth
    }

    /// Path from `self` down to each leaf, leaves in pre-order.
    #[instrument(level = "trace", skip(self), fields(id = %self.id))]
    pub fn leaf_paths(&self) -> Vec<Vec<&Node<T>>> {
        let mut paths = Vec::new();
        let mut stack = vec![(self, vec![self])];

        while let Some((node, path)) = stack.pop() {
            if !node.has_children() {
                paths.push(path);
                continue;
            }
            for child in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(child);
                stack.push((child, child_path));
            }
        }

        paths
    }

    /// Inline rendering with custom delimiters.
    pub fn render(&self, settings: &RenderSettings) -> String {
        render_inline(self, settings)
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            id: Arc::clone(&self.id),
            data: Arc::clone(&self.data),
            tag: Arc::clone(&self.tag),
            description: Arc::clone(&self.description),
            children: Arc::clone(&self.children),
        }
    }
}

/// Detaches uniquely owned child lists one level at a time, so dropping a deep
/// tree does not recurse once per level.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending = vec![std::mem::replace(&mut self.children, Arc::from(Vec::new()))];

        while let Some(mut children) = pending.pop() {
            let Some(owned) = Arc::get_mut(&mut children) else {
                continue;
            };
            for child in owned.iter_mut().filter(|child| child.has_children()) {
                pending.push(std::mem::replace(&mut child.children, Arc::from(Vec::new())));
            }
        }
    }
}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Node<T> {}

impl<T> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> Borrow<str> for Node<T> {
    fn borrow(&self) -> &str {
        &self.id
    }
}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = &'a Node<T>;
    type IntoIter = PreOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("data", &self.data)
            .field("tag", &self.tag)
            .field("description", &self.description)
            .field("children", &self.children)
            .finish()
    }
}

/// `id` for a childless node, `id --> [ child , child ]` otherwise.
impl<T> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_inline(self, &RenderSettings::default()))
    }
}
