//! Depth-first iterators over a node's subtree.

use tracing::instrument;

use crate::domain::node::Node;

/// Pre-order traversal: a node, then each child subtree in insertion order.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children().iter().rev());
        Some(current)
    }
}

/// Post-order traversal: each child subtree in insertion order, then the node.
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self {
            stack: vec![(root, false)],
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if visited {
                return Some(current);
            }
            self.stack.push((current, true));
            for child in current.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}
