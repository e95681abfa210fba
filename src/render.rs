//! Text renderings of nodes.

use itertools::{Itertools, Position};
use termtree::Tree;
use tracing::instrument;

use crate::config::RenderSettings;
use crate::domain::Node;
use crate::tree_traits::TreeNodeConvert;

enum Piece<'a, T> {
    Node(&'a Node<T>),
    Text(&'a str),
}

/// Renders `id` for a childless node, `id<arrow><open>children<close>` otherwise,
/// with children rendered the same way and joined by the separator.
pub fn render_inline<T>(node: &Node<T>, settings: &RenderSettings) -> String {
    let mut out = String::new();
    let mut stack = vec![Piece::Node(node)];

    while let Some(piece) = stack.pop() {
        let current = match piece {
            Piece::Text(text) => {
                out.push_str(text);
                continue;
            }
            Piece::Node(current) => current,
        };
        out.push_str(current.id());
        if !current.has_children() {
            continue;
        }
        out.push_str(&settings.arrow);
        out.push_str(&settings.open);

        // Pushed in reverse so the first child is rendered first
        stack.push(Piece::Text(&settings.close));
        for (position, child) in current.children().iter().rev().with_position() {
            stack.push(Piece::Node(child));
            if !matches!(position, Position::Last | Position::Only) {
                stack.push(Piece::Text(&settings.separator));
            }
        }
    }

    out
}

/// Multi-line view of several trees, one after another.
#[instrument(level = "debug", skip(roots, settings), fields(count = roots.len()))]
pub fn render_forest<T>(roots: &[Node<T>], settings: &RenderSettings) -> String {
    if roots.is_empty() {
        return Tree::new(settings.empty_label.clone()).to_string();
    }
    roots
        .iter()
        .map(|root| root.to_tree_string_with(settings).to_string())
        .collect()
}
