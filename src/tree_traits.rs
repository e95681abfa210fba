use termtree::Tree;
use tracing::instrument;

use crate::config::RenderSettings;
use crate::domain::Node;

/// Conversion into a `termtree` view for multi-line display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String> {
        self.to_tree_string_with(&RenderSettings::default())
    }

    fn to_tree_string_with(&self, settings: &RenderSettings) -> Tree<String>;
}

impl<T> TreeNodeConvert for Node<T> {
    #[instrument(level = "trace", skip(self, settings), fields(id = %self.id()))]
    fn to_tree_string_with(&self, settings: &RenderSettings) -> Tree<String> {
        let label = if settings.show_tags && !self.tag().is_empty() {
            format!("{} ({})", self.id(), self.tag())
        } else {
            self.id().to_string()
        };

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string_with(settings))
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}
