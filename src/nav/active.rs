//! Active-item resolution: which root item matches the current route.

use super::item::{NavId, NavTree};

/// First root item (declaration order) whose own href, or any child's href,
/// equals `path`. Pure and idempotent; emits nothing.
pub fn resolve_active(tree: &NavTree, path: &str) -> Option<NavId> {
    tree.iter()
        .find(|item| {
            item.href() == Some(path) || item.children().iter().any(|child| child.href == path)
        })
        .map(|item| item.id.clone())
}
