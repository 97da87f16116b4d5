//! Placeholder content for prototyping
//!
//! A simple content view that only carries a title and a kind.
//! Used by the scenario runner and in tests.

use super::{ContentKind, PanelContent};

/// Placeholder content state
#[derive(Debug, Clone)]
pub struct PlaceholderContent {
    pub title: String,
    pub kind: ContentKind,
}

impl PlaceholderContent {
    pub fn new(title: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }

    /// Shorthand for a closable file view
    pub fn file(title: impl Into<String>) -> Self {
        Self::new(title, ContentKind::File)
    }
}

impl PanelContent for PlaceholderContent {
    fn title(&self) -> &str {
        &self.title
    }

    fn kind(&self) -> ContentKind {
        self.kind
    }
}
