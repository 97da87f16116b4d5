//! Panel content providers
//!
//! The docking core never looks inside a panel's content: it only needs a
//! title to show on the tab and something to own for the panel's lifetime.
//! Concrete views (hex editors, node trees, the log) implement
//! [`PanelContent`] in the host application.
//!
//! ## Available Contents
//!
//! - **PlaceholderContent**: Generic stand-in used by the scenario runner and tests

mod placeholder;

pub use placeholder::PlaceholderContent;

use serde::{Deserialize, Serialize};

/// An opaque view hosted by a panel
pub trait PanelContent: std::fmt::Debug {
    /// Title shown on the panel's title bar and tab
    fn title(&self) -> &str;

    /// What sort of view this is (used for default panel features)
    fn kind(&self) -> ContentKind {
        ContentKind::File
    }
}

/// Broad category of a content view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// A view onto an opened file (hex view, node tree)
    File,
    /// The database overview
    Database,
    /// The application log
    Log,
}

impl ContentKind {
    /// Whether panels holding this kind of content can be closed by the user.
    /// The database and log views live for the whole session.
    pub fn is_closable(&self) -> bool {
        matches!(self, ContentKind::File)
    }
}
