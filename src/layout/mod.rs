//! Per-window dock layout: tab groups, splits and tab strips

mod area;
mod tab_group;
mod tree;

pub use area::{DockArea, DEFAULT_MIN_PANE_EXTENT};
pub use tab_group::{GroupId, TabGroup, TabShape, TAB_STRIP_THICKNESS, TAB_WIDTH};
pub use tree::{DockSide, LayoutNode, SplitContainer};
