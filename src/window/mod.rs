//! Top-level windows
//!
//! A window is a container for one dock layout. The first window created is
//! the main window; it is never reaped when it runs out of panels.

mod registry;

pub use registry::WindowRegistry;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gesture::TabGestureDetector;
use crate::geometry::{Point, Rect};
use crate::layout::DockArea;

/// Unique identifier for a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Docking preview overlay
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RubberBand {
    #[default]
    Hidden,
    Shown(Rect),
}

impl RubberBand {
    pub fn is_shown(&self) -> bool {
        matches!(self, RubberBand::Shown(_))
    }
}

#[derive(Debug)]
pub struct Window {
    pub id: WindowId,
    /// Monotonic number used in the window title
    pub display_id: u64,
    pub title: String,
    pub is_main: bool,
    /// Frame geometry in screen coordinates
    pub geometry: Rect,
    pub maximized: bool,
    pub minimized: bool,
    /// Tabbed panels hide their own title bars and rely on the tab strip
    pub no_title_bars: bool,
    pub rubber_band: RubberBand,
    pub area: DockArea,
    pub gestures: TabGestureDetector,
    /// Set when the window ran out of panels and a destroy is queued
    pub pending_destroy: bool,
}

impl Window {
    pub(crate) fn new(id: WindowId, display_id: u64, title: String, geometry: Rect) -> Self {
        Self {
            id,
            display_id,
            title,
            is_main: false,
            geometry,
            maximized: false,
            minimized: false,
            no_title_bars: false,
            rubber_band: RubberBand::Hidden,
            area: DockArea::default(),
            gestures: TabGestureDetector::new(),
            pending_destroy: false,
        }
    }

    /// Window-local rect the dock area lays out into
    pub fn content_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.width, self.geometry.height)
    }

    /// Convert a window-local point to screen coordinates
    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(self.geometry.x + local.x, self.geometry.y + local.y)
    }

    /// Show the docking preview over the whole window
    pub fn show_rubber_band(&mut self) {
        self.rubber_band = RubberBand::Shown(self.geometry);
    }

    pub fn hide_rubber_band(&mut self) {
        self.rubber_band = RubberBand::Hidden;
    }

    /// Fill the given available rect
    pub fn maximize(&mut self, available: Rect) {
        self.geometry = available;
        self.maximized = true;
        self.minimized = false;
    }

    /// Un-minimize and bring to front
    pub fn raise(&mut self) {
        self.minimized = false;
    }
}
