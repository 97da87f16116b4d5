//! Panel state

use std::fmt;

use serde::{Deserialize, Serialize};

use super::timer::DragTimer;
use crate::geometry::{Point, Rect};
use crate::panels::PanelContent;
use crate::window::WindowId;

/// Height of a panel's own title bar when shown
pub const TITLE_BAR_HEIGHT: f32 = 22.0;

/// Unique identifier for a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// Which title bar a panel currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleBarMode {
    /// The panel's own title bar
    #[default]
    Default,
    /// Zero-height placeholder; the shared tab strip stands in for it
    Suppressed,
}

/// What the user may do with a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelFeatures {
    pub movable: bool,
    pub floatable: bool,
    pub closable: bool,
}

impl Default for PanelFeatures {
    fn default() -> Self {
        Self {
            movable: true,
            floatable: true,
            closable: true,
        }
    }
}

/// A single dockable content unit
#[derive(Debug)]
pub struct Panel {
    pub id: PanelId,
    pub title: String,
    content: Box<dyn PanelContent>,
    pub features: PanelFeatures,
    /// Frame geometry in screen coordinates. While docked this mirrors the
    /// panel's area inside its window; while floating it is the free frame.
    pub geometry: Rect,
    pub drag_timer: DragTimer,
    floating: bool,
    marked_active: bool,
    title_bar: TitleBarMode,
    /// Structural owner. A floating panel keeps its owner until it is merged
    /// somewhere else.
    parent: Option<WindowId>,
}

impl Panel {
    pub fn new(
        id: PanelId,
        content: Box<dyn PanelContent>,
        title: impl Into<String>,
        parent: WindowId,
    ) -> Self {
        let features = PanelFeatures {
            closable: content.kind().is_closable(),
            ..PanelFeatures::default()
        };
        Self {
            id,
            title: title.into(),
            content,
            features,
            geometry: Rect::default(),
            drag_timer: DragTimer::default(),
            floating: false,
            marked_active: false,
            title_bar: TitleBarMode::Default,
            parent: Some(parent),
        }
    }

    pub fn content(&self) -> &dyn PanelContent {
        self.content.as_ref()
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn is_docked(&self) -> bool {
        !self.floating
    }

    /// Flip the floating flag. Returns true if the state changed.
    ///
    /// Only the panel's own flag is touched here; detaching from or
    /// re-entering a window layout is done by `update::panel::set_floating`.
    pub(crate) fn set_floating(&mut self, floating: bool) -> bool {
        if self.floating == floating {
            return false;
        }
        self.floating = floating;
        true
    }

    pub fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<WindowId>) {
        self.parent = parent;
    }

    pub fn title_bar(&self) -> TitleBarMode {
        self.title_bar
    }

    /// Show the default title bar (`true`) or the zero-height placeholder.
    /// No-op if already in the requested mode; returns true if it changed.
    pub fn switch_title_bar(&mut self, show_default: bool) -> bool {
        let wanted = if show_default {
            TitleBarMode::Default
        } else {
            TitleBarMode::Suppressed
        };
        if self.title_bar == wanted {
            return false;
        }
        self.title_bar = wanted;
        true
    }

    pub fn title_bar_height(&self) -> f32 {
        match self.title_bar {
            TitleBarMode::Default => TITLE_BAR_HEIGHT,
            TitleBarMode::Suppressed => 0.0,
        }
    }

    /// Move the frame so that the middle of its title bar lands on `p`
    pub fn center_on_point(&mut self, p: Point) {
        let local_x = self.geometry.width / 2.0;
        let local_y = self.title_bar_height() / 2.0;
        self.geometry = self
            .geometry
            .moved_to(Point::new(p.x - local_x, p.y - local_y));
    }

    /// Center of the title bar in screen coordinates
    pub fn title_bar_center(&self) -> Point {
        Point::new(
            self.geometry.x + self.geometry.width / 2.0,
            self.geometry.y + self.title_bar_height() / 2.0,
        )
    }

    pub fn marked_active(&self) -> bool {
        self.marked_active
    }

    pub fn set_marked_active(&mut self, active: bool) {
        self.marked_active = active;
    }
}
