//! Tab groups and their tab strips
//!
//! A tab group is one screen area holding one or more panels. Once two or
//! more panels share the area a tab strip appears along its top edge.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::panel::PanelId;

/// Length of a tab along the strip
pub const TAB_WIDTH: f32 = 120.0;

/// Thickness of a tab strip across its flow
pub const TAB_STRIP_THICKNESS: f32 = 28.0;

/// Unique identifier for a tab group (and its tab strip)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// Which edge the tab strip is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabShape {
    #[default]
    North,
    South,
    West,
    East,
}

impl TabShape {
    /// Tabs flow left-to-right (as opposed to top-to-bottom)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, TabShape::North | TabShape::South)
    }

    /// Component of a displacement perpendicular to the tab flow
    pub fn minor_axis(&self, delta: Point) -> f32 {
        if self.is_horizontal() {
            delta.y
        } else {
            delta.x
        }
    }
}

/// One area of a window: the panels tabbed together there
#[derive(Debug, Clone)]
pub struct TabGroup {
    pub id: GroupId,
    pub panels: Vec<PanelId>,
    pub active_index: usize,
    /// Window-local rect (set during layout computation)
    pub rect: Rect,
    pub shape: TabShape,
    /// Per-tab close button, parallel to `panels`
    pub close_buttons: Vec<bool>,
    /// Whether the strip offers the toolkit's own context menu
    pub native_context_menu: bool,
}

impl TabGroup {
    pub fn new(id: GroupId, first: PanelId) -> Self {
        Self {
            id,
            panels: vec![first],
            active_index: 0,
            rect: Rect::default(),
            shape: TabShape::default(),
            close_buttons: vec![false],
            native_context_menu: true,
        }
    }

    /// Get the panel on the front tab
    pub fn active_panel(&self) -> Option<PanelId> {
        self.panels.get(self.active_index).copied()
    }

    pub fn index_of(&self, panel: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| *p == panel)
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.index_of(panel).is_some()
    }

    /// A strip is only shown for two or more panels
    pub fn has_tab_strip(&self) -> bool {
        self.panels.len() >= 2
    }

    pub(crate) fn push(&mut self, panel: PanelId) {
        self.panels.push(panel);
        self.close_buttons.push(false);
    }

    /// Remove a panel; keeps the active index pointing at a valid tab
    pub(crate) fn remove(&mut self, panel: PanelId) -> bool {
        let Some(index) = self.index_of(panel) else {
            return false;
        };
        self.panels.remove(index);
        if index < self.close_buttons.len() {
            self.close_buttons.remove(index);
        }
        if self.active_index > index || self.active_index >= self.panels.len() {
            self.active_index = self.active_index.saturating_sub(1);
        }
        true
    }

    /// Move a tab within the strip, keeping the active panel in front
    pub(crate) fn move_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.panels.len() || to >= self.panels.len() || from == to {
            return false;
        }
        let active = self.active_panel();
        let panel = self.panels.remove(from);
        self.panels.insert(to, panel);
        let button = self.close_buttons.remove(from);
        self.close_buttons.insert(to, button);
        if let Some(active) = active {
            self.active_index = self.index_of(active).unwrap_or(0);
        }
        true
    }

    /// Window-local rect of the tab strip
    pub fn strip_rect(&self) -> Rect {
        match self.shape {
            TabShape::North => Rect::new(self.rect.x, self.rect.y, self.rect.width, TAB_STRIP_THICKNESS),
            TabShape::South => Rect::new(
                self.rect.x,
                self.rect.bottom() - TAB_STRIP_THICKNESS,
                self.rect.width,
                TAB_STRIP_THICKNESS,
            ),
            TabShape::West => Rect::new(self.rect.x, self.rect.y, TAB_STRIP_THICKNESS, self.rect.height),
            TabShape::East => Rect::new(
                self.rect.right() - TAB_STRIP_THICKNESS,
                self.rect.y,
                TAB_STRIP_THICKNESS,
                self.rect.height,
            ),
        }
    }

    /// Strip-local rect of a tab
    pub fn tab_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.panels.len() {
            return None;
        }
        let offset = index as f32 * TAB_WIDTH;
        Some(if self.shape.is_horizontal() {
            Rect::new(offset, 0.0, TAB_WIDTH, TAB_STRIP_THICKNESS)
        } else {
            Rect::new(0.0, offset, TAB_STRIP_THICKNESS, TAB_WIDTH)
        })
    }

    /// Index of the tab under a strip-local point
    pub fn tab_at(&self, p: Point) -> Option<usize> {
        if !self.has_tab_strip() {
            return None;
        }
        (0..self.panels.len()).find(|&i| self.tab_rect(i).is_some_and(|r| r.contains_point(p)))
    }
}
