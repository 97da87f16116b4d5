//! State dump of every window and panel
//!
//! Serializes a snapshot of the docking state to JSON, or renders it as an
//! indented tree for humans. Used by the scenario runner and in tests.

use std::fmt::Write as _;

use serde::Serialize;

use crate::geometry::{Orientation, Rect};
use crate::layout::{DockArea, LayoutNode};
use crate::model::DockModel;
use crate::panel::TitleBarMode;
use crate::window::{RubberBand, Window};

#[derive(Debug, Serialize)]
pub struct StateDump {
    pub main_window: Option<u64>,
    pub windows: Vec<WindowDump>,
    pub floating: Vec<PanelDump>,
}

#[derive(Debug, Serialize)]
pub struct WindowDump {
    pub id: u64,
    pub title: String,
    pub is_main: bool,
    pub geometry: Rect,
    pub maximized: bool,
    pub no_title_bars: bool,
    pub rubber_band: bool,
    pub layout: LayoutNodeDump,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutNodeDump {
    Empty,
    Group {
        id: u64,
        active: usize,
        tabs: Vec<PanelDump>,
    },
    Split {
        direction: Orientation,
        children: Vec<LayoutNodeDump>,
        ratios: Vec<f32>,
    },
}

#[derive(Debug, Serialize)]
pub struct PanelDump {
    pub id: u64,
    pub title: String,
    pub title_bar: TitleBarMode,
    pub closable: bool,
    pub active: bool,
    pub geometry: Rect,
}

impl StateDump {
    pub fn from_model(model: &DockModel) -> Self {
        let windows = model
            .windows
            .windows()
            .map(|w| WindowDump::from_window(model, w))
            .collect();
        let floating = model
            .floating_panels()
            .into_iter()
            .filter_map(|id| PanelDump::from_model(model, id))
            .collect();
        Self {
            main_window: model.windows.main_window().map(|w| w.0),
            windows,
            floating,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Indented tree, one line per window, split, group and tab
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        for window in &self.windows {
            let _ = writeln!(
                out,
                "{}{} [{}x{} at {},{}]{}",
                window.title,
                if window.is_main { " (main)" } else { "" },
                window.geometry.width,
                window.geometry.height,
                window.geometry.x,
                window.geometry.y,
                if window.no_title_bars { " no-title-bars" } else { "" },
            );
            render_node(&mut out, &window.layout, 1);
        }
        if !self.floating.is_empty() {
            let _ = writeln!(out, "floating");
            for panel in &self.floating {
                let _ = writeln!(
                    out,
                    "  {} [{}x{} at {},{}]",
                    panel.title,
                    panel.geometry.width,
                    panel.geometry.height,
                    panel.geometry.x,
                    panel.geometry.y
                );
            }
        }
        out
    }
}

fn render_node(out: &mut String, node: &LayoutNodeDump, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        LayoutNodeDump::Empty => {
            let _ = writeln!(out, "{}(empty)", indent);
        }
        LayoutNodeDump::Group { id, active, tabs } => {
            let _ = writeln!(out, "{}group#{}", indent, id);
            for (i, tab) in tabs.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{}  {} {}{}",
                    indent,
                    if i == *active { "*" } else { "-" },
                    tab.title,
                    if tab.title_bar == TitleBarMode::Suppressed {
                        " (no title bar)"
                    } else {
                        ""
                    }
                );
            }
        }
        LayoutNodeDump::Split {
            direction,
            children,
            ..
        } => {
            let _ = writeln!(out, "{}split {:?}", indent, direction);
            for child in children {
                render_node(out, child, depth + 1);
            }
        }
    }
}

impl WindowDump {
    fn from_window(model: &DockModel, window: &Window) -> Self {
        Self {
            id: window.id.0,
            title: window.title.clone(),
            is_main: window.is_main,
            geometry: window.geometry,
            maximized: window.maximized,
            no_title_bars: window.no_title_bars,
            rubber_band: matches!(window.rubber_band, RubberBand::Shown(_)),
            layout: dump_node(model, &window.area, &window.area.layout),
        }
    }
}

fn dump_node(model: &DockModel, area: &DockArea, node: &LayoutNode) -> LayoutNodeDump {
    match node {
        LayoutNode::Empty => LayoutNodeDump::Empty,
        LayoutNode::Group(id) => {
            let Some(group) = area.group(*id) else {
                return LayoutNodeDump::Empty;
            };
            LayoutNodeDump::Group {
                id: id.0,
                active: group.active_index,
                tabs: group
                    .panels
                    .iter()
                    .filter_map(|p| PanelDump::from_model(model, *p))
                    .collect(),
            }
        }
        LayoutNode::Split(container) => LayoutNodeDump::Split {
            direction: container.direction,
            children: container
                .children
                .iter()
                .map(|child| dump_node(model, area, child))
                .collect(),
            ratios: container.ratios.clone(),
        },
    }
}

impl PanelDump {
    fn from_model(model: &DockModel, id: crate::panel::PanelId) -> Option<Self> {
        let panel = model.panel(id)?;
        Some(Self {
            id: id.0,
            title: panel.title.clone(),
            title_bar: panel.title_bar(),
            closable: panel.features.closable,
            active: panel.marked_active(),
            geometry: panel.geometry,
        })
    }
}
