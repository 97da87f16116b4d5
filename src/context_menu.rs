//! Panel context menu
//!
//! Built fresh each time it is requested, from the live window and display
//! lists, so entries always reflect where the panel currently is.

use serde::Serialize;

use crate::geometry::Orientation;
use crate::model::DockModel;
use crate::panel::PanelId;
use crate::window::WindowId;

const ALREADY_THERE: &str = " (it's already there)";

/// What a context menu entry does when picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    MoveToDesktop(usize),
    MoveToWindow(WindowId),
    /// Move to a new top level window
    Detach,
    /// Move to a new top level window and maximize
    DetachAndMaximize,
    Split(Orientation),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
    pub enabled: bool,
}

impl MenuEntry {
    fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
            enabled: true,
        }
    }

    fn already_there(mut self, already_there: bool) -> Self {
        if already_there {
            self.label.push_str(ALREADY_THERE);
            self.enabled = false;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelContextMenu {
    pub panel: PanelId,
    /// "Move to desktop" submenu
    pub move_to_desktop: Vec<MenuEntry>,
    /// "Move to window" submenu
    pub move_to_window: Vec<MenuEntry>,
    /// Top-level actions after the two submenus
    pub actions: Vec<MenuEntry>,
}

impl PanelContextMenu {
    pub fn build(model: &DockModel, panel_id: PanelId) -> Option<Self> {
        let panel = model.panels.get(&panel_id)?;
        let owner = panel.parent();

        let current_display = model.platform.display_at(panel.geometry.center());
        let move_to_desktop = (0..model.platform.displays.len())
            .map(|index| {
                MenuEntry::new(
                    format!("Desktop {}", index + 1),
                    MenuAction::MoveToDesktop(index),
                )
                .already_there(index == current_display)
            })
            .collect();

        let move_to_window = model
            .windows
            .windows()
            .map(|window| {
                let docked_here = !panel.is_floating() && owner == Some(window.id);
                MenuEntry::new(window.title.clone(), MenuAction::MoveToWindow(window.id))
                    .already_there(docked_here)
            })
            .collect();

        let mut actions = vec![
            MenuEntry::new("Move to new top level window", MenuAction::Detach),
            MenuEntry::new(
                "Move to new top level window and maximize",
                MenuAction::DetachAndMaximize,
            ),
        ];

        let tabbed = owner
            .and_then(|w| model.windows.get(w))
            .is_some_and(|w| !w.area.tabified_with(panel_id).is_empty());
        if tabbed {
            actions.push(MenuEntry::new(
                "Split horizontally",
                MenuAction::Split(Orientation::Horizontal),
            ));
            actions.push(MenuEntry::new(
                "Split vertically",
                MenuAction::Split(Orientation::Vertical),
            ));
        }

        Some(Self {
            panel: panel_id,
            move_to_desktop,
            move_to_window,
            actions,
        })
    }

    /// Every entry, submenus first
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.move_to_desktop
            .iter()
            .chain(&self.move_to_window)
            .chain(&self.actions)
    }

    pub fn find(&self, action: MenuAction) -> Option<&MenuEntry> {
        self.entries().find(|e| e.action == action)
    }
}
