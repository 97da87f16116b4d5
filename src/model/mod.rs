//! Docking model - the complete state of every window and panel
//!
//! This module holds all state following the Elm Architecture pattern. The
//! update functions in `crate::update` are the only code that mutates it.

use std::collections::HashMap;

use crate::config::DockConfig;
use crate::geometry::Rect;
use crate::panel::{Panel, PanelId};
use crate::platform::PlatformSnapshot;
use crate::window::{Window, WindowId, WindowRegistry};

/// The complete docking model
#[derive(Debug)]
pub struct DockModel {
    pub config: DockConfig,
    /// Every live top-level window
    pub windows: WindowRegistry,
    /// Every live panel, docked or floating
    pub panels: HashMap<PanelId, Panel>,
    /// Platform state as of the current dispatch
    pub platform: PlatformSnapshot,
    next_panel_id: u64,
}

impl DockModel {
    pub fn new(config: DockConfig, platform: PlatformSnapshot) -> Self {
        let windows = WindowRegistry::new(config.app_name.clone(), config.min_pane_extent);
        Self {
            config,
            windows,
            panels: HashMap::new(),
            platform,
            next_panel_id: 1,
        }
    }

    pub fn next_panel_id(&mut self) -> PanelId {
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;
        id
    }

    /// Create a window with the configured title-bar mode
    pub fn create_window(&mut self, geometry: Rect) -> WindowId {
        self.windows.create(geometry, self.config.no_title_bars)
    }

    /// Geometry for the main window: top-left of the first display
    pub fn main_window_geometry(&self) -> Rect {
        let origin = self
            .platform
            .display(0)
            .map(|d| d.available.origin())
            .unwrap_or_default();
        Rect::from_origin_size(origin, self.config.main_window_size)
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Window a panel belongs to, if both are still alive
    pub fn owner_of(&self, panel: PanelId) -> Option<WindowId> {
        self.panels
            .get(&panel)
            .and_then(|p| p.parent())
            .filter(|w| self.windows.contains(*w))
    }

    /// Every panel belonging to a window (docked or floating), by id
    pub fn panels_of(&self, window: WindowId) -> Vec<PanelId> {
        let mut ids: Vec<PanelId> = self
            .panels
            .values()
            .filter(|p| p.parent() == Some(window))
            .map(|p| p.id)
            .collect();
        ids.sort();
        ids
    }

    pub fn floating_panels(&self) -> Vec<PanelId> {
        let mut ids: Vec<PanelId> = self
            .panels
            .values()
            .filter(|p| p.is_floating())
            .map(|p| p.id)
            .collect();
        ids.sort();
        ids
    }

    /// Minor-axis distance at which a captured tab is pulled out
    pub fn drag_threshold(&self) -> f32 {
        self.config.drag_threshold_factor * self.platform.drag_distance
    }

    /// Look a panel up by its title (first match by id)
    pub fn find_panel_by_title(&self, title: &str) -> Option<PanelId> {
        let mut matches: Vec<PanelId> = self
            .panels
            .values()
            .filter(|p| p.title == title)
            .map(|p| p.id)
            .collect();
        matches.sort();
        matches.first().copied()
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

impl DockModel {
    /// Validate cross-window invariants in debug builds.
    ///
    /// This function checks that:
    /// - exactly one window is main, and it is alive
    /// - a panel is never registered in two windows' layouts
    /// - docked panels sit in their owner's layout, floating ones in none
    /// - layouts only hold live panels
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let mains = self.windows.windows().filter(|w| w.is_main).count();
        if !self.windows.is_empty() {
            assert_eq!(mains, 1, "expected exactly one main window, found {}", mains);
        }

        for window in self.windows.windows() {
            window.area.assert_invariants();
            for panel in window.area.panels() {
                let Some(p) = self.panels.get(panel) else {
                    panic!("{} holds dead {}", window.id, panel);
                };
                assert_eq!(
                    p.parent(),
                    Some(window.id),
                    "{} docked in {} but owned by {:?}",
                    panel,
                    window.id,
                    p.parent()
                );
            }
        }

        for panel in self.panels.values() {
            let homes = self
                .windows
                .windows()
                .filter(|w| w.area.contains(panel.id))
                .count();
            if panel.is_floating() {
                assert_eq!(homes, 0, "floating {} is still in a layout", panel.id);
            } else {
                assert_eq!(homes, 1, "docked {} is in {} layouts", panel.id, homes);
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
