//! Process-wide window registry
//!
//! Owns every top-level window. Windows are kept in creation order, which is
//! also the order every "first window that ..." search walks them in.

use std::collections::BTreeMap;

use super::{Window, WindowId};
use crate::geometry::Rect;

#[derive(Debug)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, Window>,
    main: Option<WindowId>,
    next_window_id: u64,
    /// Monotonic counter for window titles; never reused
    last_created_display_id: u64,
    app_name: String,
    min_pane_extent: f32,
}

impl WindowRegistry {
    pub fn new(app_name: impl Into<String>, min_pane_extent: f32) -> Self {
        Self {
            windows: BTreeMap::new(),
            main: None,
            next_window_id: 1,
            last_created_display_id: 0,
            app_name: app_name.into(),
            min_pane_extent,
        }
    }

    /// Create a window. The first one ever created becomes the main window.
    pub fn create(&mut self, geometry: Rect, no_title_bars: bool) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;
        self.last_created_display_id += 1;

        let is_main = self.main.is_none();
        let title = if is_main {
            self.app_name.clone()
        } else {
            format!("{} - window #{}", self.app_name, self.last_created_display_id)
        };

        let mut window = Window::new(id, self.last_created_display_id, title, geometry);
        window.is_main = is_main;
        window.no_title_bars = no_title_bars;
        window.area.min_pane_extent = self.min_pane_extent;
        self.windows.insert(id, window);
        if is_main {
            self.main = Some(id);
        }

        tracing::debug!(window = %id, is_main, ?geometry, "window created");
        id
    }

    /// Remove a window. The main window is never removed.
    pub fn destroy(&mut self, id: WindowId) -> Option<Window> {
        if self.main == Some(id) {
            tracing::warn!(window = %id, "refusing to destroy the main window");
            return None;
        }
        let window = self.windows.remove(&id)?;
        tracing::debug!(window = %id, title = %window.title, "window destroyed");
        Some(window)
    }

    pub fn main_window(&self) -> Option<WindowId> {
        self.main
    }

    pub fn is_main(&self, id: WindowId) -> bool {
        self.main == Some(id)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Live window ids in creation order
    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    /// Live windows in creation order
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    pub fn hide_all_rubber_bands(&mut self) {
        for window in self.windows.values_mut() {
            window.hide_rubber_band();
        }
    }
}
