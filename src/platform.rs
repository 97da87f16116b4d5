//! Platform queries consumed by the docking core
//!
//! Everything the core needs from the windowing system beyond its own state:
//! the display list, the pointer button state, the platform drag distance,
//! and (the only write) warping the pointer.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// Default platform "start drag" distance in logical pixels
pub const DEFAULT_DRAG_DISTANCE: f32 = 10.0;

/// One monitor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// Full screen rect
    pub geometry: Rect,
    /// Screen rect minus docks, taskbars and menu bars
    pub available: Rect,
}

impl Display {
    pub fn new(geometry: Rect) -> Self {
        Self {
            geometry,
            available: geometry,
        }
    }

    pub fn with_available(mut self, available: Rect) -> Self {
        self.available = available;
        self
    }
}

/// Pointer buttons currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl MouseButtons {
    pub const NONE: MouseButtons = MouseButtons {
        left: false,
        right: false,
        middle: false,
    };

    pub const LEFT: MouseButtons = MouseButtons {
        left: true,
        right: false,
        middle: false,
    };

    pub fn any(&self) -> bool {
        self.left || self.right || self.middle
    }
}

/// Windowing-system services
pub trait Platform {
    fn displays(&self) -> Vec<Display>;

    fn pointer_buttons(&self) -> MouseButtons;

    fn start_drag_distance(&self) -> f32 {
        DEFAULT_DRAG_DISTANCE
    }

    fn warp_pointer(&mut self, to: Point);
}

/// Platform state as seen by the update functions.
///
/// The runtime refreshes this before dispatching each message so `update`
/// stays a pure function of the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformSnapshot {
    pub displays: Vec<Display>,
    pub buttons: MouseButtons,
    pub drag_distance: f32,
}

impl PlatformSnapshot {
    pub fn capture(platform: &dyn Platform) -> Self {
        Self {
            displays: platform.displays(),
            buttons: platform.pointer_buttons(),
            drag_distance: platform.start_drag_distance(),
        }
    }

    pub fn display(&self, index: usize) -> Option<&Display> {
        self.displays.get(index)
    }

    /// Index of the display containing `p`, falling back to the first
    pub fn display_at(&self, p: Point) -> usize {
        self.displays
            .iter()
            .position(|d| d.geometry.contains_point(p))
            .unwrap_or(0)
    }
}

/// In-memory platform for tests and scenario replay
#[derive(Debug, Clone)]
pub struct SimulatedPlatform {
    pub displays: Vec<Display>,
    pub buttons: MouseButtons,
    pub drag_distance: f32,
    pub pointer: Point,
    /// Every pointer warp, oldest first
    pub warps: Vec<Point>,
}

impl Default for SimulatedPlatform {
    fn default() -> Self {
        Self::new(vec![Display::new(Rect::new(0.0, 0.0, 1920.0, 1080.0))])
    }
}

impl SimulatedPlatform {
    pub fn new(displays: Vec<Display>) -> Self {
        Self {
            displays,
            buttons: MouseButtons::NONE,
            drag_distance: DEFAULT_DRAG_DISTANCE,
            pointer: Point::default(),
            warps: Vec::new(),
        }
    }

    /// Two side-by-side 1920x1080 monitors
    pub fn dual_head() -> Self {
        Self::new(vec![
            Display::new(Rect::new(0.0, 0.0, 1920.0, 1080.0)),
            Display::new(Rect::new(1920.0, 0.0, 1920.0, 1080.0)),
        ])
    }

    pub fn press(&mut self) {
        self.buttons = MouseButtons::LEFT;
    }

    pub fn release(&mut self) {
        self.buttons = MouseButtons::NONE;
    }
}

impl Platform for SimulatedPlatform {
    fn displays(&self) -> Vec<Display> {
        self.displays.clone()
    }

    fn pointer_buttons(&self) -> MouseButtons {
        self.buttons
    }

    fn start_drag_distance(&self) -> f32 {
        self.drag_distance
    }

    fn warp_pointer(&mut self, to: Point) {
        self.pointer = to;
        self.warps.push(to);
    }
}
