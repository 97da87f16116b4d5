//! Panels - the dockable content units
//!
//! A panel owns exactly one opaque content view and is either docked inside
//! one window's layout or floating in its own frame.
//!
//! ## Architecture
//!
//! - `PanelId`: Unique identifier for a panel
//! - `Panel`: Floating flag, title-bar mode, frame geometry, owning window
//! - `DragTimer`: Drag-and-settle polling state used while a panel floats
//!
//! ## Integration
//!
//! Structural changes (detaching from a layout, re-docking) are driven by
//! `update::panel`, which keeps the owning window's `DockArea` in sync with
//! the panel's own floating flag.

mod state;
mod timer;

pub use state::{Panel, PanelFeatures, PanelId, TitleBarMode, TITLE_BAR_HEIGHT};
pub use timer::{DragTimer, DragTimerState, TickOutcome};
