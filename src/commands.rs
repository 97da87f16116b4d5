//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Most are carried out by the runtime; the rest are handed to the host
//! application (see `DockRuntime::drain_host_commands`).

use crate::context_menu::PanelContextMenu;
use crate::geometry::Point;
use crate::messages::Msg;
use crate::panel::PanelId;
use crate::window::WindowId;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint a window
    Redraw(WindowId),
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // === Event loop ===
    /// Deliver a message on a later turn of the event loop instead of
    /// re-entering `update` now
    Queue(Box<Msg>),
    /// Start (or restart) a panel's repeating drag-and-settle timer
    StartDragTimer(PanelId),
    /// Stop a panel's drag-and-settle timer
    StopDragTimer(PanelId),

    // === Platform ===
    /// Move the pointer to a screen point
    WarpPointer(Point),
    /// Hand the pointer drag over to the floating panel's frame
    BeginWindowDrag(PanelId),
    /// Pop up a panel's context menu
    ShowContextMenu { menu: PanelContextMenu, at: Point },
    /// Restore and raise a window
    RaiseWindow(WindowId),

    // === Application Commands ===
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Queue a message for the next turn of the event loop
    pub fn queue(msg: Msg) -> Self {
        Cmd::Queue(Box::new(msg))
    }

    /// Combine two optional commands
    pub fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, None) => None,
            (Some(a), None) | (None, Some(a)) => Some(a),
            (Some(a), Some(b)) => Some(Cmd::batch(vec![a, b])),
        }
    }
}
