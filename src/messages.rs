//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Messages carry the
//! ids of the panel, window or strip they concern; a message naming
//! something that no longer exists is skipped.

use crate::context_menu::MenuAction;
use crate::geometry::{Orientation, Point, Rect};
use crate::gesture::TabPointerEvent;
use crate::layout::GroupId;
use crate::panel::PanelId;
use crate::window::WindowId;

/// Panel-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Float (true) or re-dock in place (false)
    SetFloating { panel: PanelId, floating: bool },
    /// The floating frame was moved to a new top-left corner
    Moved { panel: PanelId, to: Point },
    /// Drag-and-settle timer fired
    TimerTick(PanelId),
    SwitchTitleBar { panel: PanelId, show_default: bool },
    /// Put the middle of the title bar under a screen point
    CenterOn { panel: PanelId, point: Point },
    /// Close and destroy the panel
    Close(PanelId),
    /// Secondary click on the panel's own title bar
    RequestContextMenu { panel: PanelId, global: Point },
    /// An entry of the panel's context menu was picked
    MenuAction { panel: PanelId, action: MenuAction },
}

/// Tab strip messages
#[derive(Debug, Clone, PartialEq)]
pub enum TabMsg {
    /// Raw pointer event on a tab strip of a window
    Pointer {
        window: WindowId,
        event: TabPointerEvent,
    },
    /// The close button of a tab was clicked
    CloseRequested {
        window: WindowId,
        strip: GroupId,
        index: usize,
    },
    /// The strip reordered a tab
    Moved {
        window: WindowId,
        strip: GroupId,
        from: usize,
        to: usize,
    },
}

/// Window-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum WindowMsg {
    /// Queued notification: a panel entered the window
    ChildAdded(WindowId),
    /// Queued notification: a panel left the window
    ChildRemoved(WindowId),
    /// Reap a window scheduled for destruction
    Destroy(WindowId),
    /// The user closed the window
    Close(WindowId),
    SetNoTitleBars { window: WindowId, enabled: bool },
    /// The window frame moved or was resized
    Resize { window: WindowId, geometry: Rect },
    Maximize(WindowId),
}

/// Structural layout messages
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Move a panel into a window
    MoveInto { window: WindowId, panel: PanelId },
    /// Make `second` adjacent to `first` along `orientation`
    Split {
        first: PanelId,
        second: PanelId,
        orientation: Orientation,
    },
    /// Split a panel away from the first panel it is tabbed with
    SplitFromSibling {
        panel: PanelId,
        orientation: Orientation,
    },
    BringToFront(PanelId),
    /// Bring to front, restore and raise the window (show database/log)
    Raise(PanelId),
    /// Run the reconciliation pass of a window
    Reconcile(WindowId),
    /// Decide where a settled floating panel goes
    Retarget(PanelId),
    /// Move a panel into a new top-level window
    DetachToNewWindow { panel: PanelId, maximize: bool },
    /// Move a panel to the window on a display, creating one if needed
    MoveToDisplay { panel: PanelId, display: usize },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Panel(PanelMsg),
    Tab(TabMsg),
    Window(WindowMsg),
    Layout(LayoutMsg),
}
