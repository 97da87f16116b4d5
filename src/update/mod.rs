//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod layout;
mod panel;
mod tabs;
mod window;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::DockModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use layout::{add_panel, add_panel_pair, get_or_create_window_for_display, update_layout};
pub use panel::update_panel;
pub use tabs::update_tabs;
pub use window::update_window;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Tab(m) => tabs::update_tabs(model, m),
        Msg::Window(m) => window::update_window(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel placement and logs diffs for debugging.
/// Timer ticks and pointer moves are too frequent to log individually.
#[cfg(debug_assertions)]
fn update_traced(model: &mut DockModel, msg: Msg) -> Option<Cmd> {
    use crate::gesture::PointerKind;
    use crate::messages::{PanelMsg, TabMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Panel(PanelMsg::TimerTick(_))
            | Msg::Panel(PanelMsg::Moved { .. })
            | Msg::Tab(TabMsg::Pointer { .. })
    ) && !matches!(&msg, Msg::Tab(TabMsg::Pointer { event, .. }) if event.kind != PointerKind::Move);

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Panel::TimerTick(PanelId(3))`
/// - `Layout::BringToFront(PanelId(1))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Tab(m) => format!("Tab::{:?}", m),
        Msg::Window(m) => format!("Window::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
    }
}
