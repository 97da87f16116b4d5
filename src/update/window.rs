//! Window message handlers (structural notifications, close, chrome)

use crate::commands::Cmd;
use crate::messages::WindowMsg;
use crate::model::DockModel;
use crate::window::WindowId;

use super::layout::{close_panel, reconcile};

/// Handle window messages
pub fn update_window(model: &mut DockModel, msg: WindowMsg) -> Option<Cmd> {
    match msg {
        WindowMsg::ChildAdded(window) | WindowMsg::ChildRemoved(window) => {
            reconcile(model, window)
        }

        WindowMsg::Destroy(window) => destroy_if_empty(model, window),

        WindowMsg::Close(window) => close_window(model, window),

        WindowMsg::SetNoTitleBars { window, enabled } => {
            let w = model.windows.get_mut(window)?;
            if w.no_title_bars == enabled {
                return None;
            }
            w.no_title_bars = enabled;
            if !enabled {
                w.gestures.reset();
            }
            reconcile(model, window)
        }

        WindowMsg::Resize { window, geometry } => {
            let w = model.windows.get_mut(window)?;
            w.geometry = geometry;
            w.maximized = false;
            reconcile(model, window)
        }

        WindowMsg::Maximize(window) => {
            let center = model.window(window)?.geometry.center();
            let display = model.platform.display_at(center);
            let available = model.platform.display(display)?.available;
            model.windows.get_mut(window)?.maximize(available);
            reconcile(model, window)
        }
    }
}

/// Reap a window scheduled for destruction, unless it gained panels since
fn destroy_if_empty(model: &mut DockModel, window: WindowId) -> Option<Cmd> {
    let has_children = !model.panels_of(window).is_empty();
    let w = model.windows.get_mut(window)?;
    if w.is_main {
        w.pending_destroy = false;
        return None;
    }
    if has_children {
        tracing::debug!(%window, "destroy cancelled, window has panels again");
        w.pending_destroy = false;
        return None;
    }
    model.windows.destroy(window);
    None
}

/// Close a window and every panel it owns. Closing the main window closes
/// all windows and asks the application to quit.
fn close_window(model: &mut DockModel, window: WindowId) -> Option<Cmd> {
    let is_main = model.window(window)?.is_main;
    let targets = if is_main {
        model.windows.ids()
    } else {
        vec![window]
    };

    let mut cmds = Vec::new();
    for target in targets {
        for panel in model.panels_of(target) {
            cmds.extend(close_panel(model, panel));
        }
        if !model.windows.is_main(target) {
            model.windows.destroy(target);
        }
    }

    if is_main {
        tracing::info!("main window closed, quitting");
        cmds.push(Cmd::Quit);
    }
    Some(Cmd::batch(cmds))
}
