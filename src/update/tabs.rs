//! Tab strip message handlers

use crate::commands::Cmd;
use crate::geometry::Point;
use crate::gesture::{GestureAction, TabPointerEvent};
use crate::messages::{PanelMsg, TabMsg};
use crate::model::DockModel;
use crate::panel::PanelId;
use crate::window::WindowId;

use super::layout::close_panel;
use super::panel::{context_menu, set_floating, update_panel};

/// Handle tab strip messages
pub fn update_tabs(model: &mut DockModel, msg: TabMsg) -> Option<Cmd> {
    match msg {
        TabMsg::Pointer { window, event } => pointer_event(model, window, event),

        TabMsg::CloseRequested {
            window,
            strip,
            index,
        } => {
            let panel = model.window(window)?.area.tab_to_panel(strip, index)?;
            if !model.panel(panel).is_some_and(|p| p.features.closable) {
                tracing::debug!(%panel, "close request ignored, panel is not closable");
                return None;
            }
            close_panel(model, panel)
        }

        TabMsg::Moved {
            window,
            strip,
            from,
            to,
        } => {
            // A captured tab is held by panel, so it survives the reorder
            let w = model.windows.get_mut(window)?;
            if !w.area.move_tab(strip, from, to) {
                return None;
            }
            Some(Cmd::Redraw(window))
        }
    }
}

/// Run a pointer event through the window's gesture detector. The detector
/// is only installed while the window hides individual title bars.
fn pointer_event(model: &mut DockModel, window: WindowId, event: TabPointerEvent) -> Option<Cmd> {
    let threshold = model.drag_threshold();
    let w = model.windows.get_mut(window)?;
    if !w.no_title_bars {
        return None;
    }

    let action = w.gestures.handle(&w.area, &event, threshold)?;
    match action {
        GestureAction::DetachDrag { panel, global } => detach_drag(model, panel, global),
        GestureAction::Float { panel, global } => float_at(model, panel, global),
        GestureAction::ContextMenu { panel, global } => context_menu(model, panel, global),
    }
}

/// Turn a tab drag into a window drag of the floating panel
fn detach_drag(model: &mut DockModel, panel: PanelId, global: Point) -> Option<Cmd> {
    model.panels.get_mut(&panel)?.switch_title_bar(false);
    let floated = float_at(model, panel, global)?;
    Some(Cmd::batch(vec![
        floated,
        Cmd::WarpPointer(global),
        Cmd::BeginWindowDrag(panel),
    ]))
}

/// Float a panel with its title bar centered on a screen point
fn float_at(model: &mut DockModel, panel: PanelId, global: Point) -> Option<Cmd> {
    let floated = set_floating(model, panel, true)?;
    let moved = update_panel(model, PanelMsg::CenterOn { panel, point: global });
    tracing::debug!(%panel, x = global.x, y = global.y, "panel floated from tab strip");
    Cmd::merge(Some(floated), moved)
}
