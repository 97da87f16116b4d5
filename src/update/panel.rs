//! Panel message handlers (floating, moving, drag timer, context menu)

use crate::commands::Cmd;
use crate::context_menu::{MenuAction, PanelContextMenu};
use crate::geometry::Point;
use crate::messages::{LayoutMsg, PanelMsg};
use crate::model::DockModel;
use crate::panel::{PanelId, TickOutcome};
use crate::retarget;

use super::layout::{self as layout_ops, update_layout};

/// Handle panel messages
pub fn update_panel(model: &mut DockModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::SetFloating { panel, floating } => set_floating(model, panel, floating),

        PanelMsg::Moved { panel, to } => {
            let p = model.panels.get_mut(&panel)?;
            if p.is_docked() {
                // Docked frames come from the layout
                tracing::trace!(%panel, "ignoring move of docked panel");
                return None;
            }
            p.geometry = p.geometry.moved_to(to);
            after_move(model, panel)
        }

        PanelMsg::TimerTick(panel) => timer_tick(model, panel),

        PanelMsg::SwitchTitleBar {
            panel,
            show_default,
        } => {
            let changed = model.panels.get_mut(&panel)?.switch_title_bar(show_default);
            if !changed {
                return None;
            }
            model.owner_of(panel).map(Cmd::Redraw)
        }

        PanelMsg::CenterOn { panel, point } => {
            model.panels.get_mut(&panel)?.center_on_point(point);
            after_move(model, panel)
        }

        PanelMsg::Close(panel) => layout_ops::close_panel(model, panel),

        PanelMsg::RequestContextMenu { panel, global } => context_menu(model, panel, global),

        PanelMsg::MenuAction { panel, action } => menu_action(model, panel, action),
    }
}

/// Float a docked panel, or re-dock a floating one where it came from.
///
/// Floating keeps the panel's owner: it leaves the owner's layout but stays
/// its child until the retarget logic moves it somewhere.
pub(crate) fn set_floating(model: &mut DockModel, panel: PanelId, floating: bool) -> Option<Cmd> {
    let owner = model.owner_of(panel);
    let Some(p) = model.panels.get_mut(&panel) else {
        tracing::trace!(%panel, "set_floating skipped, panel is gone");
        return None;
    };

    if floating {
        if !p.features.floatable || !p.set_floating(true) {
            return None;
        }
        p.drag_timer.start();
        if let Some(w) = owner.and_then(|w| model.windows.get_mut(w)) {
            w.area.detach_for_float(panel);
            w.gestures.reset();
        }
        tracing::debug!(%panel, ?owner, "panel floating");

        let mut cmds = vec![Cmd::StartDragTimer(panel)];
        if let Some(owner) = owner {
            cmds.extend(layout_ops::reconcile(model, owner));
        }
        Some(Cmd::batch(cmds))
    } else {
        let Some(owner) = owner else {
            let main = model.windows.main_window()?;
            return layout_ops::move_into(model, main, panel);
        };
        if !p.set_floating(false) {
            return None;
        }
        p.drag_timer.cancel();
        if let Some(w) = model.windows.get_mut(owner) {
            w.area.redock(panel);
        }
        tracing::debug!(%panel, window = %owner, "panel re-docked in place");

        let mut cmds = vec![Cmd::StopDragTimer(panel)];
        cmds.extend(layout_ops::reconcile(model, owner));
        cmds.extend(layout_ops::bring_to_front(model, panel));
        Some(Cmd::batch(cmds))
    }
}

/// A floating panel changed position: restart the settle count and update
/// the docking preview.
fn after_move(model: &mut DockModel, panel: PanelId) -> Option<Cmd> {
    let p = model.panels.get_mut(&panel)?;
    if !p.is_floating() {
        return None;
    }

    let mut cmds = Vec::new();
    if p.drag_timer.start() {
        cmds.push(Cmd::StartDragTimer(panel));
    }

    let candidate = retarget::parent_candidate(model, panel);
    model.windows.hide_all_rubber_bands();
    if let Some(window) = candidate.and_then(|w| model.windows.get_mut(w)) {
        window.show_rubber_band();
        cmds.push(Cmd::Redraw(window.id));
    }
    Some(Cmd::batch(cmds))
}

fn timer_tick(model: &mut DockModel, panel: PanelId) -> Option<Cmd> {
    let buttons_held = model.platform.buttons.any();
    let max_ticks = model.config.settle_ticks;
    let Some(p) = model.panels.get_mut(&panel) else {
        tracing::trace!(%panel, "stale timer tick");
        return Some(Cmd::StopDragTimer(panel));
    };

    let floating = p.is_floating();
    match p.drag_timer.tick(floating, buttons_held, max_ticks) {
        TickOutcome::Continue => None,
        TickOutcome::Stopped => Some(Cmd::StopDragTimer(panel)),
        TickOutcome::Settled => {
            tracing::debug!(%panel, "floating panel settled");
            Cmd::merge(
                Some(Cmd::StopDragTimer(panel)),
                layout_ops::retarget_panel(model, panel),
            )
        }
    }
}

pub(crate) fn context_menu(model: &mut DockModel, panel: PanelId, at: Point) -> Option<Cmd> {
    let menu = PanelContextMenu::build(model, panel)?;
    Some(Cmd::ShowContextMenu { menu, at })
}

fn menu_action(model: &mut DockModel, panel: PanelId, action: MenuAction) -> Option<Cmd> {
    let msg = match action {
        MenuAction::MoveToDesktop(display) => LayoutMsg::MoveToDisplay { panel, display },
        MenuAction::MoveToWindow(window) => LayoutMsg::MoveInto { window, panel },
        MenuAction::Detach => LayoutMsg::DetachToNewWindow {
            panel,
            maximize: false,
        },
        MenuAction::DetachAndMaximize => LayoutMsg::DetachToNewWindow {
            panel,
            maximize: true,
        },
        MenuAction::Split(orientation) => LayoutMsg::SplitFromSibling { panel, orientation },
    };
    update_layout(model, msg)
}
