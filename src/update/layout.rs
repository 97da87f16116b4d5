//! Layout message handlers (placing, moving, splitting panels)
//!
//! Every structural change ends with a reconciliation pass over each window
//! it touched, and queues child-added/child-removed notifications instead of
//! acting on them re-entrantly.

use crate::commands::Cmd;
use crate::geometry::{Orientation, Rect};
use crate::layout::DockSide;
use crate::messages::{LayoutMsg, Msg, WindowMsg};
use crate::model::DockModel;
use crate::panel::{Panel, PanelId};
use crate::panels::PanelContent;
use crate::retarget::{self, RetargetDecision};
use crate::window::WindowId;

use super::panel::set_floating;

/// Handle layout messages
pub fn update_layout(model: &mut DockModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::MoveInto { window, panel } => move_into(model, window, panel),

        LayoutMsg::Split {
            first,
            second,
            orientation,
        } => split(model, first, second, orientation),

        LayoutMsg::SplitFromSibling { panel, orientation } => {
            let sibling = model
                .owner_of(panel)
                .and_then(|w| model.windows.get(w))
                .and_then(|w| w.area.find_sibling(panel))?;
            split(model, sibling, panel, orientation)
        }

        LayoutMsg::BringToFront(panel) => bring_to_front(model, panel),

        LayoutMsg::Raise(panel) => raise_panel(model, panel),

        LayoutMsg::Reconcile(window) => reconcile(model, window),

        LayoutMsg::Retarget(panel) => retarget_panel(model, panel),

        LayoutMsg::DetachToNewWindow { panel, maximize } => {
            if maximize {
                detach_and_maximize(model, panel)
            } else {
                detach_to_new_window(model, panel)
            }
        }

        LayoutMsg::MoveToDisplay { panel, display } => {
            let window = get_or_create_window_for_display(model, display)?;
            move_into(model, window, panel)
        }
    }
}

fn child_added(window: WindowId) -> Cmd {
    Cmd::queue(Msg::Window(WindowMsg::ChildAdded(window)))
}

fn child_removed(window: WindowId) -> Cmd {
    Cmd::queue(Msg::Window(WindowMsg::ChildRemoved(window)))
}

// ============================================================================
// Reconciliation
// ============================================================================

/// Bring a window's chrome back in line with its layout.
///
/// 1. Title bars: with individual title bars off, a docked panel sharing a
///    tab strip hides its own title bar; every other panel shows it.
/// 2. Close buttons: one per tab whose panel is closable.
/// 3. Geometry: lay the area out again and move docked panels with it.
///
/// Finally a non-main window left without panels is scheduled for
/// destruction.
pub(crate) fn reconcile(model: &mut DockModel, window: WindowId) -> Option<Cmd> {
    let Some(w) = model.windows.get_mut(window) else {
        tracing::trace!(%window, "reconcile skipped, window is gone");
        return None;
    };
    let no_title_bars = w.no_title_bars;

    for panel in model
        .panels
        .values_mut()
        .filter(|p| p.parent() == Some(window))
    {
        let in_tab_group = w
            .area
            .group_of(panel.id)
            .and_then(|g| w.area.group(g))
            .is_some_and(|g| g.has_tab_strip());
        let suppress = no_title_bars && panel.is_docked() && in_tab_group;
        panel.switch_title_bar(!suppress);
    }

    for group in w.area.groups.values_mut() {
        group.native_context_menu = !no_title_bars;
        group.close_buttons = group
            .panels
            .iter()
            .map(|p| model.panels.get(p).is_some_and(|p| p.features.closable))
            .collect();
    }

    let content = w.content_rect();
    w.area.invalidate(content);

    let origin = w.geometry.origin();
    for panel in model
        .panels
        .values_mut()
        .filter(|p| p.parent() == Some(window) && p.is_docked())
    {
        if let Some(rect) = w.area.panel_rect(panel.id) {
            panel.geometry = rect.translated(origin);
        }
    }

    w.area.assert_invariants();

    let has_children = model.panels.values().any(|p| p.parent() == Some(window));
    let mut cmds = vec![Cmd::Redraw(window)];
    if has_children || w.is_main {
        w.pending_destroy = false;
    } else if !w.pending_destroy {
        tracing::debug!(%window, "window has no panels left, scheduling destroy");
        w.pending_destroy = true;
        cmds.push(Cmd::queue(Msg::Window(WindowMsg::Destroy(window))));
    }

    Some(Cmd::batch(cmds))
}

// ============================================================================
// Placement
// ============================================================================

/// Create a panel in a window.
///
/// The panel is tabbed with `sibling` when given and docked here, otherwise
/// with the most recently added panel, otherwise it gets the right default
/// area. Returns `None` (dropping the content) if the window is gone.
pub fn add_panel(
    model: &mut DockModel,
    window: WindowId,
    content: Box<dyn PanelContent>,
    title: impl Into<String>,
    sibling: Option<PanelId>,
) -> Option<(PanelId, Option<Cmd>)> {
    if !model.windows.contains(window) {
        tracing::trace!(%window, "add_panel skipped, window is gone");
        return None;
    }

    let id = model.next_panel_id();
    let panel = Panel::new(id, content, title, window);
    let w = model.windows.get_mut(window)?;

    let anchor = sibling
        .filter(|s| w.area.contains(*s))
        .or_else(|| w.area.panels().last().copied());
    match anchor {
        Some(anchor) => {
            w.area.tabify(anchor, id);
        }
        None => {
            w.area.place_in_default_area(id, DockSide::Right);
        }
    }

    tracing::debug!(panel = %id, title = %panel.title, %window, ?anchor, "panel added");
    model.panels.insert(id, panel);

    let cmd = Cmd::merge(reconcile(model, window), Some(child_added(window)));
    Some((id, cmd))
}

/// Create two linked views of one file.
///
/// The first is tabbed with the oldest panel, the second with a panel not
/// tabbed with it, so the pair ends up side by side when the window already
/// has two areas.
pub fn add_panel_pair(
    model: &mut DockModel,
    window: WindowId,
    first: (Box<dyn PanelContent>, String),
    second: (Box<dyn PanelContent>, String),
) -> Option<((PanelId, PanelId), Option<Cmd>)> {
    let (sibling1, sibling2) = model.windows.get(window)?.area.find_two_non_tabified();

    let (first_id, first_cmd) = add_panel(model, window, first.0, first.1, sibling1)?;

    let second_id = model.next_panel_id();
    let panel = Panel::new(second_id, second.0, second.1, window);
    let w = model.windows.get_mut(window)?;
    match sibling2.filter(|s| Some(*s) != sibling1 && w.area.contains(*s)) {
        Some(anchor) => {
            w.area.tabify(anchor, second_id);
        }
        None => {
            w.area.place_in_default_area(second_id, DockSide::Right);
        }
    }
    model.panels.insert(second_id, panel);

    let cmd = Cmd::merge(
        first_cmd,
        Cmd::merge(reconcile(model, window), Some(child_added(window))),
    );
    Some(((first_id, second_id), cmd))
}

/// Move a panel into `target`.
///
/// A floating panel that already belongs to `target` is re-docked in place.
/// Otherwise the panel leaves its old window and is tabbed with the first
/// docked panel here whose frame overlaps its own, or gets the left default
/// area.
pub(crate) fn move_into(model: &mut DockModel, target: WindowId, panel: PanelId) -> Option<Cmd> {
    model.windows.hide_all_rubber_bands();

    let Some(p) = model.panels.get(&panel) else {
        tracing::trace!(%panel, "move_into skipped, panel is gone");
        return None;
    };
    if !model.windows.contains(target) {
        tracing::trace!(window = %target, "move_into skipped, window is gone");
        return None;
    }

    let was_floating = p.is_floating();
    let incoming = p.geometry;
    let old_owner = model.owner_of(panel);

    if old_owner == Some(target) {
        if was_floating {
            return set_floating(model, panel, false);
        }
        return bring_to_front(model, panel);
    }

    if let Some(old) = old_owner.and_then(|w| model.windows.get_mut(w)) {
        old.area.remove(panel);
        old.area.forget(panel);
        old.gestures.reset();
    }

    let anchor = model.windows.get(target).and_then(|w| {
        w.area.panels().iter().copied().find(|candidate| {
            model
                .panels
                .get(candidate)
                .is_some_and(|c| c.is_docked() && c.geometry.intersects(&incoming))
        })
    });

    let w = model.windows.get_mut(target)?;
    match anchor {
        Some(anchor) => {
            w.area.tabify(anchor, panel);
        }
        None => {
            w.area.place_in_default_area(panel, DockSide::Left);
        }
    }

    if let Some(p) = model.panels.get_mut(&panel) {
        p.set_parent(Some(target));
        p.set_floating(false);
        p.drag_timer.cancel();
    }

    tracing::info!(%panel, from = ?old_owner, to = %target, ?anchor, "panel moved into window");

    let mut cmds = Vec::new();
    if was_floating {
        cmds.push(Cmd::StopDragTimer(panel));
    }
    cmds.extend(reconcile(model, target));
    cmds.push(child_added(target));
    if let Some(old) = old_owner {
        cmds.extend(reconcile(model, old));
        cmds.push(child_removed(old));
    }
    cmds.extend(bring_to_front(model, panel));
    Some(Cmd::batch(cmds))
}

// ============================================================================
// Splitting
// ============================================================================

/// Make `second` adjacent to `first` along `orientation`.
///
/// If the layout refuses the direct split, split along the other axis first
/// and then along the requested one. Failure is not reported: the panels
/// keep whatever grouping the attempts left behind.
pub(crate) fn split(
    model: &mut DockModel,
    first: PanelId,
    second: PanelId,
    orientation: Orientation,
) -> Option<Cmd> {
    if first == second || !model.panels.contains_key(&second) {
        return None;
    }
    let window = model.owner_of(first)?;
    if model.panel(first).is_some_and(|p| p.is_floating()) {
        tracing::trace!(%first, "split skipped, first panel is floating");
        return None;
    }

    let mut cmds = Vec::new();
    let second_docked_here = model.owner_of(second) == Some(window)
        && model.panel(second).is_some_and(|p| p.is_docked());
    if !second_docked_here {
        cmds.extend(move_into(model, window, second));
    }

    let w = model.windows.get_mut(window)?;
    w.gestures.reset();
    if !w.area.split_once(first, second, orientation) {
        tracing::debug!(%first, %second, ?orientation, "direct split refused, retrying");
        w.area.split_once(first, second, orientation.opposite());
        w.area.split_once(first, second, orientation);
    }
    if w.area.are_tabified(first, second) {
        tracing::warn!(%first, %second, ?orientation, "split failed, panels stay tabbed");
    }

    cmds.extend(reconcile(model, window));
    Some(Cmd::batch(cmds))
}

// ============================================================================
// Focus
// ============================================================================

/// Show a panel's tab and mark it as the active panel
pub(crate) fn bring_to_front(model: &mut DockModel, panel: PanelId) -> Option<Cmd> {
    let window = model.owner_of(panel)?;
    if let Some(w) = model.windows.get_mut(window) {
        w.area.bring_to_front(panel);
    }
    for p in model.panels.values_mut() {
        p.set_marked_active(p.id == panel);
    }
    Some(Cmd::Redraw(window))
}

/// Bring to front and raise the owning window, restoring it if minimized
pub(crate) fn raise_panel(model: &mut DockModel, panel: PanelId) -> Option<Cmd> {
    let front = bring_to_front(model, panel)?;
    let window = model.owner_of(panel)?;
    if let Some(w) = model.windows.get_mut(window) {
        w.raise();
    }
    Some(Cmd::batch(vec![front, Cmd::RaiseWindow(window)]))
}

// ============================================================================
// Retargeting and detaching
// ============================================================================

/// Carry out the retarget decision for a settled floating panel
pub(crate) fn retarget_panel(model: &mut DockModel, panel: PanelId) -> Option<Cmd> {
    model.windows.hide_all_rubber_bands();
    match retarget::decide(model, panel) {
        RetargetDecision::NoAction => None,
        RetargetDecision::MergeInto(window) => {
            tracing::debug!(%panel, %window, "settled over a window, merging");
            move_into(model, window, panel)
        }
        RetargetDecision::SpawnWindow(geometry) => {
            let window = model.create_window(geometry);
            tracing::debug!(%panel, %window, "settled in the open, spawning window");
            move_into(model, window, panel)
        }
    }
}

/// Move a panel into a new top-level window over its current frame.
/// No-op when the panel is the only one in its window.
pub(crate) fn detach_to_new_window(model: &mut DockModel, panel: PanelId) -> Option<Cmd> {
    let owner = model.owner_of(panel)?;
    if model.panels_of(owner).len() == 1 {
        tracing::debug!(%panel, "detach skipped, panel is alone in its window");
        return None;
    }

    let float = set_floating(model, panel, true);
    let geometry = model.panel(panel)?.geometry;
    let window = model.create_window(geometry);
    let moved = move_into(model, window, panel);
    Some(Cmd::batch(vec![
        float.unwrap_or_default(),
        moved.unwrap_or_default(),
        Cmd::RaiseWindow(window),
    ]))
}

/// Like `detach_to_new_window`, but the new window fills the panel's
/// display. A panel alone in its window maximizes that window instead.
pub(crate) fn detach_and_maximize(model: &mut DockModel, panel: PanelId) -> Option<Cmd> {
    let owner = model.owner_of(panel)?;
    let center = model.panel(panel)?.geometry.center();
    let display = model.platform.display_at(center);
    let available = model
        .platform
        .display(display)
        .map(|d| d.available)
        .unwrap_or_else(|| model.main_window_geometry());

    if model.panels_of(owner).len() == 1 {
        if let Some(w) = model.windows.get_mut(owner) {
            w.maximize(available);
        }
        let reconciled = reconcile(model, owner);
        return Cmd::merge(reconciled, Some(Cmd::RaiseWindow(owner)));
    }

    let window = new_maximized_window(model, available);
    let moved = move_into(model, window, panel);
    Cmd::merge(moved, Some(Cmd::RaiseWindow(window)))
}

fn new_maximized_window(model: &mut DockModel, available: Rect) -> WindowId {
    let geometry = Rect::from_origin_size(available.origin(), model.config.new_window_size);
    let window = model.create_window(geometry);
    if let Some(w) = model.windows.get_mut(window) {
        w.maximize(available);
    }
    window
}

/// First window on a display, or a new maximized one there.
/// `None` when the display does not exist.
pub fn get_or_create_window_for_display(model: &mut DockModel, display_index: usize) -> Option<WindowId> {
    let available = model.platform.display(display_index)?.available;

    let existing = model
        .windows
        .windows()
        .find(|w| model.platform.display_at(w.geometry.center()) == display_index)
        .map(|w| w.id);
    if existing.is_some() {
        return existing;
    }

    let window = new_maximized_window(model, available);
    tracing::debug!(%window, display = display_index, "created window for display");
    Some(window)
}

// ============================================================================
// Closing
// ============================================================================

/// Destroy a panel and its content
pub(crate) fn close_panel(model: &mut DockModel, panel: PanelId) -> Option<Cmd> {
    let Some(p) = model.panels.remove(&panel) else {
        tracing::trace!(%panel, "close skipped, panel is gone");
        return None;
    };
    let owner = p.parent();
    tracing::debug!(%panel, title = %p.title, ?owner, "panel closed");
    drop(p);

    let mut cmds = vec![Cmd::StopDragTimer(panel)];
    if let Some(owner) = owner {
        if let Some(w) = model.windows.get_mut(owner) {
            w.area.remove(panel);
            w.area.forget(panel);
            w.gestures.reset();
        }
        cmds.extend(reconcile(model, owner));
        cmds.push(child_removed(owner));
    }
    Some(Cmd::batch(cmds))
}
