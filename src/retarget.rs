//! Where a floating panel should go
//!
//! Pure decisions over the model; `update::layout` carries them out.

use crate::geometry::Rect;
use crate::model::DockModel;
use crate::panel::PanelId;
use crate::window::WindowId;

/// Outcome of retargeting a settled floating panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RetargetDecision {
    /// The panel is gone or not floating
    NoAction,
    /// Dock into this window (possibly the panel's own owner)
    MergeInto(WindowId),
    /// Nothing intersects: give the panel a window of its own
    SpawnWindow(Rect),
}

/// Live windows whose frame intersects `rect`, in creation order
pub fn intersecting_windows(model: &DockModel, rect: &Rect) -> Vec<WindowId> {
    model
        .windows
        .windows()
        .filter(|w| w.geometry.intersects(rect))
        .map(|w| w.id)
        .collect()
}

/// The window a floating panel would merge into if dropped now, other than
/// its own owner. Drives the rubber-band preview.
pub fn parent_candidate(model: &DockModel, panel: PanelId) -> Option<WindowId> {
    let p = model.panel(panel).filter(|p| p.is_floating())?;
    let owner = p.parent();
    intersecting_windows(model, &p.geometry)
        .into_iter()
        .find(|w| Some(*w) != owner)
}

/// Decide where a settled floating panel goes.
///
/// The first intersecting window that is not the panel's owner wins. If only
/// the owner intersects, the panel re-docks in place. If nothing intersects
/// a new window is spawned over the panel's frame.
pub fn decide(model: &DockModel, panel: PanelId) -> RetargetDecision {
    let Some(p) = model.panel(panel).filter(|p| p.is_floating()) else {
        return RetargetDecision::NoAction;
    };

    let hits = intersecting_windows(model, &p.geometry);
    let owner = model.owner_of(panel);

    if let Some(target) = hits.iter().copied().find(|w| Some(*w) != owner) {
        return RetargetDecision::MergeInto(target);
    }
    match owner {
        Some(owner) if hits.contains(&owner) => RetargetDecision::MergeInto(owner),
        _ => RetargetDecision::SpawnWindow(p.geometry),
    }
}
