//! Tab strip gesture recognition
//!
//! Turns raw pointer events on a window's tab strips into panel-level
//! gestures: dragging a tab out of its strip, double-clicking it, or asking
//! for its context menu. One detector lives on each window and is only
//! consulted while the window suppresses individual title bars.
//!
//! # Drag-out
//!
//! A primary-button press over a tab records the panel on that tab and the
//! press position. Subsequent moves measure the displacement along the strip's minor axis
//! (vertical for a horizontal strip). Once its magnitude reaches the
//! threshold the gesture fires exactly once and the capture is released, so
//! the rest of the pointer stream belongs to the window-level drag.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::layout::{DockArea, GroupId};
use crate::panel::PanelId;

/// Multiplier applied to the platform drag distance
pub const DEFAULT_THRESHOLD_FACTOR: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Press,
    Move,
    Release,
    DoubleClick,
}

/// A pointer event delivered to one tab strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabPointerEvent {
    pub strip: GroupId,
    pub kind: PointerKind,
    pub button: PointerButton,
    /// Strip-local position
    pub pos: Point,
    /// Screen position
    pub global: Point,
}

impl TabPointerEvent {
    pub fn new(strip: GroupId, kind: PointerKind, pos: Point, global: Point) -> Self {
        Self {
            strip,
            kind,
            button: PointerButton::Primary,
            pos,
            global,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// What a pointer event on a tab strip turned out to mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// The tab was pulled off its strip: float the panel under the pointer
    /// and hand the drag over to the window
    DetachDrag { panel: PanelId, global: Point },
    /// Double-click: float the panel at the click position
    Float { panel: PanelId, global: Point },
    /// Secondary-button release over a tab
    ContextMenu { panel: PanelId, global: Point },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TabDrag {
    strip: GroupId,
    panel: PanelId,
    origin: Point,
}

/// Transient drag-capture state for one window's tab strips
#[derive(Debug, Clone, Default)]
pub struct TabGestureDetector {
    drag: Option<TabDrag>,
}

impl TabGestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured strip and panel, if a press is in progress
    pub fn dragged(&self) -> Option<(GroupId, PanelId)> {
        self.drag.map(|d| (d.strip, d.panel))
    }

    pub fn reset(&mut self) {
        self.drag = None;
    }

    /// Feed one pointer event. `threshold` is the minor-axis distance, in
    /// pixels, at which a captured tab is pulled out.
    pub fn handle(
        &mut self,
        area: &DockArea,
        event: &TabPointerEvent,
        threshold: f32,
    ) -> Option<GestureAction> {
        let group = area.group(event.strip)?;

        match (event.kind, event.button) {
            (PointerKind::Press, PointerButton::Primary) => {
                self.drag = group
                    .tab_at(event.pos)
                    .and_then(|index| area.tab_to_panel(event.strip, index))
                    .map(|panel| TabDrag {
                        strip: event.strip,
                        panel,
                        origin: event.pos,
                    });
                None
            }

            (PointerKind::Move, _) => {
                let drag = self.drag.filter(|d| d.strip == event.strip)?;
                if area.panel_to_tab(drag.panel).map(|(strip, _)| strip) != Some(drag.strip) {
                    tracing::trace!(panel = %drag.panel, "captured tab left its strip");
                    self.drag = None;
                    return None;
                }
                let displacement = group.shape.minor_axis(event.pos.delta(drag.origin));
                if displacement.abs() < threshold {
                    return None;
                }
                self.drag = None;
                tracing::debug!(
                    panel = %drag.panel,
                    strip = %drag.strip,
                    displacement,
                    "tab pulled out of strip"
                );
                Some(GestureAction::DetachDrag {
                    panel: drag.panel,
                    global: event.global,
                })
            }

            (PointerKind::Release, PointerButton::Primary) => {
                self.drag = None;
                None
            }

            (PointerKind::Release, PointerButton::Secondary) => {
                let index = group.tab_at(event.pos)?;
                let panel = area.tab_to_panel(event.strip, index)?;
                Some(GestureAction::ContextMenu {
                    panel,
                    global: event.global,
                })
            }

            (PointerKind::DoubleClick, PointerButton::Primary) => {
                self.drag = None;
                let index = group.tab_at(event.pos)?;
                let panel = area.tab_to_panel(event.strip, index)?;
                Some(GestureAction::Float {
                    panel,
                    global: event.global,
                })
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DockSide, TAB_WIDTH};

    const THRESHOLD: f32 = 50.0;

    fn area() -> (DockArea, GroupId) {
        let mut area = DockArea::default();
        let strip = area.place_in_default_area(PanelId(1), DockSide::Right);
        area.tabify(PanelId(1), PanelId(2));
        area.tabify(PanelId(1), PanelId(3));
        (area, strip)
    }

    fn at(strip: GroupId, kind: PointerKind, x: f32, y: f32) -> TabPointerEvent {
        TabPointerEvent::new(strip, kind, Point::new(x, y), Point::new(x + 100.0, y + 100.0))
    }

    #[test]
    fn test_press_on_tab_captures() {
        let (area, strip) = area();
        let mut detector = TabGestureDetector::new();
        let x = TAB_WIDTH * 2.0 + 5.0;
        detector.handle(&area, &at(strip, PointerKind::Press, x, 5.0), THRESHOLD);
        assert_eq!(detector.dragged(), Some((strip, PanelId(3))));
    }

    #[test]
    fn test_press_off_tab_clears() {
        let (area, strip) = area();
        let mut detector = TabGestureDetector::new();
        detector.handle(&area, &at(strip, PointerKind::Press, 5.0, 5.0), THRESHOLD);
        detector.handle(&area, &at(strip, PointerKind::Press, 900.0, 5.0), THRESHOLD);
        assert_eq!(detector.dragged(), None);
    }

    #[test]
    fn test_move_below_threshold_keeps_capture() {
        let (area, strip) = area();
        let mut detector = TabGestureDetector::new();
        detector.handle(&area, &at(strip, PointerKind::Press, 5.0, 5.0), THRESHOLD);
        let action = detector.handle(
            &area,
            &at(strip, PointerKind::Move, 300.0, 5.0 + THRESHOLD - 1.0),
            THRESHOLD,
        );
        assert_eq!(action, None);
        assert!(detector.dragged().is_some());
    }

    #[test]
    fn test_drag_out_fires_once() {
        let (area, strip) = area();
        let mut detector = TabGestureDetector::new();
        detector.handle(&area, &at(strip, PointerKind::Press, TAB_WIDTH + 5.0, 5.0), THRESHOLD);
        let action = detector.handle(
            &area,
            &at(strip, PointerKind::Move, TAB_WIDTH + 5.0, 5.0 + THRESHOLD),
            THRESHOLD,
        );
        assert!(matches!(
            action,
            Some(GestureAction::DetachDrag { panel, .. }) if panel == PanelId(2)
        ));
        let again = detector.handle(
            &area,
            &at(strip, PointerKind::Move, TAB_WIDTH + 5.0, 5.0 + THRESHOLD * 2.0),
            THRESHOLD,
        );
        assert_eq!(again, None);
    }

    #[test]
    fn test_upward_drag_counts() {
        let (area, strip) = area();
        let mut detector = TabGestureDetector::new();
        detector.handle(&area, &at(strip, PointerKind::Press, 5.0, 5.0), THRESHOLD);
        let action = detector.handle(
            &area,
            &at(strip, PointerKind::Move, 5.0, 5.0 - THRESHOLD),
            THRESHOLD,
        );
        assert!(action.is_some());
    }

    #[test]
    fn test_secondary_release_opens_menu() {
        let (area, strip) = area();
        let mut detector = TabGestureDetector::new();
        let event = at(strip, PointerKind::Release, 5.0, 5.0).with_button(PointerButton::Secondary);
        assert!(matches!(
            detector.handle(&area, &event, THRESHOLD),
            Some(GestureAction::ContextMenu { panel, .. }) if panel == PanelId(1)
        ));
    }

    #[test]
    fn test_double_click_floats() {
        let (area, strip) = area();
        let mut detector = TabGestureDetector::new();
        let event = at(strip, PointerKind::DoubleClick, TAB_WIDTH * 2.0 + 1.0, 5.0);
        assert_eq!(
            detector.handle(&area, &event, THRESHOLD),
            Some(GestureAction::Float {
                panel: PanelId(3),
                global: event.global
            })
        );
    }

    #[test]
    fn test_follows_reordered_tab() {
        let (mut area, strip) = area();
        let mut detector = TabGestureDetector::new();
        detector.handle(&area, &at(strip, PointerKind::Press, 5.0, 5.0), THRESHOLD);
        area.move_tab(strip, 0, 2);
        let action = detector.handle(
            &area,
            &at(strip, PointerKind::Move, 5.0, 5.0 + THRESHOLD),
            THRESHOLD,
        );
        assert!(matches!(
            action,
            Some(GestureAction::DetachDrag { panel, .. }) if panel == PanelId(1)
        ));
    }

    #[test]
    fn test_capture_follows_panel_when_strip_shrinks() {
        let (mut area, strip) = area();
        let mut detector = TabGestureDetector::new();
        detector.handle(&area, &at(strip, PointerKind::Press, TAB_WIDTH + 5.0, 5.0), THRESHOLD);
        area.remove(PanelId(1));
        let action = detector.handle(
            &area,
            &at(strip, PointerKind::Move, TAB_WIDTH + 5.0, 5.0 + THRESHOLD),
            THRESHOLD,
        );
        assert!(matches!(
            action,
            Some(GestureAction::DetachDrag { panel, .. }) if panel == PanelId(2)
        ));
    }

    #[test]
    fn test_capture_dropped_when_panel_leaves_strip() {
        let (mut area, strip) = area();
        let mut detector = TabGestureDetector::new();
        detector.handle(&area, &at(strip, PointerKind::Press, TAB_WIDTH + 5.0, 5.0), THRESHOLD);
        area.remove(PanelId(2));
        let action = detector.handle(
            &area,
            &at(strip, PointerKind::Move, TAB_WIDTH + 5.0, 5.0 + THRESHOLD),
            THRESHOLD,
        );
        assert_eq!(action, None);
        assert_eq!(detector.dragged(), None);
    }
}
