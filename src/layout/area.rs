//! Dock area - the arrangement of panels inside one window
//!
//! This is the layout substrate a window's engine drives: tab groups,
//! split containers, the remembered slot of panels that were floated out, and
//! the tab-strip ⇄ panel index that gesture handling relies on.

use std::collections::HashMap;

use super::tab_group::{GroupId, TabGroup};
use super::tree::{
    attach_at_side, collect_group_ids, compute_layout_node, insert_split_in_layout,
    remove_group_from_layout, DockSide, LayoutNode,
};
use crate::geometry::{Orientation, Point, Rect};
use crate::panel::PanelId;

/// Default minimum extent of a pane along a split axis
pub const DEFAULT_MIN_PANE_EXTENT: f32 = 48.0;

#[derive(Debug, Clone)]
pub struct DockArea {
    /// All tab groups in this window
    pub groups: HashMap<GroupId, TabGroup>,

    /// The layout tree root
    pub layout: LayoutNode,

    /// Docked panels in the order they entered this area (oldest first)
    order: Vec<PanelId>,

    /// Group a floated-out panel came from, for re-docking in place
    restore_slots: HashMap<PanelId, GroupId>,

    /// (strip, index) -> panel
    strip_map: HashMap<(GroupId, usize), PanelId>,
    /// panel -> (strip, index)
    tab_index: HashMap<PanelId, (GroupId, usize)>,

    /// Splits leaving a half smaller than this are refused
    pub min_pane_extent: f32,

    /// Last rect used for compute_layout
    pub last_layout_rect: Option<Rect>,

    /// Bumped each time the geometry is invalidated
    generation: u64,

    next_group_id: u64,
}

impl Default for DockArea {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PANE_EXTENT)
    }
}

impl DockArea {
    pub fn new(min_pane_extent: f32) -> Self {
        Self {
            groups: HashMap::new(),
            layout: LayoutNode::Empty,
            order: Vec::new(),
            restore_slots: HashMap::new(),
            strip_map: HashMap::new(),
            tab_index: HashMap::new(),
            min_pane_extent,
            last_layout_rect: None,
            generation: 0,
            next_group_id: 1,
        }
    }

    fn next_group_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group_id);
        self.next_group_id += 1;
        id
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of docked panels
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Docked panels, oldest first
    pub fn panels(&self) -> &[PanelId] {
        &self.order
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.order.contains(&panel)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn group_of(&self, panel: PanelId) -> Option<GroupId> {
        self.groups
            .values()
            .find(|g| g.contains(panel))
            .map(|g| g.id)
    }

    pub fn group(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.get(&id)
    }

    /// Groups in layout order (left-to-right, top-to-bottom)
    pub fn group_ids(&self) -> Vec<GroupId> {
        collect_group_ids(&self.layout)
    }

    /// Other panels sharing the panel's area
    pub fn tabified_with(&self, panel: PanelId) -> Vec<PanelId> {
        self.group_of(panel)
            .and_then(|id| self.groups.get(&id))
            .map(|g| g.panels.iter().copied().filter(|p| *p != panel).collect())
            .unwrap_or_default()
    }

    pub fn are_tabified(&self, a: PanelId, b: PanelId) -> bool {
        a != b && self.group_of(a).is_some_and(|g| self.group_of(b) == Some(g))
    }

    /// First panel tabbed together with `panel`
    pub fn find_sibling(&self, panel: PanelId) -> Option<PanelId> {
        self.tabified_with(panel).into_iter().next()
    }

    /// First docked panel that is neither `panel` nor tabbed with it
    pub fn find_not_tabified_with(&self, panel: PanelId) -> Option<PanelId> {
        self.order
            .iter()
            .copied()
            .find(|p| *p != panel && !self.are_tabified(panel, *p))
    }

    /// Two panels living in different areas, if the window has them.
    ///
    /// The first is the oldest panel; the second is the first panel not
    /// tabbed with it, or the first panel again when every panel shares one
    /// area.
    pub fn find_two_non_tabified(&self) -> (Option<PanelId>, Option<PanelId>) {
        let Some(&first) = self.order.first() else {
            return (None, None);
        };
        let second = self.find_not_tabified_with(first).unwrap_or(first);
        (Some(first), Some(second))
    }

    /// Panel shown by a given tab
    pub fn tab_to_panel(&self, strip: GroupId, index: usize) -> Option<PanelId> {
        self.strip_map.get(&(strip, index)).copied()
    }

    /// Tab strip and index showing a given panel
    pub fn panel_to_tab(&self, panel: PanelId) -> Option<(GroupId, usize)> {
        self.tab_index.get(&panel).copied()
    }

    /// Groups that currently show a tab strip
    pub fn tab_strips(&self) -> Vec<GroupId> {
        self.group_ids()
            .into_iter()
            .filter(|id| self.groups.get(id).is_some_and(|g| g.has_tab_strip()))
            .collect()
    }

    /// Find the group at a given window-local point
    pub fn group_at_point(&self, x: f32, y: f32) -> Option<GroupId> {
        self.group_ids()
            .into_iter()
            .find(|id| self.groups.get(id).is_some_and(|g| g.rect.contains(x, y)))
    }

    /// Window-local rect of the area showing a panel
    pub fn panel_rect(&self, panel: PanelId) -> Option<Rect> {
        self.group_of(panel)
            .and_then(|id| self.groups.get(&id))
            .map(|g| g.rect)
    }

    pub fn has_restore_slot(&self, panel: PanelId) -> bool {
        self.restore_slots.contains_key(&panel)
    }

    // =========================================================================
    // Structural changes
    // =========================================================================

    /// Put a panel into a fresh area at the left or right edge
    pub fn place_in_default_area(&mut self, panel: PanelId, side: DockSide) -> GroupId {
        self.remove(panel);
        let id = self.next_group_id();
        self.groups.insert(id, TabGroup::new(id, panel));
        attach_at_side(&mut self.layout, id, side);
        self.order.push(panel);
        self.reindex();
        id
    }

    /// Tab `panel` together with `anchor`.
    /// Falls back to the right default area if the anchor is not docked here.
    pub fn tabify(&mut self, anchor: PanelId, panel: PanelId) -> GroupId {
        if anchor == panel {
            if let Some(group) = self.group_of(panel) {
                return group;
            }
        }
        self.remove(panel);
        match self.group_of(anchor) {
            Some(group_id) => {
                self.add_to_group(group_id, panel);
                group_id
            }
            None => self.place_in_default_area(panel, DockSide::Right),
        }
    }

    fn add_to_group(&mut self, group_id: GroupId, panel: PanelId) {
        if let Some(group) = self.groups.get_mut(&group_id) {
            group.push(panel);
            if !self.order.contains(&panel) {
                self.order.push(panel);
            }
        }
        self.reindex();
    }

    /// Take a panel out of the layout. Returns the group it was in.
    /// Empty groups are removed and their splits collapsed.
    pub fn remove(&mut self, panel: PanelId) -> Option<GroupId> {
        let group_id = self.group_of(panel)?;
        self.order.retain(|p| *p != panel);

        let now_empty = match self.groups.get_mut(&group_id) {
            Some(group) => {
                group.remove(panel);
                group.panels.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.groups.remove(&group_id);
            remove_group_from_layout(&mut self.layout, group_id);
            self.restore_slots.retain(|_, g| *g != group_id);
        }
        self.reindex();
        Some(group_id)
    }

    /// Take a panel out of the layout but remember where it was
    pub fn detach_for_float(&mut self, panel: PanelId) -> bool {
        let Some(group_id) = self.remove(panel) else {
            return false;
        };
        if self.groups.contains_key(&group_id) {
            self.restore_slots.insert(panel, group_id);
        }
        true
    }

    /// Put a floated-out panel back where it came from, or into the left
    /// default area if that spot is gone.
    pub fn redock(&mut self, panel: PanelId) -> GroupId {
        if let Some(group) = self.group_of(panel) {
            return group;
        }
        match self.restore_slots.remove(&panel) {
            Some(group_id) if self.groups.contains_key(&group_id) => {
                self.add_to_group(group_id, panel);
                group_id
            }
            _ => self.place_in_default_area(panel, DockSide::Left),
        }
    }

    /// Drop any remembered slot (the panel went elsewhere or was destroyed)
    pub fn forget(&mut self, panel: PanelId) {
        self.restore_slots.remove(&panel);
    }

    /// Bring a panel's tab to the front of its strip
    pub fn bring_to_front(&mut self, panel: PanelId) -> bool {
        let Some(group_id) = self.group_of(panel) else {
            return false;
        };
        match self.groups.get_mut(&group_id) {
            Some(group) => {
                group.active_index = group.index_of(panel).unwrap_or(0);
                true
            }
            None => false,
        }
    }

    /// Reorder tabs inside one strip
    pub fn move_tab(&mut self, strip: GroupId, from: usize, to: usize) -> bool {
        let moved = self
            .groups
            .get_mut(&strip)
            .is_some_and(|g| g.move_tab(from, to));
        if moved {
            self.reindex();
        }
        moved
    }

    /// Give `panel` its own area next to `group_id` along `orientation`.
    ///
    /// Refused (returns false, nothing changes) when the group is laid out
    /// and halving it would leave a pane below `min_pane_extent`.
    pub fn split_group(&mut self, group_id: GroupId, panel: PanelId, orientation: Orientation) -> bool {
        let Some(group) = self.groups.get(&group_id) else {
            return false;
        };
        let rect = group.rect;
        if !rect.is_empty() && rect.extent(orientation) / 2.0 < self.min_pane_extent {
            return false;
        }

        self.remove(panel);
        if !self.groups.contains_key(&group_id) {
            return false;
        }
        let new_id = self.next_group_id();
        self.groups.insert(new_id, TabGroup::new(new_id, panel));
        if !insert_split_in_layout(&mut self.layout, group_id, new_id, orientation) {
            self.groups.remove(&new_id);
            return false;
        }
        self.order.push(panel);
        self.reindex();
        self.relayout();
        true
    }

    /// One split attempt: make `second` adjacent to `first` along
    /// `orientation`.
    ///
    /// Panels tabbed with `first` are taken out before the split and tabbed
    /// back with `first` afterwards. If the layout refuses the split,
    /// `second` goes back to where it was. Returns false if `second` is still
    /// tabbed with `first` at the end.
    pub fn split_once(&mut self, first: PanelId, second: PanelId, orientation: Orientation) -> bool {
        if first == second {
            return false;
        }
        let Some(first_group) = self.group_of(first) else {
            return false;
        };
        let second_home = self.group_of(second);

        let mut others = self.tabified_with(first);
        for panel in &others {
            self.remove(*panel);
        }
        others.retain(|p| *p != second);

        if !self.split_group(first_group, second, orientation) {
            match second_home {
                Some(home) if home != first_group && self.groups.contains_key(&home) => {
                    if !self.contains(second) {
                        self.add_to_group(home, second);
                    }
                }
                _ => {
                    if !self.contains(second) {
                        self.add_to_group(first_group, second);
                    }
                }
            }
        }

        for panel in others {
            self.add_to_group(first_group, panel);
        }

        !self.are_tabified(first, second)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Compute rects for all groups in window-local coordinates
    pub fn compute_layout(&mut self, available: Rect) {
        self.last_layout_rect = Some(available);
        compute_layout_node(&self.layout, available, &mut self.groups);
    }

    /// Recompute with the last known rect, if there is one
    fn relayout(&mut self) {
        if let Some(rect) = self.last_layout_rect {
            self.compute_layout(rect);
        }
    }

    /// Invalidate the geometry: recompute rects and bump the generation
    pub fn invalidate(&mut self, available: Rect) {
        self.compute_layout(available);
        self.generation += 1;
    }

    /// Rebuild the tab-strip ⇄ panel index from the groups
    fn reindex(&mut self) {
        self.strip_map.clear();
        self.tab_index.clear();
        for group in self.groups.values() {
            for (index, panel) in group.panels.iter().enumerate() {
                self.strip_map.insert((group.id, index), *panel);
                self.tab_index.insert(*panel, (group.id, index));
            }
        }
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

impl DockArea {
    /// Validate internal invariants in debug builds.
    ///
    /// This function checks that:
    /// - every group in the tree exists and every group is in the tree
    /// - no group is empty and every active index is valid
    /// - every docked panel appears in exactly one group
    /// - the strip index agrees with the groups
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let in_tree = self.group_ids();
        assert_eq!(
            in_tree.len(),
            self.groups.len(),
            "layout tree has {} groups but map has {}",
            in_tree.len(),
            self.groups.len()
        );
        for id in &in_tree {
            let group = self
                .groups
                .get(id)
                .unwrap_or_else(|| panic!("{} in tree but not in map", id));
            assert!(!group.panels.is_empty(), "{} is empty", id);
            assert!(
                group.active_index < group.panels.len(),
                "{} has active_index {} but only {} tabs",
                id,
                group.active_index,
                group.panels.len()
            );
            assert_eq!(group.panels.len(), group.close_buttons.len());
        }

        for panel in &self.order {
            let count = self.groups.values().filter(|g| g.contains(*panel)).count();
            assert_eq!(count, 1, "{} appears in {} groups", panel, count);
            let (strip, index) = self
                .panel_to_tab(*panel)
                .unwrap_or_else(|| panic!("{} missing from strip index", panel));
            assert_eq!(self.tab_to_panel(strip, index), Some(*panel));
        }
        let total: usize = self.groups.values().map(|g| g.panels.len()).sum();
        assert_eq!(total, self.order.len());
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u64) -> PanelId {
        PanelId(n)
    }

    fn area_with_tabbed(n: u64) -> DockArea {
        let mut area = DockArea::default();
        area.place_in_default_area(p(1), DockSide::Right);
        for i in 2..=n {
            area.tabify(p(1), p(i));
        }
        area
    }

    #[test]
    fn test_tabify_groups_panels() {
        let area = area_with_tabbed(3);
        assert_eq!(area.groups.len(), 1);
        assert_eq!(area.tabified_with(p(1)), vec![p(2), p(3)]);
        assert_eq!(area.find_sibling(p(3)), Some(p(1)));
        assert_eq!(area.tab_to_panel(area.group_of(p(1)).unwrap(), 2), Some(p(3)));
        area.assert_invariants();
    }

    #[test]
    fn test_tabify_with_missing_anchor_uses_default_area() {
        let mut area = DockArea::default();
        area.tabify(p(9), p(1));
        assert!(area.contains(p(1)));
        assert_eq!(area.groups.len(), 1);
        area.assert_invariants();
    }

    #[test]
    fn test_split_once_separates_and_keeps_others_tabbed() {
        let mut area = area_with_tabbed(3);
        assert!(area.split_once(p(1), p(2), Orientation::Horizontal));
        assert!(!area.are_tabified(p(1), p(2)));
        assert!(area.are_tabified(p(1), p(3)));
        assert_eq!(area.groups.len(), 2);
        area.assert_invariants();
    }

    #[test]
    fn test_split_refused_when_too_narrow() {
        let mut area = area_with_tabbed(2);
        area.compute_layout(Rect::new(0.0, 0.0, 60.0, 600.0));
        assert!(!area.split_once(p(1), p(2), Orientation::Horizontal));
        assert!(area.are_tabified(p(1), p(2)));
        assert!(area.split_once(p(1), p(2), Orientation::Vertical));
        area.assert_invariants();
    }

    #[test]
    fn test_detach_and_redock_in_place() {
        let mut area = area_with_tabbed(2);
        let group = area.group_of(p(2)).unwrap();
        assert!(area.detach_for_float(p(2)));
        assert!(!area.contains(p(2)));
        assert!(area.has_restore_slot(p(2)));
        assert_eq!(area.redock(p(2)), group);
        assert!(area.are_tabified(p(1), p(2)));
        area.assert_invariants();
    }

    #[test]
    fn test_redock_without_slot_uses_default_area() {
        let mut area = DockArea::default();
        area.place_in_default_area(p(1), DockSide::Right);
        area.detach_for_float(p(1));
        assert!(area.is_empty());
        area.redock(p(1));
        assert!(area.contains(p(1)));
        area.assert_invariants();
    }

    #[test]
    fn test_find_two_non_tabified() {
        let mut area = area_with_tabbed(2);
        assert_eq!(area.find_two_non_tabified(), (Some(p(1)), Some(p(1))));
        area.place_in_default_area(p(3), DockSide::Right);
        assert_eq!(area.find_two_non_tabified(), (Some(p(1)), Some(p(3))));
    }

    #[test]
    fn test_group_at_point_after_layout() {
        let mut area = area_with_tabbed(2);
        area.split_once(p(1), p(2), Orientation::Horizontal);
        area.compute_layout(Rect::new(0.0, 0.0, 800.0, 600.0));
        let left = area.group_at_point(100.0, 100.0).unwrap();
        let right = area.group_at_point(700.0, 100.0).unwrap();
        assert_eq!(area.group_of(p(1)), Some(left));
        assert_eq!(area.group_of(p(2)), Some(right));
    }
}
