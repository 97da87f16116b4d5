//! Layout tree - splits and tab groups
//!
//! Standalone helpers operate on `LayoutNode` directly to avoid borrowing the
//! whole `DockArea` while the tree is being rewritten.

use std::collections::HashMap;

use super::tab_group::{GroupId, TabGroup};
use crate::geometry::{Orientation, Rect};

/// A container that splits space between children
#[derive(Debug, Clone)]
pub struct SplitContainer {
    pub direction: Orientation,
    pub children: Vec<LayoutNode>,
    /// Proportional sizes (0.0 to 1.0, must sum to 1.0)
    pub ratios: Vec<f32>,
}

impl SplitContainer {
    fn normalize(&mut self) {
        let sum: f32 = self.ratios.iter().sum();
        if sum > 0.0 {
            for ratio in &mut self.ratios {
                *ratio /= sum;
            }
        }
    }
}

/// A node in the layout tree - either a tab group or a split container
#[derive(Debug, Clone, Default)]
pub enum LayoutNode {
    #[default]
    Empty,
    Group(GroupId),
    Split(SplitContainer),
}

/// Where a freshly placed area goes when nothing tells us otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockSide {
    Left,
    Right,
}

/// Add a group at the left or right edge of the whole layout
pub(crate) fn attach_at_side(layout: &mut LayoutNode, new_group: GroupId, side: DockSide) {
    let node = LayoutNode::Group(new_group);
    match layout {
        LayoutNode::Empty => *layout = node,
        LayoutNode::Split(container) if container.direction == Orientation::Horizontal => {
            let share = 1.0 / (container.children.len() + 1) as f32;
            for ratio in &mut container.ratios {
                *ratio *= 1.0 - share;
            }
            match side {
                DockSide::Left => {
                    container.children.insert(0, node);
                    container.ratios.insert(0, share);
                }
                DockSide::Right => {
                    container.children.push(node);
                    container.ratios.push(share);
                }
            }
            container.normalize();
        }
        _ => {
            let existing = std::mem::take(layout);
            let children = match side {
                DockSide::Left => vec![node, existing],
                DockSide::Right => vec![existing, node],
            };
            *layout = LayoutNode::Split(SplitContainer {
                direction: Orientation::Horizontal,
                children,
                ratios: vec![0.5, 0.5],
            });
        }
    }
}

/// Place `new_group` right after `target` along `direction`.
///
/// If the target already sits in a split running the same way, the new group
/// becomes its next sibling and takes half of the target's share. Otherwise
/// the target leaf is replaced by a two-child split.
/// Returns true if the target was found.
pub(crate) fn insert_split_in_layout(
    layout: &mut LayoutNode,
    target: GroupId,
    new_group: GroupId,
    direction: Orientation,
) -> bool {
    match layout {
        LayoutNode::Empty => false,
        LayoutNode::Group(id) if *id == target => {
            *layout = LayoutNode::Split(SplitContainer {
                direction,
                children: vec![LayoutNode::Group(target), LayoutNode::Group(new_group)],
                ratios: vec![0.5, 0.5],
            });
            true
        }
        LayoutNode::Group(_) => false,
        LayoutNode::Split(container) => {
            if container.direction == direction {
                let index = container
                    .children
                    .iter()
                    .position(|child| matches!(child, LayoutNode::Group(id) if *id == target));
                if let Some(i) = index {
                    let half = container.ratios.get(i).copied().unwrap_or(0.5) / 2.0;
                    container.ratios[i] = half;
                    container.children.insert(i + 1, LayoutNode::Group(new_group));
                    container.ratios.insert(i + 1, half);
                    container.normalize();
                    return true;
                }
            }
            container
                .children
                .iter_mut()
                .any(|child| insert_split_in_layout(child, target, new_group, direction))
        }
    }
}

/// Remove a group from the layout tree, collapsing splits as needed
/// Returns true if the group was found and removed
pub(crate) fn remove_group_from_layout(layout: &mut LayoutNode, group_id: GroupId) -> bool {
    match layout {
        LayoutNode::Empty => false,
        LayoutNode::Group(id) => {
            if *id == group_id {
                *layout = LayoutNode::Empty;
                true
            } else {
                false
            }
        }
        LayoutNode::Split(container) => {
            let found_index = container
                .children
                .iter()
                .position(|child| matches!(child, LayoutNode::Group(id) if *id == group_id));

            let removed = if let Some(index) = found_index {
                container.children.remove(index);
                container.ratios.remove(index);
                container.normalize();
                true
            } else {
                let hit = container
                    .children
                    .iter_mut()
                    .position(|child| remove_group_from_layout(child, group_id));
                if let Some(i) = hit {
                    // Siblings keep their proportions when a nested split empties
                    if matches!(container.children[i], LayoutNode::Empty) {
                        container.children.remove(i);
                        container.ratios.remove(i);
                        container.normalize();
                    }
                }
                hit.is_some()
            };

            // If only one child remains, collapse the split
            if container.children.len() == 1 {
                let remaining = container.children.remove(0);
                *layout = remaining;
            } else if container.children.is_empty() {
                *layout = LayoutNode::Empty;
            }

            removed
        }
    }
}

/// Collect all group IDs from the layout tree (in order)
pub(crate) fn collect_group_ids(layout: &LayoutNode) -> Vec<GroupId> {
    match layout {
        LayoutNode::Empty => Vec::new(),
        LayoutNode::Group(id) => vec![*id],
        LayoutNode::Split(container) => container
            .children
            .iter()
            .flat_map(collect_group_ids)
            .collect(),
    }
}

/// Recursively assign window-local rects to every group
pub(crate) fn compute_layout_node(
    node: &LayoutNode,
    rect: Rect,
    groups: &mut HashMap<GroupId, TabGroup>,
) {
    match node {
        LayoutNode::Empty => {}
        LayoutNode::Group(group_id) => {
            if let Some(group) = groups.get_mut(group_id) {
                group.rect = rect;
            }
        }
        LayoutNode::Split(container) => {
            let children = &container.children;
            if children.is_empty() {
                return;
            }

            let total_size = rect.extent(container.direction);
            let mut offset = 0.0;
            for (i, child) in children.iter().enumerate() {
                let ratio = container
                    .ratios
                    .get(i)
                    .copied()
                    .unwrap_or(1.0 / children.len() as f32);
                let child_size = total_size * ratio;

                let child_rect = match container.direction {
                    Orientation::Horizontal => {
                        Rect::new(rect.x + offset, rect.y, child_size, rect.height)
                    }
                    Orientation::Vertical => {
                        Rect::new(rect.x, rect.y + offset, rect.width, child_size)
                    }
                };

                compute_layout_node(child, child_rect, groups);
                offset += child_size;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(n: u64) -> GroupId {
        GroupId(n)
    }

    #[test]
    fn test_insert_split_replaces_leaf() {
        let mut layout = LayoutNode::Group(g(1));
        assert!(insert_split_in_layout(&mut layout, g(1), g(2), Orientation::Vertical));
        match &layout {
            LayoutNode::Split(c) => {
                assert_eq!(c.direction, Orientation::Vertical);
                assert_eq!(collect_group_ids(&layout), vec![g(1), g(2)]);
                assert_eq!(c.ratios, vec![0.5, 0.5]);
            }
            other => panic!("Expected Split, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_split_same_direction_adds_sibling() {
        let mut layout = LayoutNode::Group(g(1));
        insert_split_in_layout(&mut layout, g(1), g(2), Orientation::Horizontal);
        insert_split_in_layout(&mut layout, g(1), g(3), Orientation::Horizontal);
        match &layout {
            LayoutNode::Split(c) => {
                assert_eq!(c.children.len(), 3);
                assert_eq!(collect_group_ids(&layout), vec![g(1), g(3), g(2)]);
                let sum: f32 = c.ratios.iter().sum();
                assert!((sum - 1.0).abs() < 1e-5);
            }
            other => panic!("Expected Split, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_collapses_single_child_split() {
        let mut layout = LayoutNode::Group(g(1));
        insert_split_in_layout(&mut layout, g(1), g(2), Orientation::Horizontal);
        assert!(remove_group_from_layout(&mut layout, g(2)));
        assert!(matches!(layout, LayoutNode::Group(id) if id == g(1)));
        assert!(remove_group_from_layout(&mut layout, g(1)));
        assert!(matches!(layout, LayoutNode::Empty));
    }

    #[test]
    fn test_remove_nested_collapses_inner_split() {
        let mut layout = LayoutNode::Group(g(1));
        insert_split_in_layout(&mut layout, g(1), g(2), Orientation::Horizontal);
        insert_split_in_layout(&mut layout, g(2), g(3), Orientation::Vertical);
        assert!(remove_group_from_layout(&mut layout, g(3)));
        match &layout {
            LayoutNode::Split(c) => {
                assert_eq!(c.children.len(), 2);
                assert!(matches!(c.children[1], LayoutNode::Group(id) if id == g(2)));
            }
            other => panic!("Expected Split, got {:?}", other),
        }
    }

    fn uneven_with_nested(nested: LayoutNode) -> LayoutNode {
        LayoutNode::Split(SplitContainer {
            direction: Orientation::Horizontal,
            children: vec![LayoutNode::Group(g(1)), nested, LayoutNode::Group(g(4))],
            ratios: vec![0.6, 0.3, 0.1],
        })
    }

    fn ratios(layout: &LayoutNode) -> Vec<f32> {
        match layout {
            LayoutNode::Split(c) => c.ratios.clone(),
            other => panic!("Expected Split, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_collapse_keeps_outer_ratios() {
        let nested = LayoutNode::Split(SplitContainer {
            direction: Orientation::Vertical,
            children: vec![LayoutNode::Group(g(2)), LayoutNode::Group(g(3))],
            ratios: vec![0.5, 0.5],
        });
        let mut layout = uneven_with_nested(nested);

        assert!(remove_group_from_layout(&mut layout, g(2)));

        assert_eq!(collect_group_ids(&layout), vec![g(1), g(3), g(4)]);
        assert_eq!(ratios(&layout), vec![0.6, 0.3, 0.1]);
    }

    #[test]
    fn test_emptied_nested_split_drops_only_its_ratio() {
        let nested = LayoutNode::Split(SplitContainer {
            direction: Orientation::Vertical,
            children: vec![LayoutNode::Group(g(2))],
            ratios: vec![1.0],
        });
        let mut layout = uneven_with_nested(nested);

        assert!(remove_group_from_layout(&mut layout, g(2)));

        assert_eq!(collect_group_ids(&layout), vec![g(1), g(4)]);
        let r = ratios(&layout);
        assert!((r[0] - 0.6 / 0.7).abs() < 1e-5);
        assert!((r[1] - 0.1 / 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_remove_missing_group_changes_nothing() {
        let mut layout = uneven_with_nested(LayoutNode::Group(g(2)));
        assert!(!remove_group_from_layout(&mut layout, g(9)));
        assert_eq!(ratios(&layout), vec![0.6, 0.3, 0.1]);
    }

    #[test]
    fn test_attach_at_side_orders_children() {
        let mut layout = LayoutNode::Empty;
        attach_at_side(&mut layout, g(1), DockSide::Right);
        attach_at_side(&mut layout, g(2), DockSide::Right);
        attach_at_side(&mut layout, g(3), DockSide::Left);
        assert_eq!(collect_group_ids(&layout), vec![g(3), g(1), g(2)]);
    }
}
