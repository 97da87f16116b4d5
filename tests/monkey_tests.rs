//! Monkey tests - random operation sequences and stress testing
//!
//! These tests drive the runtime with long pseudo-random sequences of
//! structural operations and check the global invariants after every step.

mod common;

use std::time::Duration;

use common::{main_window, no_title_bars_runtime, test_runtime, TestRuntime};
use dockhand::geometry::{Orientation, Point, Rect};
use dockhand::messages::{LayoutMsg, Msg, WindowMsg};
use dockhand::panel::PanelId;
use dockhand::panels::{ContentKind, PlaceholderContent};
use dockhand::scenario;

/// Small deterministic generator so failures reproduce
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n.max(1) as u64) as usize
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            None
        } else {
            Some(items[self.below(items.len())])
        }
    }
}

fn all_panels(runtime: &TestRuntime) -> Vec<PanelId> {
    let mut ids: Vec<PanelId> = runtime.model.panels.keys().copied().collect();
    ids.sort();
    ids
}

fn check_invariants(runtime: &TestRuntime, step: usize) {
    let model = &runtime.model;

    let main = model.windows.main_window().expect("main window");
    assert!(model.windows.contains(main), "step {}: main window destroyed", step);
    let mains = model.windows.windows().filter(|w| w.is_main).count();
    assert_eq!(mains, 1, "step {}: {} main windows", step, mains);

    for panel in model.panels.values() {
        assert_ne!(panel.is_floating(), panel.is_docked());
        let owner = panel.parent().expect("panel has an owner");
        assert!(model.windows.contains(owner), "step {}: {} owned by dead window", step, panel.id);

        let homes: Vec<_> = model
            .windows
            .windows()
            .filter(|w| w.area.contains(panel.id))
            .map(|w| w.id)
            .collect();
        if panel.is_docked() {
            assert_eq!(homes, vec![owner], "step {}: docked {} misplaced", step, panel.id);
        } else {
            assert!(homes.is_empty(), "step {}: floating {} still docked", step, panel.id);
        }
    }

    for window in model.windows.windows() {
        if !window.is_main {
            assert!(
                !model.panels_of(window.id).is_empty(),
                "step {}: empty {} survived the pump",
                step,
                window.id
            );
        }
        for panel in window.area.panels() {
            let (strip, index) = window.area.panel_to_tab(*panel).expect("indexed");
            assert_eq!(window.area.tab_to_panel(strip, index), Some(*panel));
        }
        assert_eq!(runtime.pending_messages(), 0);
    }
}

fn random_step(runtime: &mut TestRuntime, rng: &mut XorShift, counter: &mut usize) {
    let panels = all_panels(runtime);
    let windows = runtime.model.windows.ids();

    match rng.below(12) {
        0 | 1 => {
            let Some(window) = rng.pick(&windows) else {
                return;
            };
            *counter += 1;
            let kind = match rng.below(5) {
                0 => ContentKind::Log,
                1 => ContentKind::Database,
                _ => ContentKind::File,
            };
            let title = format!("panel{}", counter);
            runtime.add_panel_to(
                window,
                Box::new(PlaceholderContent::new(title.clone(), kind)),
                title,
                rng.pick(&panels),
            );
        }
        2 => {
            if let Some(panel) = rng.pick(&panels) {
                runtime.close_panel(panel);
            }
        }
        3 => {
            if let Some(panel) = rng.pick(&panels) {
                runtime.set_floating(panel, rng.below(2) == 0);
            }
        }
        4 => {
            if let Some(panel) = rng.pick(&panels) {
                let to = Point::new(rng.below(4000) as f32 - 500.0, rng.below(2000) as f32 - 300.0);
                runtime.move_panel(panel, to);
            }
        }
        5 => {
            let ms = rng.below(800) as u64;
            if rng.below(3) == 0 {
                runtime.platform_mut().press();
            } else {
                runtime.platform_mut().release();
            }
            runtime.advance_time(Duration::from_millis(ms));
        }
        6 => {
            if let (Some(a), Some(b)) = (rng.pick(&panels), rng.pick(&panels)) {
                let orientation = if rng.below(2) == 0 {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                runtime.split(a, b, orientation);
            }
        }
        7 => {
            if let (Some(panel), Some(window)) = (rng.pick(&panels), rng.pick(&windows)) {
                runtime.move_panel_to_window(window, panel);
            }
        }
        8 => {
            if let Some(panel) = rng.pick(&panels) {
                let distance = rng.below(200) as f32;
                let _ = scenario::drag_tab(runtime, panel, distance);
            }
        }
        9 => {
            let closable: Vec<_> = windows
                .iter()
                .copied()
                .filter(|w| !runtime.model.windows.is_main(*w))
                .collect();
            if let Some(window) = rng.pick(&closable) {
                runtime.close_window(window);
            }
        }
        10 => {
            if let Some(panel) = rng.pick(&panels) {
                let msg = match rng.below(3) {
                    0 => LayoutMsg::DetachToNewWindow {
                        panel,
                        maximize: false,
                    },
                    1 => LayoutMsg::DetachToNewWindow {
                        panel,
                        maximize: true,
                    },
                    _ => LayoutMsg::MoveToDisplay {
                        panel,
                        display: rng.below(3),
                    },
                };
                runtime.send(Msg::Layout(msg));
            }
        }
        _ => {
            if let Some(window) = rng.pick(&windows) {
                if rng.below(2) == 0 {
                    let enabled = rng.below(2) == 0;
                    runtime.set_no_title_bars(window, enabled);
                } else {
                    let geometry = Rect::new(
                        rng.below(1000) as f32,
                        rng.below(600) as f32,
                        40.0 + rng.below(1600) as f32,
                        40.0 + rng.below(1000) as f32,
                    );
                    runtime.send(Msg::Window(WindowMsg::Resize { window, geometry }));
                }
            }
        }
    }
}

fn run_monkey(mut runtime: TestRuntime, seed: u64, steps: usize) {
    let mut rng = XorShift(seed);
    let mut counter = 0;
    for step in 0..steps {
        random_step(&mut runtime, &mut rng, &mut counter);
        check_invariants(&runtime, step);
    }
}

#[test]
fn test_random_operations_keep_invariants() {
    for seed in [0x9E37_79B9_7F4A_7C15, 42, 7_777_777, 0xDEAD_BEEF] {
        run_monkey(test_runtime(), seed, 400);
    }
}

#[test]
fn test_random_operations_without_title_bars() {
    for seed in [3, 1_234_567, 0xC0FF_EE00] {
        run_monkey(no_title_bars_runtime(), seed, 400);
    }
}

#[test]
fn test_random_operations_on_two_monitors() {
    let runtime = dockhand::DockRuntime::new(
        common::test_config(),
        dockhand::platform::SimulatedPlatform::dual_head(),
    );
    run_monkey(runtime, 99, 600);
}

// ========================================================================
// Edge cases
// ========================================================================

#[test]
fn test_resize_to_zero_does_not_crash() {
    let mut runtime = test_runtime();
    let main = main_window(&runtime);
    for t in ["a", "b", "c"] {
        runtime.add_panel_to(main, Box::new(PlaceholderContent::file(t)), t, None);
    }

    runtime.send(Msg::Window(WindowMsg::Resize {
        window: main,
        geometry: Rect::new(0.0, 0.0, 0.0, 0.0),
    }));
    let ids = all_panels(&runtime);
    runtime.split(ids[0], ids[1], Orientation::Horizontal);

    assert_eq!(runtime.model.window(main).unwrap().area.len(), 3);
}

#[test]
fn test_split_panel_with_itself_is_noop() {
    let mut runtime = test_runtime();
    let main = main_window(&runtime);
    let a = runtime
        .add_panel_to(main, Box::new(PlaceholderContent::file("a")), "a", None)
        .unwrap();

    runtime.split(a, a, Orientation::Vertical);

    assert_eq!(runtime.model.window(main).unwrap().area.group_ids().len(), 1);
}

#[test]
fn test_many_windows_then_close_all() {
    let mut runtime = test_runtime();
    let main = main_window(&runtime);
    let mut panels = Vec::new();
    for i in 0..20 {
        let title = format!("p{}", i);
        let p = runtime
            .add_panel_to(main, Box::new(PlaceholderContent::file(title.clone())), title, None)
            .unwrap();
        panels.push(p);
    }
    for p in &panels[1..] {
        runtime.send(Msg::Layout(LayoutMsg::DetachToNewWindow {
            panel: *p,
            maximize: false,
        }));
    }
    assert_eq!(runtime.model.windows.len(), 20);

    for p in panels {
        runtime.close_panel(p);
    }
    assert_eq!(runtime.model.windows.len(), 1);
}
