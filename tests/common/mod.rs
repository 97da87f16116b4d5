//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use dockhand::config::DockConfig;
use dockhand::panel::PanelId;
use dockhand::panels::{ContentKind, PlaceholderContent};
use dockhand::platform::SimulatedPlatform;
use dockhand::window::WindowId;
use dockhand::DockRuntime;

pub type TestRuntime = DockRuntime<SimulatedPlatform>;

/// Config with title bars shown and a deterministic tick period
pub fn test_config() -> DockConfig {
    DockConfig {
        no_title_bars: false,
        drag_tick_ms: 100,
        settle_ticks: 4,
        ..DockConfig::default()
    }
}

/// Runtime over a single 1920x1080 display with only the main window
pub fn test_runtime() -> TestRuntime {
    DockRuntime::new(test_config(), SimulatedPlatform::default())
}

/// Runtime whose windows hide the title bars of tabbed panels
pub fn no_title_bars_runtime() -> TestRuntime {
    let config = DockConfig {
        no_title_bars: true,
        ..test_config()
    };
    DockRuntime::new(config, SimulatedPlatform::default())
}

pub fn main_window(runtime: &TestRuntime) -> WindowId {
    runtime.main_window().expect("main window")
}

/// Add a closable file panel to a window
pub fn add_file(runtime: &mut TestRuntime, window: WindowId, title: &str) -> PanelId {
    runtime
        .add_panel_to(window, Box::new(PlaceholderContent::file(title)), title, None)
        .expect("panel added")
}

pub fn add_kind(runtime: &mut TestRuntime, window: WindowId, title: &str, kind: ContentKind) -> PanelId {
    runtime
        .add_panel_to(
            window,
            Box::new(PlaceholderContent::new(title, kind)),
            title,
            None,
        )
        .expect("panel added")
}

/// Add `titles` to the main window, all tabbed together
pub fn with_panels(titles: &[&str]) -> (TestRuntime, Vec<PanelId>) {
    let mut runtime = test_runtime();
    let main = main_window(&runtime);
    let ids = titles.iter().map(|t| add_file(&mut runtime, main, t)).collect();
    (runtime, ids)
}

/// Let a floating panel sit still long enough for the retarget to run
pub fn settle(runtime: &mut TestRuntime) {
    let ticks = runtime.model.config.settle_ticks as u64 + 2;
    let period = runtime.model.config.drag_tick_ms;
    runtime.advance_time(Duration::from_millis(period * ticks));
}

pub fn window_of(runtime: &TestRuntime, panel: PanelId) -> WindowId {
    runtime.owner_window(panel).expect("panel has a window")
}
