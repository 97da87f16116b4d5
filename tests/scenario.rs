//! Tests for scenario replay and the state dump

mod common;

use dockhand::debug_dump::{LayoutNodeDump, StateDump};
use dockhand::panel::TitleBarMode;
use dockhand::scenario::Scenario;
use dockhand::DockConfig;

use common::test_config;

const TWO_MONITORS: &str = r#"
displays:
  - { x: 0, y: 0, width: 1920, height: 1080 }
  - { x: 1920, y: 0, width: 1920, height: 1080 }
steps:
  - add_panel: { title: "Database", kind: database }
  - add_panel: { title: "Log", kind: log }
  - add_panel: { title: "dump.bin" }
  - split: { first: "Database", second: "dump.bin", orientation: horizontal }
  - move_to_display: { panel: "Log", display: 1 }
"#;

#[test]
fn test_replay_two_monitors() {
    let scenario = Scenario::parse(TWO_MONITORS).unwrap();
    let runtime = scenario.run(test_config()).unwrap();

    assert_eq!(runtime.model.windows.len(), 2);
    let log = runtime.model.find_panel_by_title("Log").unwrap();
    let db = runtime.model.find_panel_by_title("Database").unwrap();
    assert_ne!(runtime.owner_window(log), runtime.owner_window(db));
}

#[test]
fn test_drag_tab_then_drop_on_second_monitor() {
    let scenario = Scenario::parse(
        r#"
displays:
  - { x: 0, y: 0, width: 1920, height: 1080 }
  - { x: 1920, y: 0, width: 1920, height: 1080 }
steps:
  - add_panel: { title: "a.bin" }
  - add_panel: { title: "b.bin" }
  - drag_tab: { panel: "b.bin", distance: 100, drop_at: { x: 2500, y: 400 } }
  - release
  - wait_ms: 1000
"#,
    )
    .unwrap();
    let config = DockConfig {
        no_title_bars: true,
        ..test_config()
    };
    let runtime = scenario.run(config).unwrap();

    let a = runtime.model.find_panel_by_title("a.bin").unwrap();
    let b = runtime.model.find_panel_by_title("b.bin").unwrap();
    let owner = runtime.owner_window(b).unwrap();
    assert_ne!(Some(owner), runtime.main_window());
    assert!(runtime.model.panel(b).unwrap().is_docked());
    assert_eq!(runtime.model.panel(a).unwrap().title_bar(), TitleBarMode::Default);
}

#[test]
fn test_dump_mirrors_layout() {
    let scenario = Scenario::parse(TWO_MONITORS).unwrap();
    let runtime = scenario.run(test_config()).unwrap();
    let dump = StateDump::from_model(&runtime.model);

    assert_eq!(dump.windows.len(), 2);
    assert!(dump.floating.is_empty());
    assert!(matches!(dump.windows[0].layout, LayoutNodeDump::Split { .. }));

    let json = dump.to_json().unwrap();
    assert!(json.contains("\"Database\""));

    let tree = dump.render_tree();
    assert!(tree.starts_with("Dockhand (main)"));
    assert!(tree.contains("Dockhand - window #2"));
    assert!(tree.contains("split Horizontal"));
}
