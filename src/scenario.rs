//! Scripted docking scenarios
//!
//! A scenario is a YAML file describing the monitors and a list of steps.
//! Replaying it drives a [`DockRuntime`] over a [`SimulatedPlatform`], which
//! makes layouts reproducible outside a real windowing system.
//!
//! ```yaml
//! displays:
//!   - { x: 0, y: 0, width: 1920, height: 1080 }
//! steps:
//!   - add_panel: { title: "Database", kind: database }
//!   - add_panel: { title: "dump.bin" }
//!   - split: { first: "Database", second: "dump.bin", orientation: horizontal }
//!   - drag_tab: { panel: "dump.bin", distance: 80, drop_at: { x: 1500, y: 300 } }
//!   - wait_ms: 1000
//! ```
//!
//! Panels are referred to by title. Windows are referred to by id (the main
//! window is 1).

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::DockConfig;
use crate::geometry::{Orientation, Point, Rect};
use crate::gesture::{PointerKind, TabPointerEvent};
use crate::messages::{Msg, PanelMsg};
use crate::panel::PanelId;
use crate::panels::{ContentKind, PlaceholderContent};
use crate::platform::{Display, SimulatedPlatform};
use crate::runtime::DockRuntime;
use crate::window::WindowId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Monitors, first one primary. Defaults to a single 1920x1080 screen.
    #[serde(default)]
    pub displays: Vec<Rect>,
    /// Written as `- add_panel: {...}` maps rather than YAML `!tags`
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    AddPanel {
        title: String,
        #[serde(default)]
        window: Option<WindowId>,
        #[serde(default = "default_kind")]
        kind: ContentKind,
        #[serde(default)]
        sibling: Option<String>,
    },
    AddPanelPair {
        first: String,
        second: String,
        #[serde(default)]
        window: Option<WindowId>,
    },
    Split {
        first: String,
        second: String,
        orientation: Orientation,
    },
    MoveToWindow {
        panel: String,
        window: WindowId,
    },
    MoveToDisplay {
        panel: String,
        display: usize,
    },
    Float {
        panel: String,
        #[serde(default = "default_true")]
        floating: bool,
    },
    /// Press on the panel's tab and pull it `distance` pixels off the strip.
    /// With `drop_at` the detached panel is then carried there.
    DragTab {
        panel: String,
        distance: f32,
        #[serde(default)]
        drop_at: Option<Point>,
    },
    MovePanel {
        panel: String,
        to: Point,
    },
    Press,
    Release,
    WaitMs(u64),
    ClosePanel(String),
    CloseWindow(WindowId),
    SetNoTitleBars {
        window: WindowId,
        enabled: bool,
    },
}

fn default_kind() -> ContentKind {
    ContentKind::File
}

fn default_true() -> bool {
    true
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse scenario {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn platform(&self) -> SimulatedPlatform {
        if self.displays.is_empty() {
            SimulatedPlatform::default()
        } else {
            SimulatedPlatform::new(self.displays.iter().copied().map(Display::new).collect())
        }
    }

    /// Replay every step on a fresh runtime
    pub fn run(&self, config: DockConfig) -> Result<DockRuntime<SimulatedPlatform>> {
        let mut runtime = DockRuntime::new(config, self.platform());
        for (i, step) in self.steps.iter().enumerate() {
            tracing::debug!(step = i, ?step, "replaying");
            apply(&mut runtime, step).with_context(|| format!("Step {} ({:?}) failed", i + 1, step))?;
        }
        Ok(runtime)
    }
}

fn panel_by_title(runtime: &DockRuntime<SimulatedPlatform>, title: &str) -> Result<PanelId> {
    runtime
        .model
        .find_panel_by_title(title)
        .ok_or_else(|| anyhow!("No panel titled {:?}", title))
}

fn target_window(runtime: &DockRuntime<SimulatedPlatform>, window: Option<WindowId>) -> Result<WindowId> {
    match window {
        Some(id) if runtime.model.windows.contains(id) => Ok(id),
        Some(id) => bail!("No live {}", id),
        None => runtime.main_window().ok_or_else(|| anyhow!("No main window")),
    }
}

pub fn apply(runtime: &mut DockRuntime<SimulatedPlatform>, step: &Step) -> Result<()> {
    match step {
        Step::AddPanel {
            title,
            window,
            kind,
            sibling,
        } => {
            let window = target_window(runtime, *window)?;
            let sibling = sibling
                .as_deref()
                .map(|s| panel_by_title(runtime, s))
                .transpose()?;
            let content = Box::new(PlaceholderContent::new(title.clone(), *kind));
            runtime
                .add_panel_to(window, content, title.clone(), sibling)
                .ok_or_else(|| anyhow!("Could not add panel {:?}", title))?;
        }

        Step::AddPanelPair {
            first,
            second,
            window,
        } => {
            let window = target_window(runtime, *window)?;
            runtime
                .add_panel_pair(
                    window,
                    (Box::new(PlaceholderContent::file(first.clone())), first.clone()),
                    (Box::new(PlaceholderContent::file(second.clone())), second.clone()),
                )
                .ok_or_else(|| anyhow!("Could not add panel pair"))?;
        }

        Step::Split {
            first,
            second,
            orientation,
        } => {
            let first = panel_by_title(runtime, first)?;
            let second = panel_by_title(runtime, second)?;
            runtime.split(first, second, *orientation);
        }

        Step::MoveToWindow { panel, window } => {
            let panel = panel_by_title(runtime, panel)?;
            let window = target_window(runtime, Some(*window))?;
            runtime.move_panel_to_window(window, panel);
        }

        Step::MoveToDisplay { panel, display } => {
            let panel = panel_by_title(runtime, panel)?;
            let window = runtime
                .get_or_create_window_for_display(*display)
                .ok_or_else(|| anyhow!("No display {}", display))?;
            runtime.move_panel_to_window(window, panel);
        }

        Step::Float { panel, floating } => {
            let panel = panel_by_title(runtime, panel)?;
            runtime.set_floating(panel, *floating);
        }

        Step::DragTab {
            panel,
            distance,
            drop_at,
        } => {
            let panel = panel_by_title(runtime, panel)?;
            drag_tab(runtime, panel, *distance)?;
            if let Some(to) = drop_at {
                runtime.send(Msg::Panel(PanelMsg::CenterOn { panel, point: *to }));
            }
        }

        Step::MovePanel { panel, to } => {
            let panel = panel_by_title(runtime, panel)?;
            runtime.move_panel(panel, *to);
        }

        Step::Press => runtime.platform_mut().press(),

        Step::Release => runtime.platform_mut().release(),

        Step::WaitMs(ms) => runtime.advance_time(Duration::from_millis(*ms)),

        Step::ClosePanel(title) => {
            let panel = panel_by_title(runtime, title)?;
            runtime.close_panel(panel);
        }

        Step::CloseWindow(window) => {
            let window = target_window(runtime, Some(*window))?;
            runtime.close_window(window);
        }

        Step::SetNoTitleBars { window, enabled } => {
            let window = target_window(runtime, Some(*window))?;
            runtime.set_no_title_bars(window, *enabled);
        }
    }
    Ok(())
}

/// Press on a panel's tab, then move the pointer `distance` pixels along the
/// strip's minor axis. The pointer button stays held.
pub fn drag_tab(runtime: &mut DockRuntime<SimulatedPlatform>, panel: PanelId, distance: f32) -> Result<()> {
    let window = runtime
        .owner_window(panel)
        .ok_or_else(|| anyhow!("{} has no window", panel))?;
    let w = runtime
        .model
        .window(window)
        .ok_or_else(|| anyhow!("{} is gone", window))?;
    let (strip, index) = w
        .area
        .panel_to_tab(panel)
        .ok_or_else(|| anyhow!("{} is not docked", panel))?;
    let group = w
        .area
        .group(strip)
        .ok_or_else(|| anyhow!("{} has no tab group", panel))?;
    let tab = group
        .tab_rect(index)
        .ok_or_else(|| anyhow!("{} has no tab", panel))?;

    let press_pos = tab.center();
    let move_pos = if group.shape.is_horizontal() {
        Point::new(press_pos.x, press_pos.y + distance)
    } else {
        Point::new(press_pos.x + distance, press_pos.y)
    };
    let strip_origin = group.strip_rect().origin();
    let global = |p: Point| w.to_screen(Point::new(strip_origin.x + p.x, strip_origin.y + p.y));
    let press = TabPointerEvent::new(strip, PointerKind::Press, press_pos, global(press_pos));
    let pull = TabPointerEvent::new(strip, PointerKind::Move, move_pos, global(move_pos));

    runtime.platform_mut().press();
    runtime.tab_pointer(window, press);
    runtime.tab_pointer(window, pull);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let scenario = Scenario::parse(
            r#"
steps:
  - add_panel: { title: "a.bin" }
  - add_panel: { title: "Log", kind: log }
  - split: { first: "a.bin", second: "Log", orientation: vertical }
  - press
  - wait_ms: 300
  - close_panel: "a.bin"
"#,
        )
        .unwrap();
        assert!(scenario.displays.is_empty());
        assert_eq!(scenario.steps.len(), 6);
        assert_eq!(scenario.steps[3], Step::Press);
        assert_eq!(scenario.steps[4], Step::WaitMs(300));
        assert!(matches!(
            &scenario.steps[1],
            Step::AddPanel { kind: ContentKind::Log, .. }
        ));
    }

    #[test]
    fn test_run_builds_layout() {
        let scenario = Scenario {
            displays: vec![],
            steps: vec![
                Step::AddPanel {
                    title: "a.bin".into(),
                    window: None,
                    kind: ContentKind::File,
                    sibling: None,
                },
                Step::AddPanel {
                    title: "b.bin".into(),
                    window: None,
                    kind: ContentKind::File,
                    sibling: None,
                },
            ],
        };
        let runtime = scenario.run(DockConfig::default()).unwrap();
        let a = runtime.model.find_panel_by_title("a.bin").unwrap();
        let b = runtime.model.find_panel_by_title("b.bin").unwrap();
        let main = runtime.main_window().unwrap();
        assert!(runtime.model.window(main).unwrap().area.are_tabified(a, b));
    }

    #[test]
    fn test_unknown_panel_is_an_error() {
        let scenario = Scenario {
            displays: vec![],
            steps: vec![Step::ClosePanel("missing".into())],
        };
        let err = scenario.run(DockConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("missing"));
    }
}
