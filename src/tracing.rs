//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging docking
//! state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug` - layout diffs after every message
//! - `RUST_LOG=dockhand::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockhand/logs/dockhand.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::collections::BTreeMap;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::DockModel;
use crate::panel::PanelId;
use crate::window::WindowId;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering.
/// File logging writes to `~/.config/dockhand/logs/dockhand.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of where every panel is, for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub windows: Vec<WindowId>,
    pub panels: BTreeMap<PanelId, PanelPlacement>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelPlacement {
    Docked { window: WindowId, group: u64 },
    Floating { owner: Option<WindowId> },
}

impl LayoutSnapshot {
    pub fn from_model(model: &DockModel) -> Self {
        let panels = model
            .panels
            .values()
            .map(|p| {
                let placement = if p.is_floating() {
                    PanelPlacement::Floating { owner: p.parent() }
                } else {
                    let window = p.parent().unwrap_or(WindowId(0));
                    let group = model
                        .window(window)
                        .and_then(|w| w.area.group_of(p.id))
                        .map(|g| g.0)
                        .unwrap_or(0);
                    PanelPlacement::Docked { window, group }
                };
                (p.id, placement)
            })
            .collect();
        Self {
            windows: model.windows.ids(),
            panels,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.windows != other.windows {
            changes.push(format!("windows: {:?} → {:?}", self.windows, other.windows));
        }

        for (id, before) in &self.panels {
            match other.panels.get(id) {
                None => changes.push(format!("{}: closed", id)),
                Some(after) if after != before => {
                    changes.push(format!("{}: {:?} → {:?}", id, before, after))
                }
                Some(_) => {}
            }
        }
        for (id, after) in &other.panels {
            if !self.panels.contains_key(id) {
                changes.push(format!("{}: added {:?}", id, after));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
