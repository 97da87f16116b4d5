//! Docking configuration persistence
//!
//! Stores user preferences in `~/.config/dockhand/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Docking configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Title of the main window; other windows append " - window #N"
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Whether new windows hide the title bars of tabbed panels
    #[serde(default = "default_no_title_bars")]
    pub no_title_bars: bool,

    /// Period of the drag-and-settle timer in milliseconds
    #[serde(default = "default_drag_tick_ms")]
    pub drag_tick_ms: u64,

    /// Quiet ticks a floating panel must exceed before it is retargeted
    #[serde(default = "default_settle_ticks")]
    pub settle_ticks: u32,

    /// Tab drag-out threshold, as a multiple of the platform drag distance
    #[serde(default = "default_drag_threshold_factor")]
    pub drag_threshold_factor: f32,

    #[serde(default = "default_main_window_size")]
    pub main_window_size: Size,

    /// Size of windows created for a display or for a maximized detach
    #[serde(default = "default_new_window_size")]
    pub new_window_size: Size,

    /// Splits leaving a pane smaller than this are refused
    #[serde(default = "default_min_pane_extent")]
    pub min_pane_extent: f32,
}

fn default_app_name() -> String {
    "Dockhand".to_string()
}

fn default_no_title_bars() -> bool {
    cfg!(windows)
}

fn default_drag_tick_ms() -> u64 {
    100
}

fn default_settle_ticks() -> u32 {
    4
}

fn default_drag_threshold_factor() -> f32 {
    crate::gesture::DEFAULT_THRESHOLD_FACTOR
}

fn default_main_window_size() -> Size {
    Size::new(1024.0, 768.0)
}

fn default_new_window_size() -> Size {
    Size::new(1000.0, 700.0)
}

fn default_min_pane_extent() -> f32 {
    crate::layout::DEFAULT_MIN_PANE_EXTENT
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            no_title_bars: default_no_title_bars(),
            drag_tick_ms: default_drag_tick_ms(),
            settle_ticks: default_settle_ticks(),
            drag_threshold_factor: default_drag_threshold_factor(),
            main_window_size: default_main_window_size(),
            new_window_size: default_new_window_size(),
            min_pane_extent: default_min_pane_extent(),
        }
    }
}

impl DockConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating its parent directory
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn drag_tick(&self) -> Duration {
        Duration::from_millis(self.drag_tick_ms.max(1))
    }
}
