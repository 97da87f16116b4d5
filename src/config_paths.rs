//! Where dockhand keeps its files on disk
//!
//! ```text
//! <root>/config.yaml
//! <root>/logs/dockhand.log.<date>
//! ```
//!
//! `<root>` is `$DOCKHAND_CONFIG_DIR` when set, otherwise the platform config
//! home joined with `dockhand`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Overrides the whole config root, mainly for tests and scenario runs
pub const ROOT_ENV: &str = "DOCKHAND_CONFIG_DIR";

/// File name prefix of the rolling log
pub const LOG_FILE_NAME: &str = "dockhand.log";

const CONFIG_FILE_NAME: &str = "config.yaml";
const LOGS_DIR_NAME: &str = "logs";

/// Platform config home, before the app directory is appended.
///
/// `$XDG_CONFIG_HOME` then `~/.config` on Unix and macOS, `%APPDATA%` on
/// Windows.
fn platform_config_home() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        env::var_os("APPDATA").map(PathBuf::from)
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }
}

/// Root for a given override and config home. An empty override is ignored.
pub fn resolve_root(override_dir: Option<&Path>, config_home: Option<&Path>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => Some(dir.to_path_buf()),
        _ => config_home.map(|home| home.join("dockhand")),
    }
}

pub fn config_dir() -> Option<PathBuf> {
    let override_dir = env::var_os(ROOT_ENV).map(PathBuf::from);
    resolve_root(override_dir.as_deref(), platform_config_home().as_deref())
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|root| root.join(CONFIG_FILE_NAME))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|root| root.join(LOGS_DIR_NAME))
}

/// Create the logs directory (and the root above it) and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no config directory for dockhand")
    })?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
