//! Dockhand - detachable panel docking
//!
//! This crate provides the core types and logic for tabbed, splittable,
//! detachable panels spread over several top-level windows, implementing the
//! Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod context_menu;
pub mod debug_dump;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod messages;
pub mod model;
pub mod panel;
pub mod panels;
pub mod platform;
pub mod retarget;
pub mod runtime;
pub mod scenario;
pub mod scheduler;
pub mod tracing;
pub mod update;
pub mod window;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use messages::Msg;
pub use model::DockModel;
pub use runtime::DockRuntime;
