//! Runtime module - event loop integration
//!
//! This module drives the pure update functions:
//! - `app` - the event queue, timers, and command execution
//!
//! The runtime is single-threaded. Structural notifications go through the
//! queue, timers fire only when the owner of the runtime advances the clock,
//! and every message runs to completion before the next one starts.

pub mod app;

pub use app::DockRuntime;
