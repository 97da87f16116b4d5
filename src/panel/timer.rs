//! Drag-and-settle timer
//!
//! While a panel floats, a repeating tick polls the pointer buttons. Any held
//! button means the user is still dragging and resets the count; once more
//! than `max_ticks` consecutive quiet ticks have passed the panel is
//! considered settled and gets retargeted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragTimerState {
    #[default]
    Idle,
    Running { ticks: u32 },
}

/// What a single tick decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep polling
    Continue,
    /// Threshold exceeded while floating; the timer has stopped
    Settled,
    /// Panel no longer floats (or the tick was stale); the timer has stopped
    Stopped,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DragTimer {
    state: DragTimerState,
}

impl DragTimer {
    pub fn state(&self) -> DragTimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DragTimerState::Running { .. })
    }

    pub fn ticks(&self) -> u32 {
        match self.state {
            DragTimerState::Idle => 0,
            DragTimerState::Running { ticks } => ticks,
        }
    }

    /// Start the timer or, if already running, reset its tick count.
    /// Returns true if the timer was idle and needs scheduling.
    pub fn start(&mut self) -> bool {
        let was_idle = !self.is_running();
        self.state = DragTimerState::Running { ticks: 0 };
        was_idle
    }

    /// Returns true if a running timer was stopped
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = DragTimerState::Idle;
        was_running
    }

    pub fn tick(&mut self, floating: bool, buttons_held: bool, max_ticks: u32) -> TickOutcome {
        let DragTimerState::Running { mut ticks } = self.state else {
            return TickOutcome::Stopped;
        };

        if floating {
            ticks += 1;
        }
        if buttons_held {
            ticks = 0;
        }

        if ticks > max_ticks && floating {
            self.state = DragTimerState::Idle;
            TickOutcome::Settled
        } else if !floating {
            self.state = DragTimerState::Idle;
            TickOutcome::Stopped
        } else {
            self.state = DragTimerState::Running { ticks };
            TickOutcome::Continue
        }
    }
}
