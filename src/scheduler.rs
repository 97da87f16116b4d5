//! Repeating per-panel timers
//!
//! The event loop owns the clock; this queue only records when each running
//! timer fires next. Cancelling is immediate and a cancelled timer never
//! fires again.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::panel::PanelId;

#[derive(Debug, Clone, Copy)]
struct Entry {
    period: Duration,
    next: Duration,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: BTreeMap<PanelId, Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the repeating timer of a panel
    pub fn start(&mut self, panel: PanelId, now: Duration, period: Duration) {
        self.timers.insert(
            panel,
            Entry {
                period,
                next: now + period,
            },
        );
    }

    pub fn cancel(&mut self, panel: PanelId) -> bool {
        self.timers.remove(&panel).is_some()
    }

    pub fn is_running(&self, panel: PanelId) -> bool {
        self.timers.contains_key(&panel)
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|e| e.next).min()
    }

    /// Pop the timer due earliest at or before `now` and re-arm it.
    /// Ties go to the lower panel id.
    pub fn pop_due(&mut self, now: Duration) -> Option<PanelId> {
        let (&panel, _) = self
            .timers
            .iter()
            .filter(|(_, e)| e.next <= now)
            .min_by_key(|(id, e)| (e.next, **id))?;
        if let Some(entry) = self.timers.get_mut(&panel) {
            entry.next += entry.period;
        }
        Some(panel)
    }
}
