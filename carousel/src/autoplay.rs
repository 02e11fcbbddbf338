use crate::{IndexState, ScrollCommand};

/// Autoplay settings, fixed for the lifetime of a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayConfig {
    pub enabled: bool,
    pub delay_ms: u64,
}

impl AutoplayConfig {
    pub const DEFAULT_DELAY_MS: u64 = 2500;

    pub fn enabled(delay_ms: u64) -> Self {
        Self {
            enabled: true,
            delay_ms,
        }
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: Self::DEFAULT_DELAY_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingTimer {
    deadline_ms: u64,
}

/// Owner of the single autoplay timer.
///
/// Time is supplied by the adapter (`now_ms`), the same way scroll events are. Arming always
/// replaces the previous timer, so at most one is ever pending.
#[derive(Clone, Debug, Default)]
pub struct AutoplayScheduler {
    timer: Option<PendingTimer>,
}

impl AutoplayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.timer.map(|t| t.deadline_ms)
    }

    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.cancel_if_any();
        let deadline_ms = now_ms.saturating_add(delay_ms);
        ctrace!(now_ms, deadline_ms, "AutoplayScheduler::arm");
        self.timer = Some(PendingTimer { deadline_ms });
    }

    pub fn cancel_if_any(&mut self) {
        if self.timer.take().is_some() {
            ctrace!("AutoplayScheduler::cancel");
        }
    }

    /// Returns `true` once when the pending timer is due, disarming it.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.timer {
            Some(t) if now_ms >= t.deadline_ms => {
                self.timer = None;
                true
            }
            _ => false,
        }
    }

    /// The command an expired timer issues for a given state.
    ///
    /// Wraps to the first item once the end was reached, otherwise advances by one.
    pub fn next_command(state: &IndexState) -> ScrollCommand {
        if state.end_reached {
            ScrollCommand::animated(0)
        } else {
            let next = state.current_index.saturating_add(1).max(0);
            ScrollCommand::animated(usize::try_from(next).unwrap_or(usize::MAX))
        }
    }
}
