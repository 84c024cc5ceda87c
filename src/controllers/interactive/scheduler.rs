//! Preview/full render debouncing.
//!
//! Every viewport change is answered with a preview straight away and leaves
//! a full render pending. The pending full render is issued on the first tick
//! where the user is no longer interacting. At most one full render is ever
//! pending.

use crate::controllers::interactive::input::InputSnapshot;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    PendingFull,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    Skip,
    Full,
}

#[must_use]
pub fn decide(state: SchedulerState, input: InputSnapshot) -> RenderDecision {
    match state {
        SchedulerState::PendingFull if !input.is_interacting() => RenderDecision::Full,
        SchedulerState::PendingFull | SchedulerState::Idle => RenderDecision::Skip,
    }
}

#[derive(Debug, Clone)]
pub struct RenderScheduler {
    state: SchedulerState,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderScheduler {
    /// Starts pending so the first idle tick produces the first full frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SchedulerState::PendingFull,
        }
    }

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[must_use]
    pub fn decide(&self, input: InputSnapshot) -> RenderDecision {
        decide(self.state, input)
    }

    pub fn preview_issued(&mut self) {
        self.state = SchedulerState::PendingFull;
    }

    pub fn full_issued(&mut self) {
        self.state = SchedulerState::Idle;
    }
}
