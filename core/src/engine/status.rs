//! engine/status.rs
//! "What happened last" for one session or one registry.

use crate::engine::types::StepOutcome;

/// Outcome of the most recent lifecycle operation.
///
/// Overwritten at the end of every create, step, reset and close issued
/// through its owner; never written by the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusRegister {
    error: bool,
    completed: bool,
    processed: usize,
}

impl StatusRegister {
    pub fn last_error(&self) -> bool {
        self.error
    }

    /// Whether the stream has reached its end. Stays set for the session
    /// until it is reset.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Input bytes consumed by the last step.
    pub fn last_consumed(&self) -> usize {
        self.processed
    }

    pub(crate) fn record_ok(&mut self) {
        self.error = false;
    }

    pub(crate) fn record_error(&mut self) {
        self.error = true;
    }

    pub(crate) fn record_step(&mut self, outcome: &StepOutcome) {
        self.error = false;
        self.processed = outcome.consumed;
        self.completed |= outcome.completed;
    }

    pub(crate) fn clear(&mut self) {
        *self = StatusRegister::default();
    }

    /// Overwrite this register with another one (registry mirroring a session).
    pub(crate) fn mirror(&mut self, other: &StatusRegister) {
        *self = *other;
    }
}
