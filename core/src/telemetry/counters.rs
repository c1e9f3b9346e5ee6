//! telemetry/counters.rs
//! Mutable counters kept by every session.
//!
//! Summary: Collects step counts and byte counts as the codec is driven.
//! Converted into an immutable TelemetrySnapshot on request.
use serde::{Serialize, Deserialize};
use std::ops::AddAssign;

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub steps: u64,
    pub bytes_consumed: u64,
    pub bytes_produced: u64,
    pub errors: u64,
    pub completions: u64,
    pub resets: u64,
}

impl TelemetryCounters {
    /// Record one successful step.
    ///
    /// - `consumed`: bytes taken from the input region
    /// - `produced`: bytes written into the output region
    pub fn add_step(&mut self, consumed: usize, produced: usize) {
        self.steps += 1;
        self.bytes_consumed += consumed as u64;
        self.bytes_produced += produced as u64;
    }

    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    /// Mark a stream that reached its natural end.
    pub fn add_completion(&mut self) {
        self.completions += 1;
    }

    pub fn add_reset(&mut self) {
        self.resets += 1;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.steps += other.steps;
        self.bytes_consumed += other.bytes_consumed;
        self.bytes_produced += other.bytes_produced;
        self.errors += other.errors;
        self.completions += other.completions;
        self.resets += other.resets;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
