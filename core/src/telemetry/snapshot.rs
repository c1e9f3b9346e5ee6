//! telemetry/snapshot.rs
//!
//! Immutable view of a session's counters and timings.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::compression::Mode;
use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{TelemetryTimer, StageTimes};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub mode: Mode,
    pub steps: u64,
    pub bytes_consumed: u64,
    pub bytes_produced: u64,
    pub errors: u64,
    pub completions: u64,
    pub resets: u64,
    /// Compressed size over plain size, whichever side that is for `mode`.
    pub compression_ratio: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(mode: Mode, counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let (plain, packed) = match mode {
            Mode::Compress   => (counters.bytes_consumed, counters.bytes_produced),
            Mode::Decompress => (counters.bytes_produced, counters.bytes_consumed),
        };
        let compression_ratio = if plain > 0 {
            packed as f64 / plain as f64
        } else {
            0.0
        };

        Self {
            mode,
            steps: counters.steps,
            bytes_consumed: counters.bytes_consumed,
            bytes_produced: counters.bytes_produced,
            errors: counters.errors,
            completions: counters.completions,
            resets: counters.resets,
            compression_ratio,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Stage time can never exceed the session's wall clock.
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
