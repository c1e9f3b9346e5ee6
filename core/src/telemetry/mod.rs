//! telemetry/mod.rs
//! Per-session telemetry: counters, timers, and immutable snapshots.
//!
//! Counters are always kept; stage timers only when the session was created
//! with metrics enabled.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
