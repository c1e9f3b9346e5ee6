//! engine/session.rs
//! The stream engine: one codec context driven through bounded steps.
//!
//! Responsibilities:
//! - Own the codec context from init to finalize
//! - Bind caller regions to the codec for one step at a time
//! - Pick the flush mode from the session mode, never from the caller
//! - Keep the per-session status register and telemetry
//!
//! Non-responsibilities:
//! - Buffering: unconsumed input must be re-submitted by the caller
//! - Retrying: any codec error is surfaced as-is and poisons the session

use tracing::{debug, trace, warn};

use crate::compression::{create_codec, Codec, CodecStatus, CompressionLevel, CompressionStrategy, Mode};
use crate::config::EngineConfig;
use crate::engine::region::{InputRegion, OutputRegion};
use crate::engine::status::StatusRegister;
use crate::engine::types::{SessionError, SessionState, StepOutcome};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

/// One compress-or-decompress stream.
///
/// Dropping a session that was not closed finalizes and releases the codec
/// context; `close` does the same but reports the finalizer's verdict.
pub struct Session {
    mode: Mode,
    level: CompressionLevel,
    strategy: CompressionStrategy,
    state: SessionState,
    /// At least one step ran since create or the last reset.
    in_stream: bool,
    codec: Option<Box<dyn Codec>>,
    status: StatusRegister,
    counters: TelemetryCounters,
    timer: TelemetryTimer,
}

impl Session {
    /// Initialize a codec context for `mode`.
    ///
    /// `level` only matters for compression; pass `CompressionLevel::Default`
    /// for decompression.
    ///
    /// # Errors
    /// - `SessionError::Initialization` if the level is out of range or the
    ///   codec could not be set up. No session is returned in that case.
    pub fn create(mode: Mode, level: CompressionLevel) -> Result<Self, SessionError> {
        Self::with_config(mode, level, &EngineConfig::default())
    }

    pub fn with_config(mode: Mode, level: CompressionLevel, config: &EngineConfig) -> Result<Self, SessionError> {
        Self::with_strategy(mode, level, CompressionStrategy::Default, config)
    }

    /// Like `with_config`, with an explicit deflate strategy.
    pub fn with_strategy(
        mode: Mode,
        level: CompressionLevel,
        strategy: CompressionStrategy,
        config: &EngineConfig,
    ) -> Result<Self, SessionError> {
        let mut timer = TelemetryTimer::new(config.collect_metrics);
        let codec = timer
            .measure(Stage::Init, || create_codec(mode, level, strategy))
            .map_err(|source| {
                warn!(%mode, error = %source, "codec init failed");
                SessionError::Initialization { mode, source }
            })?;

        debug!(%mode, ?level, ?strategy, codec = codec.name(), "session created");
        Ok(Self {
            mode,
            level,
            strategy,
            state: SessionState::Active,
            in_stream: false,
            codec: Some(codec),
            status: StatusRegister::default(),
            counters: TelemetryCounters::default(),
            timer,
        })
    }

    /// Run the codec once over `input` into `output`.
    ///
    /// Returns how many bytes were consumed and produced and whether the
    /// stream ended. The caller keeps calling with the unconsumed remainder
    /// of its input (and fresh output space) until `completed` is reported.
    ///
    /// # Errors
    /// - `AlreadyCompleted` once the stream has ended (until `reset`)
    /// - `Failed` after an earlier processing failure
    /// - `Processing` if the codec rejects the input or cannot progress
    pub fn step(&mut self, input: InputRegion<'_>, mut output: OutputRegion<'_>) -> Result<StepOutcome, SessionError> {
        match self.state {
            SessionState::Active => {}
            SessionState::Completed => return Err(self.fail(SessionError::AlreadyCompleted { mode: self.mode })),
            SessionState::Failed | SessionState::Closed => return Err(self.fail(SessionError::Failed { mode: self.mode })),
        }
        let Some(codec) = self.codec.as_mut() else {
            return Err(self.fail(SessionError::Failed { mode: self.mode }));
        };

        let flush = self.mode.flush_mode();
        let capacity = output.capacity();
        let result = self.timer.measure(Stage::Step, || {
            codec.step(input.as_slice(), output.as_mut_slice(), flush)
        });

        self.in_stream = true;
        match result {
            Ok(report) => {
                let outcome = StepOutcome {
                    produced: report.produced,
                    consumed: report.consumed,
                    completed: report.status == CodecStatus::StreamEnd,
                };
                debug_assert!(outcome.consumed <= input.len() && outcome.produced <= capacity);

                self.counters.add_step(outcome.consumed, outcome.produced);
                self.status.record_step(&outcome);
                trace!(
                    mode = %self.mode,
                    input = input.len(),
                    capacity,
                    consumed = outcome.consumed,
                    produced = outcome.produced,
                    "step"
                );
                if outcome.completed {
                    self.state = SessionState::Completed;
                    self.counters.add_completion();
                    debug!(mode = %self.mode, total_out = self.counters.bytes_produced, "stream complete");
                }
                Ok(outcome)
            }
            Err(source) => {
                self.state = SessionState::Failed;
                Err(self.fail(SessionError::Processing { mode: self.mode, source }))
            }
        }
    }

    /// Return the codec to its freshly initialized state so the session can
    /// carry another independent stream. Clears the status register.
    pub fn reset(&mut self) {
        if let Some(codec) = self.codec.as_mut() {
            self.timer.measure(Stage::Reset, || codec.reset());
        }
        self.state = SessionState::Active;
        self.in_stream = false;
        self.status.clear();
        self.counters.add_reset();
        debug!(mode = %self.mode, "session reset");
    }

    /// Finalize the codec and release it.
    ///
    /// The context is released even if the finalizer reports an error; the
    /// error is still returned as `SessionError::Finalization`.
    pub fn close(mut self) -> Result<(), SessionError> {
        self.finalize()
    }

    /// Finalize in place. Idempotent: a released context is not touched again.
    pub(crate) fn finalize(&mut self) -> Result<(), SessionError> {
        let Some(mut codec) = self.codec.take() else {
            return Ok(());
        };
        let result = self.timer.measure(Stage::Finalize, || codec.finalize());
        drop(codec);
        self.state = SessionState::Closed;

        match result {
            Ok(()) => {
                self.status.record_ok();
                debug!(
                    mode = %self.mode,
                    steps = self.counters.steps,
                    step_us = self.timer.stage_times.get_us(Stage::Step),
                    "session closed"
                );
                Ok(())
            }
            Err(source) => {
                self.status.record_error();
                self.counters.add_error();
                warn!(mode = %self.mode, error = %source, "session closed uncleanly");
                Err(SessionError::Finalization { mode: self.mode, source })
            }
        }
    }

    /// Reject anything but a freshly created (or reset) session. Used by
    /// drivers that run a whole stream and must not splice into, or silently
    /// skip, a stream the caller already started.
    pub(crate) fn ensure_fresh(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Active if !self.in_stream => Ok(()),
            SessionState::Active => Err(self.fail(SessionError::StreamInProgress { mode: self.mode })),
            SessionState::Completed => Err(self.fail(SessionError::AlreadyCompleted { mode: self.mode })),
            SessionState::Failed | SessionState::Closed => Err(self.fail(SessionError::Failed { mode: self.mode })),
        }
    }

    fn fail(&mut self, err: SessionError) -> SessionError {
        self.status.record_error();
        self.counters.add_error();
        debug!(mode = %self.mode, state = %self.state, error = %err, "step rejected");
        err
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    pub fn strategy(&self) -> CompressionStrategy {
        self.strategy
    }

    /// True until the first step after create or reset.
    pub fn is_fresh(&self) -> bool {
        self.state == SessionState::Active && !self.in_stream
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn status(&self) -> &StatusRegister {
        &self.status
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Completed
    }

    pub fn counters(&self) -> &TelemetryCounters {
        &self.counters
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::from(self.mode, &self.counters, &self.timer)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.codec.is_some() {
            if let Err(e) = self.finalize() {
                warn!(error = %e, "session dropped without close");
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode)
            .field("level", &self.level)
            .field("strategy", &self.strategy)
            .field("state", &self.state)
            .field("status", &self.status)
            .finish()
    }
}
