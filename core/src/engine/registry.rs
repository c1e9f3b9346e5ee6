//! engine/registry.rs
//! Handle-based session surface.
//!
//! Callers that cannot hold a typed `Session` (bindings, tables of streams)
//! get an opaque `SessionHandle` instead. Handles are tracked here so that
//! stale or never-issued handles are rejected with `InvalidHandle` rather
//! than touching a released codec context.
//!
//! The registry keeps one `StatusRegister` describing the last operation
//! issued through it. Separate registries never share status.

use std::collections::HashMap;

use tracing::debug;

use crate::compression::{strategies, CompressionLevel, CompressionStrategy, Mode};
use crate::config::EngineConfig;
use crate::engine::region::{InputRegion, OutputRegion};
use crate::engine::session::Session;
use crate::engine::status::StatusRegister;
use crate::engine::types::{SessionError, SessionHandle};
use crate::utils::enum_name_or_hex;

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionHandle, Session>,
    next_handle: u64,
    status: StatusRegister,
    config: EngineConfig,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Create a compress session. `level` is a raw zlib level: `-1` for the
    /// codec default or `0..=9`.
    pub fn create_compressor(&mut self, level: i32) -> Result<SessionHandle, SessionError> {
        self.create_compressor_with_strategy(level, strategies::DEFAULT)
    }

    /// Create a compress session with a raw zlib strategy (`0..=4`).
    pub fn create_compressor_with_strategy(&mut self, level: i32, strategy: i32) -> Result<SessionHandle, SessionError> {
        let parsed = CompressionLevel::from_raw(level)
            .and_then(|level| Ok((level, CompressionStrategy::from_raw(strategy)?)));
        match parsed {
            Ok((level, strategy)) => self.open(Mode::Compress, level, strategy),
            Err(source) => {
                self.reject();
                Err(SessionError::Initialization { mode: Mode::Compress, source })
            }
        }
    }

    pub fn create_decompressor(&mut self) -> Result<SessionHandle, SessionError> {
        self.open(Mode::Decompress, CompressionLevel::Default, CompressionStrategy::Default)
    }

    /// Create a session from a raw mode id (see `mode_ids`).
    pub fn create(&mut self, mode: u8, level: i32) -> Result<SessionHandle, SessionError> {
        match Mode::try_from(mode) {
            Ok(Mode::Compress) => self.create_compressor(level),
            Ok(Mode::Decompress) => self.create_decompressor(),
            Err(_) => {
                self.reject();
                Err(SessionError::UnknownMode { raw: enum_name_or_hex::<Mode>(mode) })
            }
        }
    }

    fn open(
        &mut self,
        mode: Mode,
        level: CompressionLevel,
        strategy: CompressionStrategy,
    ) -> Result<SessionHandle, SessionError> {
        let session = match Session::with_strategy(mode, level, strategy, &self.config) {
            Ok(session) => session,
            Err(e) => {
                self.reject();
                return Err(e);
            }
        };
        self.status.mirror(session.status());

        self.next_handle += 1;
        let handle = SessionHandle(self.next_handle);
        self.sessions.insert(handle, session);
        debug!(%handle, %mode, "handle issued");
        Ok(handle)
    }

    /// Step the session behind `handle`. Returns bytes produced; consumed
    /// bytes and completion are readable through the accessors.
    pub fn step(&mut self, handle: SessionHandle, input: &[u8], output: &mut [u8]) -> Result<usize, SessionError> {
        let Some(session) = self.sessions.get_mut(&handle) else {
            self.reject();
            return Err(SessionError::InvalidHandle { handle });
        };
        let result = OutputRegion::new(output)
            .and_then(|output| session.step(InputRegion::new(input), output));
        match result {
            Ok(outcome) => {
                self.status.mirror(session.status());
                Ok(outcome.produced)
            }
            Err(e) => {
                self.status.mirror(session.status());
                self.status.record_error();
                Err(e)
            }
        }
    }

    /// Reset the session behind `handle` for another independent stream.
    pub fn reset(&mut self, handle: SessionHandle) -> Result<(), SessionError> {
        let Some(session) = self.sessions.get_mut(&handle) else {
            self.reject();
            return Err(SessionError::InvalidHandle { handle });
        };
        session.reset();
        self.status.mirror(session.status());
        Ok(())
    }

    /// Finalize and release the session behind `handle`. The handle is
    /// invalid afterwards, whatever the finalizer reported.
    pub fn close_session(&mut self, handle: SessionHandle) -> Result<(), SessionError> {
        let Some(mut session) = self.sessions.remove(&handle) else {
            self.reject();
            return Err(SessionError::InvalidHandle { handle });
        };
        let result = session.finalize();
        self.status.mirror(session.status());
        debug!(%handle, ok = result.is_ok(), "handle released");
        result
    }

    /// Overwrite the register for an operation that never reached a session.
    fn reject(&mut self) {
        self.status.clear();
        self.status.record_error();
    }

    pub fn last_error(&self) -> bool {
        self.status.last_error()
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    pub fn last_consumed(&self) -> usize {
        self.status.last_consumed()
    }

    pub fn status(&self) -> &StatusRegister {
        &self.status
    }

    pub fn session(&self, handle: SessionHandle) -> Option<&Session> {
        self.sessions.get(&handle)
    }

    pub fn is_live(&self, handle: SessionHandle) -> bool {
        self.sessions.contains_key(&handle)
    }

    pub fn live_sessions(&self) -> usize {
        self.sessions.len()
    }
}
