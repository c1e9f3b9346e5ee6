//! Stream engine.
//!
//! Responsibilities:
//! - Session lifecycle: create, step, reset, close
//! - Buffer hand-off through call-scoped regions
//! - Status reporting per session (and per handle registry)
//!
//! Non-responsibilities:
//! - The compression algorithm (see `compression`)
//! - Internal buffering of caller data

pub mod types;
pub mod region;
pub mod status;
pub mod session;
pub mod compressor;
pub mod decompressor;
pub mod registry;
pub mod stream;

pub use types::{
    ErrorKind,
    SessionError,
    SessionHandle,
    SessionState,
    StepOutcome,
};
pub use region::{InputRegion, OutputRegion};
pub use status::StatusRegister;
pub use session::Session;
pub use compressor::Compressor;
pub use decompressor::Decompressor;
pub use registry::SessionRegistry;
pub use stream::{compress_to_writer, copy_decompressed, decompress_stream};
