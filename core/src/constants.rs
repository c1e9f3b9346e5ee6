/// Defaults when Option<T> is None
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64 KiB

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;

/// Minimum spare output capacity the whole-buffer drivers keep per step.
pub const MIN_WRITABLE: usize = 8192;

/// Expected compression ratio used to size driver buffers up front.
pub const ASSUMED_COMPRESSION_FACTOR: usize = 7;
