//! compression/constants.rs
//! Compression levels and strategies understood by the zlib codec, plus raw
//! mode identifiers.

/// Raw compression levels (zlib scale).
pub mod levels {
    /// Store only, no compression.
    pub const NO_COMPRESSION: i32 = 0;
    /// Fastest, lowest ratio.
    pub const BEST_SPEED: i32 = 1;
    /// Slowest, best ratio.
    pub const BEST_COMPRESSION: i32 = 9;
    /// Sentinel: let the codec pick its default trade-off.
    pub const DEFAULT_COMPRESSION: i32 = -1;
}

/// Raw deflate strategies (zlib `Z_*_STRATEGY` values).
pub mod strategies {
    pub const DEFAULT: i32 = 0;
    /// Favors literals over short matches; for small, noisy values.
    pub const FILTERED: i32 = 1;
    /// No match search at all, Huffman-code the literals only.
    pub const HUFFMAN_ONLY: i32 = 2;
    /// Matches of distance one only (run-length encoding).
    pub const RLE: i32 = 3;
    /// Static Huffman blocks only.
    pub const FIXED: i32 = 4;
}

/// Level the codec applies for `DEFAULT_COMPRESSION`.
pub const DEFAULT_LEVEL_DEFLATE: u32 = 6;

/// Stable mode IDs (u8) for the handle surface.
pub mod mode_ids {
    pub const COMPRESS: u8   = 0x01;
    pub const DECOMPRESS: u8 = 0x02;
}
