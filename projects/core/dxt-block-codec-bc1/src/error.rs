//! Error types for BC1 block operations.

use thiserror::Error;

/// Errors that can occur when encoding or decoding a BC1 block.
///
/// Both variants are validation failures of the caller's input; the codec itself has no
/// other failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Bc1Error {
    /// The texel region handed to the encoder is not exactly 4x4.
    #[error("Invalid block size: {width}x{height} texels. Blocks must be exactly 4x4 texels.")]
    InvalidBlockSize {
        /// Width of the rejected region, in texels
        width: usize,
        /// Height of the rejected region, in texels
        height: usize,
    },

    /// The packed input handed to the decoder is not exactly 8 bytes.
    #[error("Invalid packed block size: {0} bytes. A packed BC1 block is exactly 8 bytes.")]
    InvalidPackedBlockSize(usize),
}
