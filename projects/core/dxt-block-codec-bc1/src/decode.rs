//! BC1 (DXT1) block decoding.
//!
//! The palette is rebuilt from the endpoints exactly as the encoder builds it, and always has
//! 4 opaque colours regardless of the order of the endpoints.

use crate::block::{Bc1Block, BC1_BLOCK_SIZE};
use crate::error::Bc1Error;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a packed BC1 block into 16 opaque texels in raster order.
///
/// # Parameters
///
/// - `packed`: The packed block. Must be exactly 8 bytes.
///
/// # Errors
///
/// [`Bc1Error::InvalidPackedBlockSize`] if `packed` is not 8 bytes long.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc1::decode_block;
/// use dxt_block_codec_common::color_8888::Color8888;
///
/// let bc1_block = [
///     0x00, 0xF8, // endpoint0 = R:31 G:0 B:0
///     0x00, 0xF8, // endpoint1 = R:31 G:0 B:0
///     0x00, 0x00, 0x00, 0x00, // All pixels use index 0
/// ];
///
/// let decoded = decode_block(&bc1_block).unwrap();
/// assert!(decoded.pixels.iter().all(|&p| p == Color8888::opaque(255, 0, 0)));
/// ```
pub fn decode_block(packed: &[u8]) -> Result<Decoded4x4Block, Bc1Error> {
    let packed: &[u8; BC1_BLOCK_SIZE] = packed.try_into().map_err(|_| {
        log::debug!("rejected {} byte packed block; blocks are 8 bytes", packed.len());
        Bc1Error::InvalidPackedBlockSize(packed.len())
    })?;

    Ok(decode_packed(packed))
}

/// Decodes a packed BC1 block into 16 opaque texels in raster order.
///
/// The length is fixed by the type, so this cannot fail.
#[inline]
pub fn decode_packed(packed: &[u8; BC1_BLOCK_SIZE]) -> Decoded4x4Block {
    let block = Bc1Block::from_bytes(packed);
    let palette = block.palette();
    let indices = block.indices.unpack();

    Decoded4x4Block::from_pixels(core::array::from_fn(|i| palette.color(indices[i])))
}
