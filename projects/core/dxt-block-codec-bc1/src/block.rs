//! The 8-byte packed BC1 block.
//!
//! ```text
//! offset 0  u16 LE  Endpoint0 (RGB565)
//! offset 2  u16 LE  Endpoint1 (RGB565)
//! offset 4  u8 x 4  palette indices, one byte per row
//! ```

use crate::error::Bc1Error;
use crate::indices::Bc1Indices;
use crate::palette::Bc1Palette;
use crate::quantize::Bc1Endpoints;
use dxt_block_codec_common::color_565::Color565;

/// Size of a packed BC1 block, in bytes.
pub const BC1_BLOCK_SIZE: usize = 8;

/// A BC1 block split into its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bc1Block {
    /// The two stored endpoints.
    pub endpoints: Bc1Endpoints,
    /// The per-texel palette indices.
    pub indices: Bc1Indices,
}

impl Bc1Block {
    /// Parses a packed block.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_bc1::Bc1Block;
    ///
    /// let block = Bc1Block::from_bytes(&[0xE0, 0xDE, 0xE0, 0xFF, 0x11, 0x11, 0x11, 0x11]);
    /// assert_eq!(block.endpoints.endpoint0.raw_value(), 0xDEE0);
    /// assert_eq!(block.endpoints.endpoint1.raw_value(), 0xFFE0);
    /// assert_eq!(block.indices.get(0), 1);
    /// assert_eq!(block.indices.get(1), 0);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: &[u8; BC1_BLOCK_SIZE]) -> Self {
        Self {
            endpoints: Bc1Endpoints::new(
                Color565::from_le_bytes([bytes[0], bytes[1]]),
                Color565::from_le_bytes([bytes[2], bytes[3]]),
            ),
            indices: Bc1Indices::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// Parses a packed block from a slice, which must be exactly [`BC1_BLOCK_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// [`Bc1Error::InvalidPackedBlockSize`] if `bytes` has any other length.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, Bc1Error> {
        let bytes: &[u8; BC1_BLOCK_SIZE] = bytes
            .try_into()
            .map_err(|_| Bc1Error::InvalidPackedBlockSize(bytes.len()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Serializes the block into its 8-byte wire form.
    #[inline]
    pub fn to_bytes(&self) -> [u8; BC1_BLOCK_SIZE] {
        let [e0_lo, e0_hi] = self.endpoints.endpoint0.to_le_bytes();
        let [e1_lo, e1_hi] = self.endpoints.endpoint1.to_le_bytes();
        let [i0, i1, i2, i3] = self.indices.to_le_bytes();
        [e0_lo, e0_hi, e1_lo, e1_hi, i0, i1, i2, i3]
    }

    /// Builds the palette the indices of this block refer to.
    #[inline]
    pub fn palette(&self) -> Bc1Palette {
        Bc1Palette::new(self.endpoints)
    }
}

impl From<&[u8; BC1_BLOCK_SIZE]> for Bc1Block {
    fn from(bytes: &[u8; BC1_BLOCK_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Bc1Block> for [u8; BC1_BLOCK_SIZE] {
    fn from(block: Bc1Block) -> Self {
        block.to_bytes()
    }
}

impl TryFrom<&[u8]> for Bc1Block {
    type Error = Bc1Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(bytes)
    }
}
