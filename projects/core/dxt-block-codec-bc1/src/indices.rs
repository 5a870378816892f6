//! The 2-bit palette indices of a BC1 block.
//!
//! Sixteen indices, one per texel in raster order, are stored in the last 4 bytes of a block.
//! Each byte holds the indices of 4 consecutive texels (so one byte per row). The order of
//! the 4 pairs inside a byte is [`INDEX_BIT_ORDER`].

use derive_enum_all_values::AllValues;
use dxt_block_codec_common::decoded_4x4_block::TEXELS_PER_BLOCK;

/// Placement of the 4 two-bit indices within each index byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum IndexBitOrder {
    /// The first texel of a row occupies bits 0-1, the last bits 6-7.
    LsbFirst,
    /// The first texel of a row occupies bits 6-7, the last bits 0-1.
    MsbFirst,
}

/// The bit order used by the encoder and decoder.
///
/// Pinned by the `two_colour_reference_block` tests.
pub const INDEX_BIT_ORDER: IndexBitOrder = IndexBitOrder::LsbFirst;

impl IndexBitOrder {
    /// Bit offset of the index of `texel` inside the little endian 32-bit index word.
    #[inline]
    const fn shift(self, texel: usize) -> u32 {
        let byte = (texel / 4) as u32;
        let slot = (texel % 4) as u32;
        match self {
            IndexBitOrder::LsbFirst => byte * 8 + slot * 2,
            IndexBitOrder::MsbFirst => byte * 8 + (3 - slot) * 2,
        }
    }
}

/// Packed 2-bit palette indices for the 16 texels of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bc1Indices {
    /// Index bytes as a little endian word; byte 0 holds the first row.
    value: u32,
}

impl Bc1Indices {
    /// Creates [`Bc1Indices`] from the 4 index bytes of a packed block.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self {
            value: u32::from_le_bytes(bytes),
        }
    }

    /// Returns the 4 index bytes, as written into a packed block.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.value.to_le_bytes()
    }

    /// Packs 16 raster-order indices (each 0-3) using [`INDEX_BIT_ORDER`].
    ///
    /// Only the low two bits of each index are kept.
    #[inline]
    pub fn pack(indices: &[u8; TEXELS_PER_BLOCK]) -> Self {
        Self::pack_with_order(indices, INDEX_BIT_ORDER)
    }

    /// Packs 16 raster-order indices (each 0-3) using the given bit order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_bc1::{Bc1Indices, IndexBitOrder};
    ///
    /// let row = [1, 0, 1, 0];
    /// let indices: [u8; 16] = core::array::from_fn(|i| row[i % 4]);
    ///
    /// let lsb = Bc1Indices::pack_with_order(&indices, IndexBitOrder::LsbFirst);
    /// assert_eq!(lsb.to_le_bytes(), [0x11; 4]);
    ///
    /// let msb = Bc1Indices::pack_with_order(&indices, IndexBitOrder::MsbFirst);
    /// assert_eq!(msb.to_le_bytes(), [0x44; 4]);
    /// ```
    pub fn pack_with_order(indices: &[u8; TEXELS_PER_BLOCK], order: IndexBitOrder) -> Self {
        let value = indices
            .iter()
            .enumerate()
            .fold(0u32, |acc, (texel, &index)| {
                debug_assert!(index < 4, "palette index {index} out of range");
                acc | (((index & 0b11) as u32) << order.shift(texel))
            });

        Self { value }
    }

    /// Unpacks the 16 raster-order indices using [`INDEX_BIT_ORDER`].
    #[inline]
    pub fn unpack(self) -> [u8; TEXELS_PER_BLOCK] {
        self.unpack_with_order(INDEX_BIT_ORDER)
    }

    /// Unpacks the 16 raster-order indices using the given bit order.
    pub fn unpack_with_order(self, order: IndexBitOrder) -> [u8; TEXELS_PER_BLOCK] {
        core::array::from_fn(|texel| self.get_with_order(texel, order))
    }

    /// Returns the index of a single texel (0-15, raster order) using [`INDEX_BIT_ORDER`].
    ///
    /// # Panics
    ///
    /// In debug builds, if `texel >= 16`.
    #[inline]
    pub fn get(self, texel: usize) -> u8 {
        self.get_with_order(texel, INDEX_BIT_ORDER)
    }

    #[inline]
    fn get_with_order(self, texel: usize, order: IndexBitOrder) -> u8 {
        debug_assert!(texel < TEXELS_PER_BLOCK);
        ((self.value >> order.shift(texel)) & 0b11) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn counting_indices() -> [u8; 16] {
        core::array::from_fn(|i| (i % 4) as u8)
    }

    #[test]
    fn two_colour_reference_block_uses_lsb_first() {
        // Even columns map to palette slot 1, odd columns to slot 0.
        let indices: [u8; 16] = core::array::from_fn(|i| if i % 2 == 0 { 1 } else { 0 });
        let packed = Bc1Indices::pack(&indices);
        assert_eq!(INDEX_BIT_ORDER, IndexBitOrder::LsbFirst);
        assert_eq!(packed.to_le_bytes(), [0x11, 0x11, 0x11, 0x11]);
    }

    #[rstest]
    #[case::lsb_first(IndexBitOrder::LsbFirst, [0xE4; 4])]
    #[case::msb_first(IndexBitOrder::MsbFirst, [0x1B; 4])]
    fn pack_places_each_row_in_one_byte(#[case] order: IndexBitOrder, #[case] expected: [u8; 4]) {
        let packed = Bc1Indices::pack_with_order(&counting_indices(), order);
        assert_eq!(packed.to_le_bytes(), expected);
    }

    #[test]
    fn rows_map_to_consecutive_bytes() {
        let mut indices = [0u8; 16];
        indices[4] = 3; // first texel of the second row
        indices[15] = 2; // last texel of the last row
        let packed = Bc1Indices::pack(&indices);
        assert_eq!(packed.to_le_bytes(), [0x00, 0x03, 0x00, 0x80]);
    }

    #[test]
    fn unpack_inverts_pack_for_every_order() {
        let indices: [u8; 16] = [3, 1, 0, 2, 2, 2, 1, 0, 0, 3, 3, 1, 1, 0, 2, 3];
        for order in IndexBitOrder::all_values().iter() {
            let packed = Bc1Indices::pack_with_order(&indices, *order);
            assert_eq!(packed.unpack_with_order(*order), indices, "{order:?}");
        }
    }

    #[test]
    fn get_reads_single_texels() {
        let indices = Bc1Indices::from_le_bytes([0xE4, 0x00, 0xFF, 0x1B]);
        assert_eq!(indices.get(0), 0);
        assert_eq!(indices.get(3), 3);
        assert_eq!(indices.get(5), 0);
        assert_eq!(indices.get(10), 3);
        assert_eq!(indices.get(12), 3);
        assert_eq!(indices.get(15), 0);
    }
}
