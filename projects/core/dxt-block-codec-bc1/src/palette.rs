//! The 4-colour palette of a BC1 block.
//!
//! The palette is derived from the two endpoints every time it is needed; it is never stored.
//! Both the encoder (to pick indices) and the decoder (to produce texels) build it the same
//! way, so a texel decodes to exactly the colour the encoder compared it against.

use crate::quantize::Bc1Endpoints;
use dxt_block_codec_common::color_8888::Color8888;

/// Number of colours in a BC1 palette.
pub const PALETTE_SIZE: usize = 4;

/// The expanded (8-bit per channel) colours available to the texels of one block.
///
/// | Index | Colour |
/// |---|---|
/// | 0 | Endpoint0 |
/// | 1 | Endpoint1 |
/// | 2 | `round((2 * Endpoint0 + Endpoint1) / 3)` |
/// | 3 | `round((Endpoint0 + 2 * Endpoint1) / 3)` |
///
/// The interpolated entries are computed per channel on the expanded endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bc1Palette {
    colors: [Color8888; PALETTE_SIZE],
}

impl Bc1Palette {
    /// Builds the palette for a pair of endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_bc1::{Bc1Endpoints, Bc1Palette};
    /// use dxt_block_codec_common::color_565::Color565;
    /// use dxt_block_codec_common::color_8888::Color8888;
    ///
    /// let endpoints = Bc1Endpoints::new(Color565::from_raw(0x0000), Color565::from_raw(0xFFFF));
    /// let palette = Bc1Palette::new(endpoints);
    /// assert_eq!(palette.color(2), Color8888::opaque(85, 85, 85));
    /// assert_eq!(palette.color(3), Color8888::opaque(170, 170, 170));
    /// ```
    pub fn new(endpoints: Bc1Endpoints) -> Self {
        let c0 = endpoints.endpoint0.to_color_8888();
        let c1 = endpoints.endpoint1.to_color_8888();

        Self {
            colors: [c0, c1, interpolate(c0, c1), interpolate(c1, c0)],
        }
    }

    /// All 4 palette colours, by index.
    #[inline]
    pub fn colors(&self) -> &[Color8888; PALETTE_SIZE] {
        &self.colors
    }

    /// The colour for a 2-bit index. Only the low two bits of `index` are used.
    #[inline]
    pub fn color(&self, index: u8) -> Color8888 {
        self.colors[(index & 0b11) as usize]
    }

    /// Finds the palette entry closest to `texel` by squared RGB distance.
    ///
    /// Returns the index and its squared distance. On equal distances the lowest index wins,
    /// which keeps the output reproducible (e.g. a block whose palette collapsed to a single
    /// colour encodes every texel as index 0).
    #[inline]
    pub fn nearest(&self, texel: &Color8888) -> (u8, u32) {
        let mut best_index = 0u8;
        let mut best_distance = texel.squared_distance(&self.colors[0]);

        for (index, color) in self.colors.iter().enumerate().skip(1) {
            let distance = texel.squared_distance(color);
            if distance < best_distance {
                best_index = index as u8;
                best_distance = distance;
            }
        }

        (best_index, best_distance)
    }
}

/// The colour one third of the way from `near` to `far`, rounded to nearest.
#[inline]
fn interpolate(near: Color8888, far: Color8888) -> Color8888 {
    Color8888::opaque(
        third(near.r, far.r),
        third(near.g, far.g),
        third(near.b, far.b),
    )
}

/// `round((2 * near + far) / 3)`. The remainder of a division by 3 is never a half,
/// so adding 1 before truncating rounds to nearest.
#[inline]
fn third(near: u8, far: u8) -> u8 {
    ((2 * near as u16 + far as u16 + 1) / 3) as u8
}
