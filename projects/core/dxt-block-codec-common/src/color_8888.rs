//! 8-bit-per-channel texel colour.

use crate::color_565::Color565;

/// Represents a single RGBA8888 texel of a 4x4 block.
///
/// The DXT1 codec only looks at the red, green and blue channels. Alpha is ignored when
/// encoding and set to 255 when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// Each parameter represents the intensity of its corresponding colour channel (0–255).
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a fully opaque [`Color8888`].
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns this colour with the alpha channel forced to fully opaque.
    #[inline]
    pub const fn without_alpha(&self) -> Self {
        Self::opaque(self.r, self.g, self.b)
    }

    /// Quantizes this colour to RGB565, discarding alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::color_8888::Color8888;
    ///
    /// let yellow = Color8888::opaque(255, 255, 0);
    /// assert_eq!(yellow.to_color_565().raw_value(), 0xFFE0);
    /// ```
    #[inline]
    pub const fn to_color_565(&self) -> Color565 {
        Color565::from_rgb(self.r, self.g, self.b)
    }

    /// Squared Euclidean distance between the RGB channels of two colours.
    /// Alpha does not participate.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::color_8888::Color8888;
    ///
    /// let a = Color8888::opaque(10, 20, 30);
    /// let b = Color8888::new(13, 16, 30, 0);
    /// assert_eq!(a.squared_distance(&b), 9 + 16);
    /// ```
    #[inline]
    pub const fn squared_distance(&self, other: &Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Returns the per-channel minimum of two colours (RGB only, alpha opaque).
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::opaque(
            self.r.min(other.r),
            self.g.min(other.g),
            self.b.min(other.b),
        )
    }

    /// Returns the per-channel maximum of two colours (RGB only, alpha opaque).
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::opaque(
            self.r.max(other.r),
            self.g.max(other.g),
            self.b.max(other.b),
        )
    }
}
