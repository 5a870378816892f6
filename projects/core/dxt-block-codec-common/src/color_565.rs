//! # RGB565 Color Format Support
//!
//! This module provides the [`Color565`] type, the reduced-precision colour stored in the
//! endpoints of a DXT1 block.
//!
//! ## Overview
//!
//! RGB565 is a 16-bit color format that packs red, green, and blue color components
//! into a single 16-bit value:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! The green component gets an extra bit because the human eye is more sensitive
//! to green light.
//!
//! ## Quantization and Expansion
//!
//! Quantizing from 8 bits per channel truncates, i.e. keeps the top 5 or 6 bits of each
//! channel (`value >> (8 - bits)`). Expanding back to 8 bits replicates the top bits into
//! the vacated low bits, following the D3D11 functional specification. A channel that was
//! produced by expansion therefore quantizes back to exactly the same value.
//!
//! ## Examples
//!
//! ```rust
//! use dxt_block_codec_common::color_565::Color565;
//!
//! // Create from raw 16-bit value
//! let color = Color565::from_raw(0xF800); // Pure red
//! assert_eq!(color.red(), 255);
//! assert_eq!(color.green(), 0);
//! assert_eq!(color.blue(), 0);
//!
//! // Quantize an 8-bit colour
//! let yellow = Color565::from_rgb(255, 255, 0);
//! assert_eq!(yellow.raw_value(), 0xFFE0);
//! ```
//!
//! ## Additional Reading
//!
//! - [GPU BCn Decoding by Fabian Giesen](https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/)

use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// as stored in the endpoints of a DXT1 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate RGB components by truncating
    /// each channel to its stored bit width.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Creates a new [`Color565`] from little endian bytes, as found in a packed block.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// Returns the little endian byte representation, as written into a packed block.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.value.to_le_bytes()
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Extracts the expanded 8-bit red component (0-255)
    ///
    /// The 5-bit value is expanded as `(value << 3) | (value >> 2)`.
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component (0-255)
    ///
    /// The 6-bit value is expanded as `(value << 2) | (value >> 4)`.
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component (0-255)
    ///
    /// The 5-bit value is expanded as `(value << 3) | (value >> 2)`.
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Note on Precision
    ///
    /// The conversion expands the color channels using bit replication; the result is the
    /// colour a decoder reconstructs for this endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::color_565::Color565;
    ///
    /// let rgb565 = Color565::from_rgb(223, 223, 0);
    /// let rgba8888 = rgb565.to_color_8888();
    /// assert_eq!(rgba8888.r, 222);
    /// assert_eq!(rgba8888.g, 223);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }
}

impl From<u16> for Color565 {
    fn from(value: u16) -> Self {
        Self::from_raw(value)
    }
}

impl From<Color565> for u16 {
    fn from(color: Color565) -> Self {
        color.raw_value()
    }
}
