//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure, the 16 texels that make up one
//! DXT1 block: the input of the encoder and the output of the decoder.
//!
//! ## Usage
//!
//! ```
//! use dxt_block_codec_common::color_8888::Color8888;
//! use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
//!
//! // Create a block filled with red pixels
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//! assert_eq!(block.pixels[15], red_pixel);
//! ```
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major (raster) order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::color_8888::Color8888;

/// Width and height of a block, in texels.
pub const BLOCK_DIMENSION: usize = 4;

/// Number of texels in a block.
pub const TEXELS_PER_BLOCK: usize = BLOCK_DIMENSION * BLOCK_DIMENSION;

/// Represents a decoded 4x4 block of texels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; TEXELS_PER_BLOCK],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::color_8888::Color8888;
    /// use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Decoded4x4Block::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; TEXELS_PER_BLOCK],
        }
    }

    /// Constructs a block from 16 texels in raster order.
    pub const fn from_pixels(pixels: [Color8888; TEXELS_PER_BLOCK]) -> Self {
        Self { pixels }
    }

    /// Builds a block by evaluating `f(x, y)` for every texel position.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::color_8888::Color8888;
    /// use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let block = Decoded4x4Block::from_fn(|x, y| Color8888::opaque(x as u8, y as u8, 0));
    /// assert_eq!(block.pixels[7], Color8888::opaque(3, 1, 0));
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Color8888) -> Self {
        Self {
            pixels: core::array::from_fn(|i| f(i % BLOCK_DIMENSION, i / BLOCK_DIMENSION)),
        }
    }
}

impl From<[Color8888; TEXELS_PER_BLOCK]> for Decoded4x4Block {
    fn from(pixels: [Color8888; TEXELS_PER_BLOCK]) -> Self {
        Self::from_pixels(pixels)
    }
}
