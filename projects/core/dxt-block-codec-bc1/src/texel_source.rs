//! Random-access texel lookup over a rectangular region.
//!
//! The encoder does not know about images. Whatever tiles an image into blocks hands the
//! encoder something implementing [`TexelSource`], and the encoder checks that the region
//! it describes is exactly 4x4 before reading it.

use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::{Decoded4x4Block, BLOCK_DIMENSION};

/// A rectangular region of texels with random access.
pub trait TexelSource {
    /// Width of the region, in texels.
    fn width(&self) -> usize;

    /// Height of the region, in texels.
    fn height(&self) -> usize;

    /// Returns the texel at `(x, y)`, relative to the top-left corner of the region.
    ///
    /// Only called with `x < width()` and `y < height()`.
    fn texel_at(&self, x: usize, y: usize) -> Color8888;
}

impl TexelSource for Decoded4x4Block {
    #[inline]
    fn width(&self) -> usize {
        BLOCK_DIMENSION
    }

    #[inline]
    fn height(&self) -> usize {
        BLOCK_DIMENSION
    }

    #[inline]
    fn texel_at(&self, x: usize, y: usize) -> Color8888 {
        self.pixels[y * BLOCK_DIMENSION + x]
    }
}

impl<T: TexelSource + ?Sized> TexelSource for &T {
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }

    #[inline]
    fn texel_at(&self, x: usize, y: usize) -> Color8888 {
        (**self).texel_at(x, y)
    }
}

/// A row-major view over a slice of texels.
///
/// # Examples
///
/// ```
/// use dxt_block_codec_bc1::{TexelRegion, TexelSource};
/// use dxt_block_codec_common::color_8888::Color8888;
///
/// let texels = [Color8888::opaque(1, 2, 3); 6];
/// let region = TexelRegion::new(&texels, 3, 2).unwrap();
/// assert_eq!(region.width(), 3);
/// assert_eq!(region.height(), 2);
/// assert!(TexelRegion::new(&texels, 4, 2).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexelRegion<'a> {
    texels: &'a [Color8888],
    width: usize,
    height: usize,
}

impl<'a> TexelRegion<'a> {
    /// Creates a view of `width` x `height` texels over `texels`.
    ///
    /// Returns [`None`] if the slice does not hold exactly `width * height` texels.
    pub fn new(texels: &'a [Color8888], width: usize, height: usize) -> Option<Self> {
        if width.checked_mul(height)? != texels.len() {
            return None;
        }

        Some(Self {
            texels,
            width,
            height,
        })
    }
}

impl TexelSource for TexelRegion<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn texel_at(&self, x: usize, y: usize) -> Color8888 {
        self.texels[y * self.width + x]
    }
}
