//! Endpoint selection: reduces the 16 texels of a block to two RGB565 endpoints.
//!
//! Two strategies are available through [`EndpointFit`]:
//!
//! - [`EndpointFit::PairSearch`] tries every pair of distinct quantized texel colours and
//!   keeps the pair whose palette approximates the block with the least squared error.
//!   This is the default. The endpoints are always colours of the block, so a decoded block
//!   still contains them and re-encoding it finds the same pair again.
//! - [`EndpointFit::BoundingBox`] takes the per-channel minimum and maximum of the block.
//!   It is cheap, but the box of a decoded block is usually smaller than the original one,
//!   so re-encoding decoded output drifts.
//!
//! Whichever strategy is used, the endpoint with the lower raw RGB565 value is stored first.
//! Decoders of this format always use the 4-colour palette, so the order carries no
//! transparency meaning.

use crate::palette::Bc1Palette;
use derive_enum_all_values::AllValues;
use dxt_block_codec_common::color_565::Color565;
use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::TEXELS_PER_BLOCK;

/// Strategy used to choose the two endpoints of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum EndpointFit {
    /// Exhaustive search over pairs of distinct quantized texel colours, minimising the
    /// total squared error of the resulting palette. Up to 120 pairs per block.
    #[default]
    PairSearch,

    /// Per-channel minimum and maximum colour of the block, quantized by truncation.
    BoundingBox,
}

/// The two RGB565 endpoints of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bc1Endpoints {
    /// First stored endpoint; palette index 0.
    pub endpoint0: Color565,
    /// Second stored endpoint; palette index 1.
    pub endpoint1: Color565,
}

impl Bc1Endpoints {
    /// Creates endpoints in the given storage order.
    #[inline]
    pub const fn new(endpoint0: Color565, endpoint1: Color565) -> Self {
        Self {
            endpoint0,
            endpoint1,
        }
    }

    /// Creates endpoints with the lower raw value stored first.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_bc1::Bc1Endpoints;
    /// use dxt_block_codec_common::color_565::Color565;
    ///
    /// let endpoints = Bc1Endpoints::ordered(Color565::from_raw(0xFFE0), Color565::from_raw(0xDEE0));
    /// assert_eq!(endpoints.endpoint0.raw_value(), 0xDEE0);
    /// assert_eq!(endpoints.endpoint1.raw_value(), 0xFFE0);
    /// ```
    #[inline]
    pub fn ordered(a: Color565, b: Color565) -> Self {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Returns `true` if both endpoints are the same colour, i.e. the palette has a single
    /// distinct entry.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.endpoint0 == self.endpoint1
    }
}

/// Chooses the endpoints for a block of 16 texels.
///
/// Pure function of its inputs; alpha is ignored.
///
/// # Examples
///
/// ```
/// use dxt_block_codec_bc1::{select_endpoints, EndpointFit};
/// use dxt_block_codec_common::color_8888::Color8888;
///
/// let texels: [Color8888; 16] = core::array::from_fn(|i| {
///     if i % 2 == 0 { Color8888::opaque(255, 255, 0) } else { Color8888::opaque(223, 223, 0) }
/// });
/// let endpoints = select_endpoints(&texels, EndpointFit::BoundingBox);
/// assert_eq!(endpoints.endpoint0.raw_value(), 0xDEE0);
/// assert_eq!(endpoints.endpoint1.raw_value(), 0xFFE0);
/// ```
pub fn select_endpoints(texels: &[Color8888; TEXELS_PER_BLOCK], fit: EndpointFit) -> Bc1Endpoints {
    match fit {
        EndpointFit::BoundingBox => bounding_box(texels),
        EndpointFit::PairSearch => pair_search(texels),
    }
}

fn bounding_box(texels: &[Color8888; TEXELS_PER_BLOCK]) -> Bc1Endpoints {
    let first = texels[0].without_alpha();
    let (min, max) = texels[1..]
        .iter()
        .fold((first, first), |(min, max), texel| {
            (min.component_min(texel), max.component_max(texel))
        });

    // Truncation is monotonic per channel, so the quantized minimum never has the larger raw value.
    Bc1Endpoints::ordered(min.to_color_565(), max.to_color_565())
}

fn pair_search(texels: &[Color8888; TEXELS_PER_BLOCK]) -> Bc1Endpoints {
    let mut unique = [Color565::default(); TEXELS_PER_BLOCK];
    let mut unique_count = 0;
    for texel in texels {
        let color = texel.to_color_565();
        if !unique[..unique_count].contains(&color) {
            unique[unique_count] = color;
            unique_count += 1;
        }
    }
    let unique = &unique[..unique_count];

    if let [only] = unique {
        return Bc1Endpoints::new(*only, *only);
    }

    let mut best = Bc1Endpoints::ordered(unique[0], unique[1]);
    let mut best_error = u32::MAX;
    for (i, &a) in unique.iter().enumerate() {
        for &b in &unique[i + 1..] {
            let candidate = Bc1Endpoints::ordered(a, b);
            let error = palette_error(texels, candidate, best_error);
            if error < best_error {
                best = candidate;
                best_error = error;
            }
        }
    }

    best
}

/// Total squared error of approximating `texels` with the palette of `endpoints`.
/// Stops summing once the error reaches `limit`, since the candidate can no longer win.
fn palette_error(texels: &[Color8888; TEXELS_PER_BLOCK], endpoints: Bc1Endpoints, limit: u32) -> u32 {
    let palette = Bc1Palette::new(endpoints);
    let mut error = 0u32;
    for texel in texels {
        error += palette.nearest(texel).1;
        if error >= limit {
            break;
        }
    }
    error
}
