//! BC1 block encoding.
//!
//! Encoding a block happens in three steps:
//!
//! 1. Choose two endpoints ([`crate::quantize`]).
//! 2. Build the 4-colour palette from them and give every texel the index of its nearest
//!    palette entry ([`crate::palette`]).
//! 3. Serialize endpoints and indices into 8 bytes ([`crate::block`]).
//!
//! The result depends only on the texels and the [`Bc1EncodeSettings`]; encoding the same
//! input twice yields the same bytes.

use crate::block::{Bc1Block, BC1_BLOCK_SIZE};
use crate::error::Bc1Error;
use crate::indices::Bc1Indices;
use crate::palette::Bc1Palette;
use crate::quantize::select_endpoints;
use crate::settings::Bc1EncodeSettings;
use crate::texel_source::TexelSource;
use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::{BLOCK_DIMENSION, TEXELS_PER_BLOCK};
use likely_stable::unlikely;

/// Encodes a 4x4 texel region into a packed BC1 block using default settings.
///
/// # Parameters
///
/// - `source`: The texels to encode. Must describe a region of exactly 4x4 texels.
///
/// # Errors
///
/// [`Bc1Error::InvalidBlockSize`] if the region is not 4x4.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc1::{encode_block, Bc1Error, TexelRegion};
/// use dxt_block_codec_common::color_8888::Color8888;
///
/// let texels = [Color8888::opaque(0, 0, 0); 16];
/// let region = TexelRegion::new(&texels, 4, 4).unwrap();
/// assert_eq!(encode_block(&region), Ok([0u8; 8]));
///
/// let region = TexelRegion::new(&texels, 8, 2).unwrap();
/// assert_eq!(
///     encode_block(&region),
///     Err(Bc1Error::InvalidBlockSize { width: 8, height: 2 })
/// );
/// ```
#[inline]
pub fn encode_block<S: TexelSource + ?Sized>(source: &S) -> Result<[u8; BC1_BLOCK_SIZE], Bc1Error> {
    encode_block_with_settings(source, Bc1EncodeSettings::default())
}

/// Encodes a 4x4 texel region into a packed BC1 block.
///
/// # Parameters
///
/// - `source`: The texels to encode. Must describe a region of exactly 4x4 texels.
/// - `settings`: Encoder options.
///
/// # Errors
///
/// [`Bc1Error::InvalidBlockSize`] if the region is not 4x4.
pub fn encode_block_with_settings<S: TexelSource + ?Sized>(
    source: &S,
    settings: Bc1EncodeSettings,
) -> Result<[u8; BC1_BLOCK_SIZE], Bc1Error> {
    let texels = read_texels(source)?;
    Ok(encode_texels_with_settings(&texels, settings))
}

/// Encodes 16 raster-order texels into a packed BC1 block using default settings.
///
/// The texel count is fixed by the type, so this cannot fail.
#[inline]
pub fn encode_texels(texels: &[Color8888; TEXELS_PER_BLOCK]) -> [u8; BC1_BLOCK_SIZE] {
    encode_texels_with_settings(texels, Bc1EncodeSettings::default())
}

/// Encodes 16 raster-order texels into a packed BC1 block.
pub fn encode_texels_with_settings(
    texels: &[Color8888; TEXELS_PER_BLOCK],
    settings: Bc1EncodeSettings,
) -> [u8; BC1_BLOCK_SIZE] {
    compress_block(texels, settings).to_bytes()
}

/// Encodes a flat slice of 16 raster-order texels using default settings.
///
/// # Errors
///
/// [`Bc1Error::InvalidBlockSize`] if `texels` does not hold exactly 16 texels. A slice has
/// no shape of its own, so it is reported as a single row of `texels.len()` texels.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc1::{encode_texel_slice, Bc1Error};
/// use dxt_block_codec_common::color_8888::Color8888;
///
/// let texels = vec![Color8888::opaque(0, 0, 0); 17];
/// assert_eq!(
///     encode_texel_slice(&texels),
///     Err(Bc1Error::InvalidBlockSize { width: 17, height: 1 })
/// );
/// assert_eq!(encode_texel_slice(&texels[..16]), Ok([0u8; 8]));
/// ```
#[inline]
pub fn encode_texel_slice(texels: &[Color8888]) -> Result<[u8; BC1_BLOCK_SIZE], Bc1Error> {
    encode_texel_slice_with_settings(texels, Bc1EncodeSettings::default())
}

/// Encodes a flat slice of 16 raster-order texels.
///
/// # Errors
///
/// [`Bc1Error::InvalidBlockSize`] if `texels` does not hold exactly 16 texels.
pub fn encode_texel_slice_with_settings(
    texels: &[Color8888],
    settings: Bc1EncodeSettings,
) -> Result<[u8; BC1_BLOCK_SIZE], Bc1Error> {
    let texels: &[Color8888; TEXELS_PER_BLOCK] = texels.try_into().map_err(|_| {
        log::debug!("rejected slice of {} texels; blocks are 16 texels", texels.len());
        Bc1Error::InvalidBlockSize {
            width: texels.len(),
            height: 1,
        }
    })?;

    Ok(encode_texels_with_settings(texels, settings))
}

/// Chooses endpoints and indices for a block.
pub(crate) fn compress_block(
    texels: &[Color8888; TEXELS_PER_BLOCK],
    settings: Bc1EncodeSettings,
) -> Bc1Block {
    let endpoints = select_endpoints(texels, settings.endpoint_fit);

    // A single-colour palette; every texel takes index 0.
    if endpoints.is_degenerate() {
        log::trace!(
            "encoded uniform block: endpoint {:#06x}",
            endpoints.endpoint0.raw_value()
        );
        return Bc1Block {
            endpoints,
            indices: Bc1Indices::default(),
        };
    }

    let palette = Bc1Palette::new(endpoints);
    let indices: [u8; TEXELS_PER_BLOCK] = core::array::from_fn(|i| palette.nearest(&texels[i]).0);

    log::trace!(
        "encoded block with {:?}: endpoints {:#06x}/{:#06x}",
        settings.endpoint_fit,
        endpoints.endpoint0.raw_value(),
        endpoints.endpoint1.raw_value()
    );

    Bc1Block {
        endpoints,
        indices: Bc1Indices::pack(&indices),
    }
}

/// Validates the region and copies its texels out in raster order.
fn read_texels<S: TexelSource + ?Sized>(source: &S) -> Result<[Color8888; TEXELS_PER_BLOCK], Bc1Error> {
    let (width, height) = (source.width(), source.height());
    if unlikely(width != BLOCK_DIMENSION || height != BLOCK_DIMENSION) {
        log::debug!("rejected {width}x{height} texel region; blocks are 4x4");
        return Err(Bc1Error::InvalidBlockSize { width, height });
    }

    Ok(core::array::from_fn(|i| {
        source.texel_at(i % BLOCK_DIMENSION, i / BLOCK_DIMENSION)
    }))
}
