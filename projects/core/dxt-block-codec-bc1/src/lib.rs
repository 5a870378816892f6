#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod block;
pub mod decode;
pub mod encode;
pub mod error;
pub mod indices;
pub mod palette;
pub mod quantize;
pub mod settings;
pub mod texel_source;

// Re-export main functionality at crate root
pub use block::{Bc1Block, BC1_BLOCK_SIZE};
pub use decode::{decode_block, decode_packed};
pub use encode::{
    encode_block, encode_block_with_settings, encode_texel_slice, encode_texel_slice_with_settings,
    encode_texels, encode_texels_with_settings,
};
pub use error::Bc1Error;
pub use indices::{Bc1Indices, IndexBitOrder};
pub use palette::Bc1Palette;
pub use quantize::{select_endpoints, Bc1Endpoints, EndpointFit};
pub use settings::Bc1EncodeSettings;
pub use texel_source::{TexelRegion, TexelSource};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
