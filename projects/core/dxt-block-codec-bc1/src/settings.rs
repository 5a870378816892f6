//! BC1 Encode Settings
//!
//! This module contains the configuration passed to the encoder. Settings are plain values
//! handed to each call; the codec has no global configuration.

use crate::quantize::EndpointFit;

/// Options controlling how [`crate::encode_block_with_settings`] compresses a block.
///
/// The decoder needs none of these: every setting produces blocks in the same format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bc1EncodeSettings {
    /// How the two endpoints are chosen.
    pub endpoint_fit: EndpointFit,
}

impl Bc1EncodeSettings {
    /// Returns an iterator over all possible combinations of [`Bc1EncodeSettings`] values.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_bc1::{Bc1EncodeSettings, EndpointFit};
    ///
    /// let all_combinations: Vec<_> = Bc1EncodeSettings::all_combinations().collect();
    /// assert_eq!(all_combinations.len(), EndpointFit::all_values().len());
    /// ```
    pub fn all_combinations() -> impl Iterator<Item = Bc1EncodeSettings> {
        EndpointFit::all_values()
            .iter()
            .map(|endpoint_fit| Bc1EncodeSettings {
                endpoint_fit: *endpoint_fit,
            })
    }

    /// Sets the endpoint fit.
    pub fn with_endpoint_fit(mut self, endpoint_fit: EndpointFit) -> Self {
        self.endpoint_fit = endpoint_fit;
        self
    }
}

impl From<EndpointFit> for Bc1EncodeSettings {
    fn from(endpoint_fit: EndpointFit) -> Self {
        Self { endpoint_fit }
    }
}
