#![no_main]

// Encodes arbitrary texels with every setting and checks that decoding hands back, for each
// texel, a palette entry no further away than any other entry.

use dxt_block_codec_bc1::{decode_packed, encode_texels_with_settings, Bc1Block, Bc1EncodeSettings};
use dxt_block_codec_common::color_8888::Color8888;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct RawTexels {
    pub rgba: [[u8; 4]; 16],
}

fuzz_target!(|input: RawTexels| {
    let texels: [Color8888; 16] = core::array::from_fn(|i| {
        let [r, g, b, a] = input.rgba[i];
        Color8888::new(r, g, b, a)
    });

    for settings in Bc1EncodeSettings::all_combinations() {
        let packed = encode_texels_with_settings(&texels, settings);
        assert_eq!(
            packed,
            encode_texels_with_settings(&texels, settings),
            "Encoding must be deterministic"
        );

        let block = Bc1Block::from_bytes(&packed);
        assert!(
            block.endpoints.endpoint0 <= block.endpoints.endpoint1,
            "Endpoints must be stored lowest first"
        );

        let palette = block.palette();
        let decoded = decode_packed(&packed);
        for (original, decoded) in texels.iter().zip(decoded.pixels.iter()) {
            let best = palette
                .colors()
                .iter()
                .map(|color| original.squared_distance(color))
                .min()
                .unwrap();
            assert_eq!(original.squared_distance(decoded), best, "{settings:?}");
        }
    }
});
