#![no_main]

// Every texel of any 8 byte block must decode to an opaque entry of that block's palette.

use dxt_block_codec_bc1::{decode_block, decode_packed, Bc1Block};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct PackedBlock {
    pub bytes: [u8; 8],
}

fuzz_target!(|packed: PackedBlock| {
    let decoded = decode_packed(&packed.bytes);
    assert_eq!(Ok(decoded), decode_block(&packed.bytes));

    let block = Bc1Block::from_bytes(&packed.bytes);
    assert_eq!(block.to_bytes(), packed.bytes, "Parsing must not lose bits");

    let palette = block.palette();
    for (i, pixel) in decoded.pixels.iter().enumerate() {
        assert_eq!(pixel.a, 255, "Texel {i} is not opaque");
        assert_eq!(*pixel, palette.color(block.indices.get(i)), "Texel {i}");
    }
});
