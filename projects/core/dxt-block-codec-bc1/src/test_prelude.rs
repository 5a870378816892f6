//! Common test imports and utilities for BC1 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;

// Re-export commonly used alloc types for tests
pub use alloc::{format, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from the shared crate
pub use dxt_block_codec_common::color_565::Color565;
pub use dxt_block_codec_common::color_8888::Color8888;
pub use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;

// Crate API
pub use crate::*;

/// Colour of the even columns of the two-colour reference block.
pub const YELLOW: Color8888 = Color8888::opaque(255, 255, 0);

/// Colour of the odd columns of the two-colour reference block.
pub const DARK_YELLOW: Color8888 = Color8888::opaque(223, 223, 0);

/// Expected encoding of the two-colour reference block.
pub const TWO_COLOUR_REFERENCE_BLOCK: [u8; 8] = [0xE0, 0xDE, 0xE0, 0xFF, 0x11, 0x11, 0x11, 0x11];

/// A texel region of any size whose colours come from a function of the coordinates.
pub struct FakeImage {
    pub width: usize,
    pub height: usize,
    pub color: fn(usize, usize) -> Color8888,
}

impl FakeImage {
    /// An all-black region.
    pub fn black(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color: |_, _| Color8888::opaque(0, 0, 0),
        }
    }

    /// A 4x4 region alternating between two colours by column: even `x` gets `even`.
    pub fn two_colour(even: Color8888, odd: Color8888) -> TwoColourImage {
        TwoColourImage { even, odd }
    }
}

impl TexelSource for FakeImage {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn texel_at(&self, x: usize, y: usize) -> Color8888 {
        (self.color)(x, y)
    }
}

/// A 4x4 region alternating between two colours by column.
pub struct TwoColourImage {
    pub even: Color8888,
    pub odd: Color8888,
}

impl TexelSource for TwoColourImage {
    fn width(&self) -> usize {
        4
    }

    fn height(&self) -> usize {
        4
    }

    fn texel_at(&self, x: usize, _y: usize) -> Color8888 {
        if x % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// Every row is black, 85 gray, 170 gray, white.
pub fn gray_ramp_texels() -> [Color8888; 16] {
    core::array::from_fn(|i| {
        let level = (i % 4) as u8 * 85;
        Color8888::opaque(level, level, level)
    })
}

/// xorshift32; deterministic so failures reproduce.
pub fn next_random(seed: &mut u32) -> u32 {
    let mut x = *seed | 1;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *seed = x;
    x
}

/// 16 pseudo-random opaque texels.
pub fn random_texels(seed: &mut u32) -> [Color8888; 16] {
    core::array::from_fn(|_| {
        let [r, g, b, _] = next_random(seed).to_le_bytes();
        Color8888::opaque(r, g, b)
    })
}
