use crate::color_565::Color565;
use crate::color_8888::Color8888;
use crate::decoded_4x4_block::Decoded4x4Block;
use rstest::rstest;

#[test]
fn can_convert_color_8888_to_565() {
    let red_565 = Color8888::opaque(255, 0, 0).to_color_565();
    let green_565 = Color8888::opaque(0, 255, 0).to_color_565();
    let blue_565 = Color8888::opaque(0, 0, 255).to_color_565();

    assert_eq!(red_565.to_color_8888(), Color8888::opaque(255, 0, 0));
    assert_eq!(green_565.to_color_8888(), Color8888::opaque(0, 255, 0));
    assert_eq!(blue_565.to_color_8888(), Color8888::opaque(0, 0, 255));
}

#[test]
fn conversion_to_565_ignores_alpha() {
    let opaque = Color8888::new(120, 60, 200, 255);
    let transparent = Color8888::new(120, 60, 200, 0);
    assert_eq!(opaque.to_color_565(), transparent.to_color_565());
}

#[rstest]
#[case::red(Color8888::opaque(255, 0, 0))]
#[case::green(Color8888::opaque(0, 255, 0))]
#[case::blue(Color8888::opaque(0, 0, 255))]
#[case::black(Color8888::opaque(0, 0, 0))]
#[case::white(Color8888::opaque(255, 255, 255))]
#[case::gray(Color8888::opaque(132, 130, 132))]
#[case::yellow(Color8888::opaque(255, 255, 0))]
fn can_round_trip_8888_to_565(#[case] original: Color8888) {
    let round_trip = original.to_color_565().to_color_8888();
    assert_eq!(original, round_trip);
}

#[rstest]
#[case(Color8888::opaque(255, 255, 0), Color8888::opaque(222, 223, 0), 33 * 33 + 32 * 32)]
#[case(Color8888::opaque(0, 0, 0), Color8888::opaque(255, 255, 255), 3 * 255 * 255)]
#[case(Color8888::new(1, 2, 3, 0), Color8888::new(1, 2, 3, 255), 0)]
fn squared_distance_is_symmetric(#[case] a: Color8888, #[case] b: Color8888, #[case] expected: u32) {
    assert_eq!(a.squared_distance(&b), expected);
    assert_eq!(b.squared_distance(&a), expected);
}

#[test]
fn component_min_max_mix_channels() {
    let a = Color8888::new(10, 200, 30, 7);
    let b = Color8888::new(100, 20, 30, 9);
    assert_eq!(a.component_min(&b), Color8888::opaque(10, 20, 30));
    assert_eq!(a.component_max(&b), Color8888::opaque(100, 200, 30));
}

#[test]
fn block_is_raster_ordered() {
    let block = Decoded4x4Block::from_fn(|x, y| Color8888::opaque(x as u8, y as u8, 0));
    for (i, pixel) in block.pixels.iter().enumerate() {
        assert_eq!(pixel.r as usize, i % 4);
        assert_eq!(pixel.g as usize, i / 4);
    }
}

#[test]
fn raw_value_round_trips_through_u16() {
    let color = Color565::from(0x1234u16);
    assert_eq!(u16::from(color), 0x1234);
}
