use super::*;
use crate::foundation::core::{Color, GridSpec};
use crate::render::cpu::CpuRasterizer;
use crate::scene::primitive::{CellRect, Paint, Primitive};

#[test]
fn png_round_trip_preserves_rendered_pixels() {
    let mut r = CpuRasterizer::new(GridSpec::new(22, 2).unwrap()).unwrap();
    let mut canvas = r.new_canvas();
    r.stamp(
        &mut canvas,
        &Primitive::ellipse([4.5, 6.0, 17.5, 14.5], Paint::Outline(1.0)),
        Color::rgb(220, 190, 60),
    )
    .unwrap();
    r.stamp(
        &mut canvas,
        &Primitive::segment((1.0, 5.0), (4.0, 5.0), 0.5),
        Color::rgba(80, 200, 120, 140),
    )
    .unwrap();

    let bytes = encode_png(&canvas).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let back = decode_png(&bytes).unwrap();
    assert_eq!(back, canvas);
}

#[test]
fn encoded_png_keeps_size_and_straight_alpha() {
    let mut r = CpuRasterizer::new(GridSpec::new(18, 2).unwrap()).unwrap();
    let mut canvas = r.new_canvas();
    r.stamp(
        &mut canvas,
        &Primitive::FillRect(CellRect::cell(0, 0)),
        Color::rgba(255, 0, 0, 128),
    )
    .unwrap();

    let img = image::load_from_memory(&encode_png(&canvas).unwrap())
        .unwrap()
        .to_rgba8();
    assert_eq!(img.dimensions(), (36, 36));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(img.get_pixel(2, 0).0, [0, 0, 0, 0]);
}

#[test]
fn faint_fills_survive_encoding_byte_for_byte() {
    let mut r = CpuRasterizer::new(GridSpec::new(18, 2).unwrap()).unwrap();
    for color in [Color::rgba(100, 50, 200, 10), Color::rgba(37, 201, 99, 3)] {
        let mut canvas = r.new_canvas();
        r.stamp(
            &mut canvas,
            &Primitive::FillRect(CellRect::new(0, 0, 18, 18)),
            color,
        )
        .unwrap();

        let img = image::load_from_memory(&encode_png(&canvas).unwrap())
            .unwrap()
            .to_rgba8();
        let want = [color.r, color.g, color.b, color.a];
        assert!(img.pixels().all(|p| p.0 == want), "{color:?}");
    }
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_png(b"not a png").unwrap_err();
    assert!(err.to_string().starts_with("encode error:"));
}
