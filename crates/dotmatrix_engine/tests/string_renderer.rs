//! String renderer tests
//!
//! Tests glyph placement, markers, scaling and raster output.

use dotmatrix_engine::{
    raster::rasterize, render, render_to_rgba, Bounds, CharacterSet, Color, EngineError, Glyph, Marker, RenderOptions, Shape, StringRenderer,
    REPLACEMENT_CHARACTER,
};
use pretty_assertions::assert_eq;

fn glyph(rows: &[&str]) -> Glyph {
    Glyph::from_bitstrings(rows).unwrap()
}

fn create_test_charset() -> CharacterSet {
    let mut charset = CharacterSet::new();
    charset.insert('A', glyph(&["010", "111", "101"])).unwrap();
    charset.insert('B', glyph(&["110", "111", "110"])).unwrap();
    charset
}

fn rectangle_options(scale_factor: u32) -> RenderOptions {
    RenderOptions {
        scale_factor,
        marker: Marker::Rectangle,
        ..Default::default()
    }
}

#[test]
fn test_offsets_are_running_glyph_width() {
    let charset = create_test_charset();
    let placements = render(&charset, "AB", &rectangle_options(1)).unwrap();

    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0].offset, 0);
    assert_eq!(placements[1].offset, 3);
    assert_eq!(placements[1].glyph, Some('B'));
}

#[test]
fn test_offsets_follow_scale() {
    let charset = create_test_charset();
    let placements = render(&charset, "AB", &rectangle_options(2)).unwrap();

    assert_eq!(placements[0].offset, 0);
    assert_eq!(placements[1].offset, 6);
    // the shapes of A end where the shapes of B begin
    let a_right = placements[0].canvas.shapes.iter().map(|shape| shape.bounds().x1).max().unwrap();
    let b_left = placements[1].canvas.shapes.iter().map(|shape| shape.bounds().x0).min().unwrap();
    assert_eq!(placements[0].offset + a_right as usize, placements[1].offset + b_left as usize);
}

#[test]
fn test_one_rectangle_per_foreground_bit() {
    let charset = create_test_charset();
    let placements = render(&charset, "A", &rectangle_options(1)).unwrap();

    let expected = vec![
        Shape::Rectangle(Bounds::new(1, 0, 2, 1)),
        Shape::Rectangle(Bounds::new(0, 1, 1, 2)),
        Shape::Rectangle(Bounds::new(1, 1, 2, 2)),
        Shape::Rectangle(Bounds::new(2, 1, 3, 2)),
        Shape::Rectangle(Bounds::new(0, 2, 1, 3)),
        Shape::Rectangle(Bounds::new(2, 2, 3, 3)),
    ];
    assert_eq!(placements[0].canvas.shapes, expected);
}

#[test]
fn test_circle_is_default_marker() {
    let charset = create_test_charset();
    let placements = render(&charset, "A", &RenderOptions::default()).unwrap();

    assert!(placements[0].canvas.shapes.iter().all(|shape| matches!(shape, Shape::Ellipse(_))));
    assert_eq!(placements[0].canvas.shapes[0], Shape::Ellipse(Bounds::new(1, 0, 2, 1)));
}

#[test]
fn test_scaling_is_applied_to_all_shapes() {
    let charset = create_test_charset();
    let placements = render(&charset, "B", &rectangle_options(4)).unwrap();
    let shapes = &placements[0].canvas.shapes;

    assert_eq!(shapes[0], Shape::Rectangle(Bounds::new(0, 0, 4, 4)));
    assert_eq!(shapes[1], Shape::Rectangle(Bounds::new(4, 0, 8, 4)));
    // neighbouring cells share their edge after scaling
    assert_eq!(shapes[0].bounds().x1, shapes[1].bounds().x0);
}

#[test]
fn test_canvas_size() {
    let mut charset = CharacterSet::new();
    charset.insert('x', Glyph::new((12, 5).into())).unwrap();

    let placements = render(&charset, "x", &rectangle_options(3)).unwrap();
    assert_eq!(placements[0].canvas.width, (5 + 1) * 3);
    assert_eq!(placements[0].canvas.height, 12 * 3);

    let placements = render(&charset, "x", &rectangle_options(1)).unwrap();
    assert_eq!(placements[0].canvas.width, 6);
    assert_eq!(placements[0].canvas.height, 12);
}

#[test]
fn test_missing_char_without_replacement_is_blank() {
    let charset = create_test_charset();
    let placements = render(&charset, "AZB", &rectangle_options(1)).unwrap();

    assert!(placements[1].is_blank());
    assert!(placements[1].canvas.shapes.is_empty());
    assert_eq!(placements[1].canvas.width, 4);
    assert_eq!(placements[2].offset, 6);
}

#[test]
fn test_missing_char_uses_replacement_glyph() {
    let mut charset = create_test_charset();
    charset.insert(REPLACEMENT_CHARACTER, glyph(&["111", "101", "111"])).unwrap();

    let placements = render(&charset, "Z", &rectangle_options(1)).unwrap();

    assert_eq!(placements[0].ch, 'Z');
    assert_eq!(placements[0].glyph, Some(REPLACEMENT_CHARACTER));
    assert_eq!(placements[0].canvas.shapes.len(), 8);
}

#[test]
fn test_iterates_by_code_point() {
    let mut charset = create_test_charset();
    charset.insert('ő', glyph(&["101", "000", "010"])).unwrap();

    let placements = render(&charset, "őA", &rectangle_options(1)).unwrap();

    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0].glyph, Some('ő'));
    assert_eq!(placements[1].offset, 3);
}

#[test]
fn test_empty_charset_fails() {
    let charset = CharacterSet::new();
    assert!(matches!(render(&charset, "A", &RenderOptions::default()), Err(EngineError::EmptyCharset)));
}

#[test]
fn test_zero_scale_fails() {
    let charset = create_test_charset();
    assert!(matches!(StringRenderer::new(&charset, rectangle_options(0)), Err(EngineError::InvalidScaleFactor)));
}

#[test]
fn test_oversized_scale_fails() {
    let charset = create_test_charset();
    assert!(matches!(render(&charset, "A", &rectangle_options(1_000_000_000)), Err(EngineError::InvalidScaleFactor)));
    assert!(matches!(render(&charset, "A", &rectangle_options(3_000_000_000)), Err(EngineError::InvalidScaleFactor)));
    assert!(matches!(render(&charset, "A", &rectangle_options(u32::MAX)), Err(EngineError::InvalidScaleFactor)));
}

#[test]
fn test_empty_text() {
    let charset = create_test_charset();
    assert!(render(&charset, "", &RenderOptions::default()).unwrap().is_empty());
}

#[test]
fn test_rasterize_rectangles() {
    let charset = create_test_charset();
    let placements = render(&charset, "AB", &rectangle_options(1)).unwrap();
    let mask = rasterize(&placements);

    assert_eq!(mask.width, 7);
    assert_eq!(mask.height, 3);
    assert_eq!(mask.to_text('#', '.'), ".#.##..\n######.\n#.###..");
}

#[test]
fn test_rasterize_uses_placement_offsets() {
    let charset = create_test_charset();
    let placements = render(&charset, "AB", &rectangle_options(2)).unwrap();
    let mask = rasterize(&placements);

    assert_eq!(mask.width, 6 + 8);
    assert_eq!(mask.height, 6);
    let expected = [
        "..##..####....",
        "..##..####....",
        "############..",
        "############..",
        "##..######....",
        "##..######....",
    ];
    assert_eq!(mask.to_text('#', '.'), expected.join("\n"));
}

#[test]
fn test_rasterize_circles_scaled() {
    let mut charset = CharacterSet::new();
    charset.insert('o', glyph(&["1"])).unwrap();
    let options = RenderOptions {
        scale_factor: 4,
        ..Default::default()
    };
    let mask = rasterize(&render(&charset, "o", &options).unwrap());

    assert_eq!(mask.width, 8);
    assert_eq!(mask.height, 4);
    assert!(mask.get(1, 1));
    assert!(mask.get(2, 2));
    // corners of the cell lie outside the inscribed circle
    assert!(!mask.get(0, 0));
    assert!(!mask.get(3, 3));
    // padding column stays background
    assert!(!mask.get(5, 2));
}

#[test]
fn test_render_to_rgba_colors() {
    let mut charset = CharacterSet::new();
    charset.insert('i', glyph(&["1", "0"])).unwrap();
    let options = RenderOptions {
        foreground: Color::new(0, 0, 0xFF),
        background: Color::new(0xE0, 0xFF, 0xFF),
        scale_factor: 1,
        marker: Marker::Rectangle,
    };
    let placements = render(&charset, "i", &options).unwrap();
    let image = render_to_rgba(&placements, &options);

    assert_eq!((image.width, image.height), (2, 2));
    assert_eq!(image.pixels.len(), 2 * 2 * 4);
    assert_eq!(&image.pixels[0..4], &[0, 0, 0xFF, 0xFF]);
    assert_eq!(&image.pixels[4..8], &[0xE0, 0xFF, 0xFF, 0xFF]);
    assert_eq!(&image.pixels[8..12], &[0xE0, 0xFF, 0xFF, 0xFF]);
}
