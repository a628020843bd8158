use super::*;

fn ink_count(img: &image::RgbaImage, ink: [u8; 4]) -> usize {
    img.pixels().filter(|p| p.0 == ink).count()
}

#[test]
fn measure_is_anchored_at_origin() {
    let font = BitmapFont::builtin();
    assert_eq!(font.measure(""), TextBBox::default());
    assert_eq!(
        font.measure("8"),
        TextBBox {
            left: 0,
            top: 0,
            right: 5,
            bottom: 7
        }
    );
    assert_eq!(font.measure("12").width(), 11);
}

#[test]
fn draws_digit_pixels_in_color() {
    let font = BitmapFont::builtin();
    let mut img = image::RgbaImage::from_pixel(7, 9, image::Rgba([255, 255, 255, 255]));
    font.draw(&mut img, "1", 1, 1, Rgba8::BLACK);

    // The "1" glyph has 10 lit cells.
    assert_eq!(ink_count(&img, [0, 0, 0, 255]), 10);
    // Stem is column 2 of the glyph.
    assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0, 255]);
    // Outside the glyph box stays background.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn draw_clips_at_canvas_edges() {
    let font = BitmapFont::builtin();
    let mut img = image::RgbaImage::from_pixel(3, 3, image::Rgba([255, 255, 255, 255]));
    font.draw(&mut img, "888", -2, -2, Rgba8::BLACK);
    assert!(ink_count(&img, [0, 0, 0, 255]) > 0);
}

#[test]
fn unknown_characters_draw_a_placeholder() {
    let font = BitmapFont::builtin();
    let mut a = image::RgbaImage::from_pixel(5, 7, image::Rgba([0, 0, 0, 0]));
    let mut b = a.clone();
    font.draw(&mut a, "x", 0, 0, Rgba8::WHITE);
    font.draw(&mut b, "?", 0, 0, Rgba8::WHITE);
    assert_eq!(a, b);
    assert!(ink_count(&a, [255, 255, 255, 255]) > 0);
}
