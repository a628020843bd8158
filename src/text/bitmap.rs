use image::Pixel as _;

use crate::{foundation::color::Rgba8, text::fit::TextBBox};

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
const ADVANCE: u32 = GLYPH_W + 1;

// Rows top to bottom, bit 4 is the leftmost column.
const DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];
const MINUS: [u8; 7] = [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00];
const UNKNOWN: [u8; 7] = [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04];

/// Fixed-size 5x7 bitmap font used when no scalable font is available.
///
/// Covers decimal digits and `-`; any other character draws as `?`. Spaces advance without ink.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapFont;

impl BitmapFont {
    /// The built-in font.
    pub fn builtin() -> Self {
        Self
    }

    /// Advance box of `text`, anchored at the origin.
    pub fn measure(&self, text: &str) -> TextBBox {
        let n = text.chars().count() as u32;
        if n == 0 {
            return TextBBox::default();
        }
        TextBBox {
            left: 0,
            top: 0,
            right: (n * ADVANCE - 1) as i32,
            bottom: GLYPH_H as i32,
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`, clipping to the canvas.
    pub fn draw(&self, canvas: &mut image::RgbaImage, text: &str, x: i32, y: i32, color: Rgba8) {
        let (cw, ch) = canvas.dimensions();
        let px = color.to_pixel();
        for (i, c) in text.chars().enumerate() {
            let Some(rows) = glyph_rows(c) else {
                continue;
            };
            let gx = i64::from(x) + (i as i64) * i64::from(ADVANCE);
            for (row, bits) in rows.iter().enumerate() {
                let cy = i64::from(y) + row as i64;
                if cy < 0 || cy >= i64::from(ch) {
                    continue;
                }
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                        continue;
                    }
                    let cx = gx + i64::from(col);
                    if cx < 0 || cx >= i64::from(cw) {
                        continue;
                    }
                    canvas.get_pixel_mut(cx as u32, cy as u32).blend(&px);
                }
            }
        }
    }
}

fn glyph_rows(c: char) -> Option<&'static [u8; 7]> {
    match c {
        ' ' => None,
        '-' => Some(&MINUS),
        _ => match c.to_digit(10) {
            Some(d) => Some(&DIGITS[d as usize]),
            None => Some(&UNKNOWN),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/bitmap.rs"]
mod tests;
