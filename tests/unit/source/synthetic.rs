use super::*;
use crate::foundation::color::Rgba8;
use crate::source::font::{FontSource, ResolvedFont, default_font_paths, probe_font_paths};

fn numbered(count: u32) -> NumberedTiles {
    NumberedTiles {
        tile: TileSize::new(24, 16).unwrap(),
        count,
        style: TileStyle {
            background: Rgba8::rgb(200, 10, 10),
            text: Rgba8::WHITE,
        },
        fit: FitPolicy::default(),
    }
}

#[test]
fn renders_one_tile_per_index_with_shared_size() {
    let mut r = LabelRenderer::new(&ResolvedFont::Bitmap).unwrap();
    let tiles = render_numbered_tiles(&numbered(3), &mut r).unwrap();

    assert_eq!(tiles.len(), 3);
    for t in &tiles {
        assert_eq!(t.dimensions(), (24, 16));
        assert_eq!(t.get_pixel(0, 0).0, [200, 10, 10, 255]);
    }
    assert_ne!(tiles[0], tiles[1]);
    assert_ne!(tiles[1], tiles[2]);
}

#[test]
fn zero_count_yields_empty_sequence() {
    let mut r = LabelRenderer::new(&ResolvedFont::Bitmap).unwrap();
    assert!(render_numbered_tiles(&numbered(0), &mut r).unwrap().is_empty());
}

#[test]
fn multi_digit_labels_are_wider_than_single_digits() {
    let mut r = LabelRenderer::new(&ResolvedFont::Bitmap).unwrap();
    let tiles = render_numbered_tiles(&numbered(10), &mut r).unwrap();

    let ink_columns = |img: &image::RgbaImage| {
        (0..img.width())
            .filter(|&x| (0..img.height()).any(|y| img.get_pixel(x, y).0 == [255, 255, 255, 255]))
            .count()
    };
    assert!(ink_columns(&tiles[9]) > ink_columns(&tiles[0]));
}

#[test]
fn scalable_two_digit_tiles_show_separate_digits() {
    let Some(path) = probe_font_paths(&default_font_paths()) else {
        return;
    };
    let font = FontSource::File(path).resolve().unwrap();
    let mut r = LabelRenderer::new(&font).unwrap();
    let params = NumberedTiles {
        tile: TileSize::new(276, 315).unwrap(),
        count: 10,
        style: TileStyle::default(),
        fit: FitPolicy::default(),
    };
    let tiles = render_numbered_tiles(&params, &mut r).unwrap();

    let ink_runs = |img: &image::RgbaImage| {
        let inked: Vec<bool> = (0..img.width())
            .map(|x| (0..img.height()).any(|y| img.get_pixel(x, y).0[0] < 128))
            .collect();
        inked
            .iter()
            .enumerate()
            .filter(|&(i, &d)| d && (i == 0 || !inked[i - 1]))
            .count()
    };
    assert_eq!(ink_runs(&tiles[0]), 1);
    assert_eq!(ink_runs(&tiles[9]), 2);
}
