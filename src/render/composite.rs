use crate::foundation::{
    color::Rgba8,
    core::TileSize,
    error::{SheetError, SheetResult},
};

/// Paste `tiles` left to right onto a fresh `fill`-colored strip.
///
/// The tile size is taken from the first tile. Each tile overwrites the canvas at
/// `(index * tile_width, 0)` without blending; tiles of another size are clipped or leave fill
/// visible.
#[tracing::instrument(skip(tiles), fields(count = tiles.len()))]
pub fn compose_strip(tiles: &[image::RgbaImage], fill: Rgba8) -> SheetResult<image::RgbaImage> {
    let first = tiles.first().ok_or(SheetError::EmptySequence)?;
    let tile = TileSize::of(first);
    let sheet = tile.strip(tiles.len())?;

    let mut canvas = image::RgbaImage::from_pixel(sheet.width, sheet.height, fill.to_pixel());
    for (index, img) in tiles.iter().enumerate() {
        let size = TileSize::of(img);
        if size != tile {
            tracing::debug!(index, %size, expected = %tile, "tile size differs from first tile");
        }
        let x = index as i64 * i64::from(tile.width);
        image::imageops::replace(&mut canvas, img, x, 0);
    }
    Ok(canvas)
}

/// Copy of the `index`-th tile of a strip whose tiles are `tile_width` pixels wide.
pub fn tile_at(
    sheet: &image::RgbaImage,
    tile_width: u32,
    index: u32,
) -> SheetResult<image::RgbaImage> {
    if tile_width == 0 {
        return Err(SheetError::validation("tile width must be non-zero"));
    }
    let x = u64::from(index) * u64::from(tile_width);
    if x + u64::from(tile_width) > u64::from(sheet.width()) {
        return Err(SheetError::validation(format!(
            "tile {index} lies outside a {}px wide sheet",
            sheet.width()
        )));
    }
    Ok(image::imageops::crop_imm(sheet, x as u32, 0, tile_width, sheet.height()).to_image())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
