use crate::{
    foundation::{core::TileSize, core::TileSequence, error::SheetResult},
    text::{
        fit::FitPolicy,
        label::{LabelRenderer, TileStyle},
    },
};

/// Parameters of a run of numbered placeholder tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberedTiles {
    /// Size of every tile.
    pub tile: TileSize,
    /// Number of tiles; labels run from `1` to `count`.
    pub count: u32,
    /// Tile colors.
    pub style: TileStyle,
    /// Font size search parameters.
    pub fit: FitPolicy,
}

/// Render `params.count` tiles, each showing its 1-based index centered on a solid fill.
#[tracing::instrument(skip(params, renderer), fields(tile = %params.tile, count = params.count))]
pub fn render_numbered_tiles(
    params: &NumberedTiles,
    renderer: &mut LabelRenderer,
) -> SheetResult<TileSequence> {
    let mut tiles = TileSequence::with_capacity(params.count as usize);
    for index in 1..=params.count {
        let label = index.to_string();
        let tile = renderer.render_tile(&label, params.tile, params.style, &params.fit)?;
        tracing::debug!(
            label = %label,
            size = tile.fit.map(|f| f.size),
            x = tile.origin.0,
            y = tile.origin.1,
            "rendered tile"
        );
        tiles.push(tile.image);
    }
    Ok(tiles)
}

#[cfg(test)]
#[path = "../../tests/unit/source/synthetic.rs"]
mod tests;
