use std::path::{Path, PathBuf};

use crate::{
    config::{NumberedSheetConfig, SHEET_FILE_NAME},
    foundation::{color::Rgba8, core::TileSize, error::SheetResult},
    render::{
        composite::compose_strip,
        png::{PngColor, write_png},
    },
    source::{
        directory::{DEFAULT_EXTENSION, decode_files, list_image_files},
        font::FontSource,
        synthetic::render_numbered_tiles,
    },
    text::label::LabelRenderer,
};

/// What was written by a pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetSummary {
    /// Output file.
    pub path: PathBuf,
    /// Number of tiles in the strip.
    pub tiles: usize,
    /// Size of one tile (taken from the first tile).
    pub tile: TileSize,
    /// Sheet width in pixels.
    pub width: u32,
    /// Sheet height in pixels.
    pub height: u32,
}

/// Options of a directory-mode run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryOpts {
    /// Directory holding the tiles.
    pub dir: PathBuf,
    /// File extension to match, without the dot.
    pub extension: String,
    /// Output path; defaults to `<dir>/sprite_sheet.png`.
    pub output: Option<PathBuf>,
    /// Canvas fill behind the tiles.
    pub fill: Rgba8,
}

impl DirectoryOpts {
    /// Defaults for `dir`: `.png` tiles on a transparent canvas, written next to the tiles.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            output: None,
            fill: Rgba8::TRANSPARENT,
        }
    }

    /// Where the sheet is written.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.dir.join(SHEET_FILE_NAME))
    }
}

/// Outcome of [`build_from_directory`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryOutcome {
    /// No matching files; nothing was written.
    NoImages,
    /// The sheet was written.
    Written(SheetSummary),
}

/// Load the matching images of `opts.dir` and write them as one strip.
///
/// The output file itself is never treated as an input tile, so repeated runs over the same
/// directory produce the same sheet.
#[tracing::instrument(skip(opts), fields(dir = %opts.dir.display()))]
pub fn build_from_directory(opts: &DirectoryOpts) -> SheetResult<DirectoryOutcome> {
    let output = opts.output_path();
    let mut paths = list_image_files(&opts.dir, &opts.extension)?;
    paths.retain(|p| !is_same_file(p, &output));
    if paths.is_empty() {
        tracing::debug!("no matching images");
        return Ok(DirectoryOutcome::NoImages);
    }

    let tiles = decode_files(&paths)?;
    let sheet = compose_strip(&tiles, opts.fill)?;
    write_png(&sheet, &output, PngColor::Rgba8)?;

    Ok(DirectoryOutcome::Written(SheetSummary {
        path: output,
        tiles: tiles.len(),
        tile: TileSize::of(&tiles[0]),
        width: sheet.width(),
        height: sheet.height(),
    }))
}

/// Render numbered placeholder tiles and write them as one RGB strip.
#[tracing::instrument(skip(config, font))]
pub fn build_numbered(config: &NumberedSheetConfig, font: &FontSource) -> SheetResult<SheetSummary> {
    config.validate()?;
    let params = config.tiles()?;

    let resolved = font.resolve()?;
    let mut renderer = LabelRenderer::new(&resolved)?;
    if !renderer.is_scalable() {
        tracing::info!("labels use the built-in bitmap font at native size");
    }

    let tiles = render_numbered_tiles(&params, &mut renderer)?;
    let sheet = compose_strip(&tiles, config.sheet_fill)?;
    write_png(&sheet, &config.output, PngColor::Rgb8)?;

    Ok(SheetSummary {
        path: config.output.clone(),
        tiles: tiles.len(),
        tile: params.tile,
        width: sheet.width(),
        height: sheet.height(),
    })
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
