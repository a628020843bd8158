use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    foundation::{
        color::Rgba8,
        core::TileSize,
        error::{SheetError, SheetResult},
    },
    source::{
        font::{FontSource, default_font_paths},
        synthetic::NumberedTiles,
    },
    text::{fit::FitPolicy, label::TileStyle},
};

/// File name used for sheets written without an explicit output path.
pub const SHEET_FILE_NAME: &str = "sprite_sheet.png";

/// Settings of the numbered placeholder sheet. Every field has a default, so `{}` is a valid
/// configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberedSheetConfig {
    /// Tile width in pixels.
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
    /// Number of tiles.
    pub count: u32,
    /// Tile background.
    pub background: Rgba8,
    /// Label color.
    pub text_color: Rgba8,
    /// Canvas fill behind the tiles.
    pub sheet_fill: Rgba8,
    /// First font size tried by the fit search.
    pub initial_font_size: f32,
    /// Font size decrement of the fit search.
    pub font_size_step: f32,
    /// Smallest font size the fit search may try.
    pub min_font_size: f32,
    /// Output PNG path.
    pub output: PathBuf,
    /// Font files probed in order.
    pub font_paths: Vec<PathBuf>,
}

impl Default for NumberedSheetConfig {
    fn default() -> Self {
        let fit = FitPolicy::default();
        Self {
            tile_width: 276,
            tile_height: 315,
            count: 8,
            background: Rgba8::WHITE,
            text_color: Rgba8::BLACK,
            sheet_fill: Rgba8::WHITE,
            initial_font_size: fit.initial_size,
            font_size_step: fit.step,
            min_font_size: fit.min_size,
            output: home_dir().join(SHEET_FILE_NAME),
            font_paths: default_font_paths(),
        }
    }
}

impl NumberedSheetConfig {
    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SheetResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SheetError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a configuration from JSON.
    pub fn from_reader(r: impl Read) -> SheetResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SheetError::validation(format!("parse config JSON: {e}")))
    }

    /// Reject configurations that cannot produce a sheet.
    pub fn validate(&self) -> SheetResult<()> {
        TileSize::new(self.tile_width, self.tile_height)?;
        self.fit_policy().validate()?;
        if self.count == 0 {
            return Err(SheetError::validation("tile count must be at least 1"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(SheetError::validation("output path must be non-empty"));
        }
        Ok(())
    }

    /// Size search parameters.
    pub fn fit_policy(&self) -> FitPolicy {
        FitPolicy {
            initial_size: self.initial_font_size,
            step: self.font_size_step,
            min_size: self.min_font_size,
        }
    }

    /// Font source probing `font_paths`.
    pub fn font_source(&self) -> FontSource {
        FontSource::Probe(self.font_paths.clone())
    }

    /// Tile rendering parameters.
    pub fn tiles(&self) -> SheetResult<NumberedTiles> {
        Ok(NumberedTiles {
            tile: TileSize::new(self.tile_width, self.tile_height)?,
            count: self.count,
            style: TileStyle {
                background: self.background,
                text: self.text_color,
            },
            fit: self.fit_policy(),
        })
    }
}

/// The user's home directory, or `.` when it cannot be determined.
pub fn home_dir() -> PathBuf {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(std::env::var_os)
        .find(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
