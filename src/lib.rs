//! spritestrip assembles tiles into a single horizontal sprite sheet.
//!
//! Two pipelines share one compositor:
//!
//! 1. **Directory mode**: every `.png` file directly inside a directory, sorted by file name,
//!    decoded and pasted left to right ([`build_from_directory`]).
//! 2. **Numbered mode**: `N` solid placeholder tiles, each labelled with its 1-based index in
//!    the largest font size that fits the tile ([`build_numbered`]).
//!
//! In both cases the sheet is `N * tile_width` pixels wide and `tile_height` pixels tall, and
//! the slice `[i * tile_width, (i + 1) * tile_width)` holds tile `i` unchanged.
//!
//! Labels are shaped with Parley and rasterized with `vello_cpu`. When no scalable font can be
//! found a small built-in bitmap font is used instead and no size fitting takes place.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod pipeline;
mod render;
mod source;
mod text;

pub use config::{NumberedSheetConfig, SHEET_FILE_NAME, home_dir};
pub use foundation::color::Rgba8;
pub use foundation::core::{TileSequence, TileSize};
pub use foundation::error::{SheetError, SheetResult};
pub use pipeline::{
    DirectoryOpts, DirectoryOutcome, SheetSummary, build_from_directory, build_numbered,
};
pub use render::composite::{compose_strip, tile_at};
pub use render::png::{PngColor, encode_png, ensure_parent_dir, write_png};
pub use source::directory::{
    DEFAULT_EXTENSION, decode_file, decode_files, list_image_files, load_images,
};
pub use source::font::{
    DEFAULT_FONT_PATHS, FontSource, ResolvedFont, default_font_paths, probe_font_paths,
};
pub use source::synthetic::{NumberedTiles, render_numbered_tiles};
pub use text::bitmap::BitmapFont;
pub use text::fit::{
    FitPolicy, FontFit, MAX_FONT_SIZE, TextBBox, centered_origin, fit_label,
};
pub use text::label::{LabelRenderer, LabelTile, TileStyle};
pub use text::layout::{ScalableFont, TextBrushRgba8, TextLayoutEngine};
