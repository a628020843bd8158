use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use spritestrip::{FontSource, NumberedSheetConfig, Rgba8};

#[derive(Parser, Debug)]
#[command(
    name = "numbered-sheet",
    version,
    about = "Render numbered placeholder tiles into a sprite sheet."
)]
struct Cli {
    /// JSON file with sheet settings. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of tiles.
    #[arg(long)]
    count: Option<u32>,

    /// Tile width in pixels.
    #[arg(long)]
    tile_width: Option<u32>,

    /// Tile height in pixels.
    #[arg(long)]
    tile_height: Option<u32>,

    /// Tile background as `#RRGGBB` or `#RRGGBBAA`.
    #[arg(long)]
    background: Option<Rgba8>,

    /// Label color as `#RRGGBB` or `#RRGGBBAA`.
    #[arg(long)]
    text_color: Option<Rgba8>,

    /// Use this font file instead of probing the well-known locations.
    #[arg(long, conflicts_with = "builtin_font")]
    font: Option<PathBuf>,

    /// Skip font probing and draw labels with the built-in bitmap font.
    #[arg(long)]
    builtin_font: bool,

    /// Output PNG path. Defaults to `~/sprite_sheet.png`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => NumberedSheetConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => NumberedSheetConfig::default(),
    };
    if let Some(count) = cli.count {
        config.count = count;
    }
    if let Some(w) = cli.tile_width {
        config.tile_width = w;
    }
    if let Some(h) = cli.tile_height {
        config.tile_height = h;
    }
    if let Some(c) = cli.background {
        config.background = c;
    }
    if let Some(c) = cli.text_color {
        config.text_color = c;
    }
    if let Some(out) = cli.out {
        config.output = out;
    }

    let font = if cli.builtin_font {
        FontSource::Builtin
    } else if let Some(path) = cli.font {
        FontSource::File(path)
    } else {
        config.font_source()
    };

    let summary = spritestrip::build_numbered(&config, &font)?;
    println!("Sprite sheet saved as {}", summary.path.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
