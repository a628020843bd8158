use std::path::PathBuf;

use clap::Parser;
use spritestrip::{DirectoryOpts, DirectoryOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "sprite-sheet",
    version,
    about = "Create a sprite sheet from PNG files in a directory."
)]
struct Cli {
    /// The directory containing the PNG files.
    image_dir: PathBuf,

    /// File extension to collect (case-sensitive, without the dot).
    #[arg(long, default_value = spritestrip::DEFAULT_EXTENSION)]
    extension: String,

    /// Output PNG path. Defaults to `<IMAGE_DIR>/sprite_sheet.png`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = DirectoryOpts {
        extension: cli.extension.clone(),
        output: cli.out,
        ..DirectoryOpts::new(cli.image_dir)
    };

    match spritestrip::build_from_directory(&opts)? {
        DirectoryOutcome::Written(summary) => {
            println!("Sprite sheet saved as {}", summary.path.display());
        }
        DirectoryOutcome::NoImages => {
            println!(
                "No {} files found in the directory.",
                cli.extension.trim_start_matches('.').to_uppercase()
            );
        }
    }
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
