use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::{
    core::TileSequence,
    error::{SheetError, SheetResult},
};

/// Extension matched by directory mode when none is given.
pub const DEFAULT_EXTENSION: &str = "png";

/// List the regular files directly inside `dir` whose name ends with `.{extension}`.
///
/// Matching is case-sensitive and does not recurse. The result is sorted lexicographically by
/// file name.
pub fn list_image_files(dir: &Path, extension: &str) -> SheetResult<Vec<PathBuf>> {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        return Err(SheetError::validation("image extension must be non-empty"));
    }
    let suffix = format!(".{extension}");

    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("read image directory '{}'", dir.display()))?;

    let mut named = Vec::<(String, PathBuf)>::new();
    for entry in rd {
        let entry =
            entry.with_context(|| format!("read entry of directory '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !name.ends_with(&suffix) {
            continue;
        }
        named.push((name, path));
    }

    named.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(named.into_iter().map(|(_, path)| path).collect())
}

/// Decode every file in `paths`, in order, into RGBA8 tiles.
pub fn decode_files(paths: &[PathBuf]) -> SheetResult<TileSequence> {
    paths.iter().map(|p| decode_file(p)).collect()
}

/// Decode one image file into an RGBA8 tile. RGB sources become opaque.
///
/// The format is sniffed from the file contents, falling back to the extension.
pub fn decode_file(path: &Path) -> SheetResult<image::RgbaImage> {
    let img = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .with_context(|| format!("open image '{}'", path.display()))?
        .decode()
        .with_context(|| format!("decode image '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), width = img.width(), height = img.height(), "decoded tile");
    Ok(img.to_rgba8())
}

/// List and decode the matching images of `dir`. An empty sequence is not an error.
#[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load_images(dir: &Path, extension: &str) -> SheetResult<TileSequence> {
    let paths = list_image_files(dir, extension)?;
    decode_files(&paths)
}

#[cfg(test)]
#[path = "../../tests/unit/source/directory.rs"]
mod tests;
