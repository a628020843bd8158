use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::foundation::error::SheetResult;

/// Well-known bold sans-serif font locations, checked in order.
pub const DEFAULT_FONT_PATHS: [&str; 4] = [
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
];

/// Default probe list as owned paths.
pub fn default_font_paths() -> Vec<PathBuf> {
    DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect()
}

/// Where the label font comes from.
#[derive(Clone, Debug)]
pub enum FontSource {
    /// Use the first existing file; fall back to the built-in bitmap font when none exists.
    Probe(Vec<PathBuf>),
    /// Use exactly this file.
    File(PathBuf),
    /// In-memory font data.
    Bytes(Arc<Vec<u8>>),
    /// The built-in bitmap font.
    Builtin,
}

impl Default for FontSource {
    fn default() -> Self {
        Self::Probe(default_font_paths())
    }
}

/// Outcome of [`FontSource::resolve`].
#[derive(Clone)]
pub enum ResolvedFont {
    /// Scalable (TrueType/OpenType) font data.
    Scalable {
        /// Raw font file bytes.
        bytes: Arc<Vec<u8>>,
        /// File the bytes were read from, when known.
        origin: Option<PathBuf>,
    },
    /// Built-in bitmap font; labels are drawn at native size without fitting.
    Bitmap,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalable { bytes, origin } => f
                .debug_struct("Scalable")
                .field("bytes_len", &bytes.len())
                .field("origin", origin)
                .finish(),
            Self::Bitmap => f.write_str("Bitmap"),
        }
    }
}

impl FontSource {
    /// Resolve to concrete font data, reading from disk where needed.
    pub fn resolve(&self) -> SheetResult<ResolvedFont> {
        match self {
            Self::Probe(paths) => match probe_font_paths(paths) {
                Some(path) => read_font_file(&path),
                None => {
                    tracing::warn!(
                        candidates = paths.len(),
                        "none of the candidate font files were found, using the built-in bitmap font"
                    );
                    Ok(ResolvedFont::Bitmap)
                }
            },
            Self::File(path) => read_font_file(path),
            Self::Bytes(bytes) => Ok(ResolvedFont::Scalable {
                bytes: Arc::clone(bytes),
                origin: None,
            }),
            Self::Builtin => Ok(ResolvedFont::Bitmap),
        }
    }
}

/// First path in `paths` that is an existing regular file.
pub fn probe_font_paths(paths: &[PathBuf]) -> Option<PathBuf> {
    paths.iter().find(|p| p.is_file()).cloned()
}

fn read_font_file(path: &Path) -> SheetResult<ResolvedFont> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read font file '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded font file");
    Ok(ResolvedFont::Scalable {
        bytes: Arc::new(bytes),
        origin: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/source/font.rs"]
mod tests;
