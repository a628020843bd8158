use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::foundation::error::SheetResult;

/// Channel layout written to the PNG file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PngColor {
    /// 8-bit RGBA, keeps transparency.
    #[default]
    Rgba8,
    /// 8-bit RGB, alpha is dropped.
    Rgb8,
}

/// Encode `image` as PNG with a fixed compression and filter setup, so equal pixels always
/// produce equal bytes.
pub fn encode_png(image: &image::RgbaImage, color: PngColor) -> SheetResult<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut out = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut out,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Adaptive,
    );
    match color {
        PngColor::Rgba8 => {
            encoder.write_image(image.as_raw(), width, height, image::ExtendedColorType::Rgba8)?
        }
        PngColor::Rgb8 => {
            let rgb = image::DynamicImage::ImageRgba8(image.clone()).into_rgb8();
            encoder.write_image(rgb.as_raw(), width, height, image::ExtendedColorType::Rgb8)?
        }
    }
    Ok(out)
}

/// Create the parent directory of `path` when missing.
pub fn ensure_parent_dir(path: &Path) -> SheetResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode `image` and write it to `path`, replacing any existing file.
#[tracing::instrument(skip(image, path), fields(path = %path.display()))]
pub fn write_png(image: &image::RgbaImage, path: &Path, color: PngColor) -> SheetResult<()> {
    let bytes = encode_png(image, color)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, &bytes).with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(len = bytes.len(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/png.rs"]
mod tests;
