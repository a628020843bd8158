use crate::{
    foundation::{color::Rgba8, core::TileSize, error::SheetResult},
    source::font::ResolvedFont,
    text::{
        bitmap::BitmapFont,
        fit::{FitPolicy, FontFit, centered_origin, fit_label},
        layout::ScalableFont,
    },
};

/// Colors of a label tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileStyle {
    /// Solid fill behind the label.
    pub background: Rgba8,
    /// Label color.
    pub text: Rgba8,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::WHITE,
            text: Rgba8::BLACK,
        }
    }
}

/// One rendered label tile.
#[derive(Clone, Debug)]
pub struct LabelTile {
    /// Tile pixels.
    pub image: image::RgbaImage,
    /// Size search outcome; `None` for the bitmap font, which is never resized.
    pub fit: Option<FontFit>,
    /// Where the label layout origin was placed.
    pub origin: (i32, i32),
}

/// Draws centered labels on solid tiles with either a scalable or the bitmap font.
#[derive(Debug)]
pub enum LabelRenderer {
    /// Scalable font with per-label size fitting.
    Scalable(Box<ScalableFont>),
    /// Built-in bitmap font at native size.
    Bitmap(BitmapFont),
}

impl LabelRenderer {
    /// Build a renderer for `font`. Unparseable scalable font data is an error.
    pub fn new(font: &ResolvedFont) -> SheetResult<Self> {
        match font {
            ResolvedFont::Scalable { bytes, origin } => {
                let font = ScalableFont::from_bytes(bytes.clone())?;
                tracing::debug!(family = font.family(), origin = ?origin, "using scalable font");
                Ok(Self::Scalable(Box::new(font)))
            }
            ResolvedFont::Bitmap => Ok(Self::Bitmap(BitmapFont::builtin())),
        }
    }

    /// Whether labels are size-fitted.
    pub fn is_scalable(&self) -> bool {
        matches!(self, Self::Scalable(_))
    }

    /// Render `label` centered on a `tile`-sized solid canvas.
    pub fn render_tile(
        &mut self,
        label: &str,
        tile: TileSize,
        style: TileStyle,
        policy: &FitPolicy,
    ) -> SheetResult<LabelTile> {
        match self {
            Self::Scalable(font) => {
                let fit = fit_label(label, tile, policy, |size| font.measure(label, size))?;
                let origin = centered_origin(tile, fit.bbox);
                let image =
                    font.render(label, fit.size, tile, origin, style.background, style.text)?;
                Ok(LabelTile {
                    image,
                    fit: Some(fit),
                    origin,
                })
            }
            Self::Bitmap(font) => {
                let origin = centered_origin(tile, font.measure(label));
                let mut image =
                    image::RgbaImage::from_pixel(tile.width, tile.height, style.background.to_pixel());
                font.draw(&mut image, label, origin.0, origin.1, style.text);
                Ok(LabelTile {
                    image,
                    fit: None,
                    origin,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/label.rs"]
mod tests;
