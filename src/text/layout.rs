use std::sync::Arc;

use crate::{
    foundation::{
        color::Rgba8,
        core::TileSize,
        error::{SheetError, SheetResult},
    },
    text::fit::TextBBox,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Stateful helper for building Parley text layouts from one registered font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: Option<String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family_name: None,
        }
    }

    /// Register `font_bytes` and make its first family the one used for layout.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> SheetResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SheetError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SheetError::font("registered font family has no name"))?
            .to_string();
        self.family_name = Some(family_name.clone());
        Ok(family_name)
    }

    /// Family selected by the last [`TextLayoutEngine::register_font`] call.
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    /// Shape and lay out a single unwrapped line of `text`.
    pub fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> SheetResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SheetError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let family_name = self
            .family_name
            .clone()
            .ok_or_else(|| SheetError::font("no font registered with the layout engine"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// A scalable font ready to measure and draw labels.
pub struct ScalableFont {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
    family: String,
}

impl std::fmt::Debug for ScalableFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalableFont")
            .field("family", &self.family)
            .finish()
    }
}

impl ScalableFont {
    /// Parse `bytes` as a TrueType/OpenType font.
    pub fn from_bytes(bytes: Arc<Vec<u8>>) -> SheetResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let family = engine.register_font(bytes.as_slice())?;
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
            0,
        );
        Ok(Self {
            engine,
            font,
            family,
        })
    }

    /// Family name reported by the font data.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Ink box of `text` rendered at `size_px`, in layout coordinates.
    ///
    /// The label is rasterized into a scratch pixmap padded by one em on every side and the box
    /// covers every pixel with non-zero coverage. Text without ink measures as an empty box at
    /// the origin.
    pub fn measure(&mut self, text: &str, size_px: f32) -> SheetResult<TextBBox> {
        let layout = self
            .engine
            .layout_line(text, size_px, Rgba8::BLACK.into())?;

        let pad = size_px.ceil() as u32;
        let w = pixmap_dim(layout.width(), pad)?;
        let h = pixmap_dim(layout.height(), pad)?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        fill_layout(&mut ctx, &layout, &self.font, (f64::from(pad), f64::from(pad)));
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        let Some(ink) = ink_bounds(pixmap.data_as_u8_slice(), u32::from(w), u32::from(h)) else {
            return Ok(TextBBox::default());
        };
        let pad = pad as i32;
        Ok(TextBBox {
            left: ink.left - pad,
            top: ink.top - pad,
            right: ink.right - pad,
            bottom: ink.bottom - pad,
        })
    }

    /// Render a `tile`-sized image filled with `background` and `text` drawn with its layout
    /// origin at `origin`.
    pub fn render(
        &mut self,
        text: &str,
        size_px: f32,
        tile: TileSize,
        origin: (i32, i32),
        background: Rgba8,
        color: Rgba8,
    ) -> SheetResult<image::RgbaImage> {
        let layout = self.engine.layout_line(text, size_px, color.into())?;
        let w = u16_dim(tile.width, "tile width")?;
        let h = u16_dim(tile.height, "tile height")?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            background.a,
        ));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));
        fill_layout(
            &mut ctx,
            &layout,
            &self.font,
            (f64::from(origin.0), f64::from(origin.1)),
        );
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        let mut straight = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut straight);
        image::RgbaImage::from_raw(tile.width, tile.height, straight)
            .ok_or_else(|| SheetError::validation("rendered pixmap size does not match tile"))
    }
}

fn fill_layout(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<TextBrushRgba8>,
    font: &vello_cpu::peniko::FontData,
    origin: (f64, f64),
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate(origin));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn pixmap_dim(extent: f32, pad: u32) -> SheetResult<u16> {
    let extent = if extent.is_finite() && extent > 0.0 {
        extent.ceil() as u32
    } else {
        0
    };
    let dim = extent.saturating_add(pad.saturating_mul(2)).max(1);
    u16_dim(dim, "text measurement surface")
}

fn u16_dim(v: u32, what: &str) -> SheetResult<u16> {
    u16::try_from(v).map_err(|_| SheetError::validation(format!("{what} {v} exceeds u16")))
}

/// Bounding box of pixels with non-zero alpha in a row-major RGBA8 buffer.
pub(crate) fn ink_bounds(rgba: &[u8], width: u32, height: u32) -> Option<TextBBox> {
    let mut bbox: Option<TextBBox> = None;
    for y in 0..height {
        for x in 0..width {
            let i = ((y * width + x) * 4 + 3) as usize;
            if rgba.get(i).copied().unwrap_or(0) == 0 {
                continue;
            }
            let (x, y) = (x as i32, y as i32);
            bbox = Some(match bbox {
                None => TextBBox {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                },
                Some(b) => TextBBox {
                    left: b.left.min(x),
                    top: b.top.min(y),
                    right: b.right.max(x + 1),
                    bottom: b.bottom.max(y + 1),
                },
            });
        }
    }
    bbox
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
