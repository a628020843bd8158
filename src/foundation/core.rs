use crate::foundation::error::{SheetError, SheetResult};

/// Ordered tiles consumed by the compositor. Every tile is expected to share one size.
pub type TileSequence = Vec<image::RgbaImage>;

/// Pixel size of one sprite-sheet tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TileSize {
    /// Create a validated, non-empty tile size.
    pub fn new(width: u32, height: u32) -> SheetResult<Self> {
        if width == 0 || height == 0 {
            return Err(SheetError::validation(format!(
                "tile size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Size of `image`.
    pub fn of(image: &image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    /// Size of a strip holding `count` tiles side by side.
    pub fn strip(self, count: usize) -> SheetResult<Self> {
        let count = u32::try_from(count)
            .map_err(|_| SheetError::validation("tile count exceeds u32"))?;
        let width = self.width.checked_mul(count).ok_or_else(|| {
            SheetError::validation(format!(
                "sheet width {} x {count} overflows u32",
                self.width
            ))
        })?;
        Ok(Self {
            width,
            height: self.height,
        })
    }
}

impl std::fmt::Display for TileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
