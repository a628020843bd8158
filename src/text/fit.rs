use crate::foundation::{
    core::TileSize,
    error::{SheetError, SheetResult},
};

/// Ink bounding box of rendered text in layout pixels. `right`/`bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBBox {
    /// Leftmost inked column.
    pub left: i32,
    /// Topmost inked row.
    pub top: i32,
    /// One past the rightmost inked column.
    pub right: i32,
    /// One past the bottom inked row.
    pub bottom: i32,
}

impl TextBBox {
    /// Box width in pixels.
    pub fn width(self) -> u32 {
        self.right.saturating_sub(self.left).max(0) as u32
    }

    /// Box height in pixels.
    pub fn height(self) -> u32 {
        self.bottom.saturating_sub(self.top).max(0) as u32
    }

    /// Whether the box fits inside `tile`.
    pub fn fits(self, tile: TileSize) -> bool {
        self.width() <= tile.width && self.height() <= tile.height
    }
}

/// Largest font size a search may start from. Text is measured on a `u16`-sized scratch
/// surface padded by one em on each side.
pub const MAX_FONT_SIZE: f32 = 10_000.0;

/// Parameters of the shrink-until-it-fits font size search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitPolicy {
    /// First size tried.
    pub initial_size: f32,
    /// Amount subtracted after every miss.
    pub step: f32,
    /// Smallest size the search may try.
    pub min_size: f32,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            initial_size: 250.0,
            step: 10.0,
            min_size: 1.0,
        }
    }
}

impl FitPolicy {
    /// Reject policies for which the search would not terminate or never try a size.
    pub fn validate(&self) -> SheetResult<()> {
        if !self.initial_size.is_finite() || self.initial_size <= 0.0 {
            return Err(SheetError::validation(
                "initial font size must be finite and > 0",
            ));
        }
        if self.initial_size > MAX_FONT_SIZE {
            return Err(SheetError::validation(format!(
                "initial font size {} exceeds {MAX_FONT_SIZE}",
                self.initial_size
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SheetError::validation(
                "font size step must be finite and > 0",
            ));
        }
        if !self.min_size.is_finite() || self.min_size <= 0.0 {
            return Err(SheetError::validation(
                "minimum font size must be finite and > 0",
            ));
        }
        if self.min_size > self.initial_size {
            return Err(SheetError::validation(format!(
                "minimum font size {} exceeds initial font size {}",
                self.min_size, self.initial_size
            )));
        }
        Ok(())
    }
}

/// Result of a successful size search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontFit {
    /// Chosen font size.
    pub size: f32,
    /// Ink box measured at `size`.
    pub bbox: TextBBox,
    /// Number of shrink steps taken.
    pub steps: u32,
}

/// Shrink the font size from `policy.initial_size` until `measure` reports a box inside `tile`.
///
/// Fails with [`SheetError::LabelDoesNotFit`] once the next candidate would drop below
/// `policy.min_size`.
pub fn fit_label<F>(
    label: &str,
    tile: TileSize,
    policy: &FitPolicy,
    mut measure: F,
) -> SheetResult<FontFit>
where
    F: FnMut(f32) -> SheetResult<TextBBox>,
{
    policy.validate()?;

    let mut size = policy.initial_size;
    let mut steps = 0u32;
    loop {
        let bbox = measure(size)?;
        if bbox.fits(tile) {
            tracing::debug!(label, size, steps, "label fits");
            return Ok(FontFit { size, bbox, steps });
        }

        let next = size - policy.step;
        if next < policy.min_size {
            return Err(SheetError::LabelDoesNotFit {
                label: label.to_string(),
                tile_width: tile.width,
                tile_height: tile.height,
                min_size: policy.min_size,
            });
        }
        size = next;
        steps += 1;
    }
}

/// Layout origin that centers `bbox` inside `tile`, correcting for the box's own offset.
pub fn centered_origin(tile: TileSize, bbox: TextBBox) -> (i32, i32) {
    let center = |tile_dim: u32, text_dim: u32| -> i32 {
        (i64::from(tile_dim) - i64::from(text_dim)).div_euclid(2) as i32
    };
    (
        center(tile.width, bbox.width()) - bbox.left,
        center(tile.height, bbox.height()) - bbox.top,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
