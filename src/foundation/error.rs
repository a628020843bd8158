/// Convenience result type used across spritestrip.
pub type SheetResult<T> = Result<T, SheetError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SheetError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The compositor was handed zero tiles.
    #[error("cannot compose a sprite sheet from an empty tile sequence")]
    EmptySequence,

    /// The shrink loop reached the minimum font size without the label fitting its tile.
    #[error(
        "label \"{label}\" does not fit a {tile_width}x{tile_height} tile at any font size >= {min_size}"
    )]
    LabelDoesNotFit {
        /// Label text that was being laid out.
        label: String,
        /// Tile width in pixels.
        tile_width: u32,
        /// Tile height in pixels.
        tile_height: u32,
        /// Smallest font size the search was allowed to try.
        min_size: f32,
    },

    /// Font data could not be loaded or used.
    #[error("font error: {0}")]
    Font(String),

    /// Image decode or encode failure.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SheetError {
    /// Build a [`SheetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SheetError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
