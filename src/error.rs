//! Error types for the tracer.

use thiserror::Error;

/// Errors reported by world queries, bitmaps and scene I/O.
///
/// Note that a singular matrix is not an error; see `Matrix::inverse`.
#[derive(Error, Debug)]
pub enum TracerError {
    /// An object index past the end of the world.
    #[error("object index {index} out of range (world holds {len} objects)")]
    ObjectOutOfRange { index: usize, len: usize },

    /// A pixel coordinate outside the bitmap.
    #[error("pixel ({x}, {y}) out of range for {width}x{height} bitmap")]
    PixelOutOfRange { x: usize, y: usize, width: usize, height: usize },

    /// Image dimensions the encoder cannot represent.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene description could not be parsed or written.
    #[error("scene description error: {0}")]
    Scene(#[from] serde_json::Error),

    /// The image encoder rejected the pixel buffer.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for tracer operations.
pub type Result<T> = std::result::Result<T, TracerError>;
