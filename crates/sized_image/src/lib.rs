//! # sized_image
//!
//! Generate raster pixel buffers whose uncompressed size approximates a
//! requested byte budget.
//!
//! The crate has two layers:
//!
//! - **Estimator**: converts a requested size in kilobytes into square image
//!   dimensions, assuming 3 bytes per pixel (24-bit RGB, no compression, no
//!   format overhead)
//! - **Generator**: fills a buffer of those dimensions with solid, fully
//!   random, or two-tone random pixel data
//!
//! The actual file size after encoding depends on the chosen format and its
//! compression, which this crate deliberately does not model. Encoding and
//! file I/O belong to a downstream consumer (see the `sizedimg` CLI, which
//! hands the buffer to the `image` crate).
//!
//! ## Quick Start
//!
//! ```ignore
//! use sized_image::{estimate_dimensions, generate_buffer, FillMode};
//!
//! // 3 KB => 3072 bytes => floor(sqrt(3072 / 3)) = 32 => a 32x32 image
//! let dims = estimate_dimensions(3.0)?;
//! let mut rng = rand::rng();
//! let pixels = generate_buffer(dims, FillMode::Random, &mut rng);
//! assert_eq!(pixels.len(), dims.pixel_count());
//! ```

use thiserror::Error;

pub mod estimate;
pub mod fill;

pub use estimate::{estimate_dimensions, Dimensions};
pub use fill::{generate_buffer, generate_by_size, to_raw_rgb, FillMode, Rgb};

/// Errors that can occur while estimating dimensions from a size request.
#[derive(Debug, Error)]
pub enum SizedImageError {
    /// Requested size is not a positive, finite number of kilobytes
    #[error("invalid size request: {kilobytes} KB (must be a positive number)")]
    InvalidSizeRequest { kilobytes: f64 },

    /// Requested size maps to less than one pixel per side
    #[error("size request of {kilobytes} KB is below the one-pixel minimum of 3 bytes")]
    DegenerateSize { kilobytes: f64 },

    /// Requested size maps past the per-side axis limit
    #[error("size request of {kilobytes} KB exceeds the supported image dimensions")]
    SizeOverflow { kilobytes: f64 },
}

/// Result type for size estimation.
pub type Result<T> = core::result::Result<T, SizedImageError>;

// Uncompressed RGB assumption behind the whole size formula
pub(crate) const BYTES_PER_PIXEL: f64 = 3.0;
pub(crate) const AXIS_LIMIT: u32 = 1_000_000;
