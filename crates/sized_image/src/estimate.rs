//! Dimension estimation: requested output size to square pixel dimensions.
//!
//! The formula inverts the uncompressed 24-bit RGB buffer size,
//! `width * height * 3 == bytes`, for a square image:
//!
//! ```text
//! axis = floor(sqrt(kilobytes * 1024 / 3))
//! ```
//!
//! This is a loose approximation of the final file size. Encoders add
//! headers and most formats compress, so the saved file can differ
//! substantially from the request, especially for solid fills under a
//! lossless format. That slack is accepted behavior.

use crate::{Result, SizedImageError, AXIS_LIMIT, BYTES_PER_PIXEL};

/// Pixel dimensions of a generated image.
///
/// Always square; the estimator offers no aspect-ratio control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Total number of pixels, `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size in bytes of the uncompressed RGB buffer for these dimensions.
    #[inline]
    pub fn uncompressed_bytes(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL as usize
    }
}

/// Estimate square image dimensions whose uncompressed RGB buffer
/// approximates the requested size.
///
/// # Arguments
/// * `kilobytes` - Requested output size in kilobytes. Must be positive and
///   finite.
///
/// # Errors
/// * [`SizedImageError::InvalidSizeRequest`] if the request is zero,
///   negative, NaN or infinite
/// * [`SizedImageError::DegenerateSize`] if the request maps below one pixel
///   per side (anything under 3 bytes, i.e. under ~0.003 KB)
/// * [`SizedImageError::SizeOverflow`] if the request maps past the
///   1,000,000 pixel per-side limit
///
/// All arithmetic runs in `f64`, which represents every in-range byte count
/// exactly; the axis is narrowed to `u32` only after the limit check, so no
/// intermediate can wrap.
///
/// # Example
/// ```ignore
/// let dims = estimate_dimensions(3.0)?;
/// assert_eq!((dims.width, dims.height), (32, 32));
/// ```
pub fn estimate_dimensions(kilobytes: f64) -> Result<Dimensions> {
    if !kilobytes.is_finite() || kilobytes <= 0.0 {
        return Err(SizedImageError::InvalidSizeRequest { kilobytes });
    }

    let size_in_bytes = kilobytes * 1024.0;
    let axis = (size_in_bytes / BYTES_PER_PIXEL).sqrt().floor();

    if axis < 1.0 {
        return Err(SizedImageError::DegenerateSize { kilobytes });
    }
    if axis > AXIS_LIMIT as f64 {
        return Err(SizedImageError::SizeOverflow { kilobytes });
    }

    let axis = axis as u32;
    Ok(Dimensions {
        width: axis,
        height: axis,
    })
}
