//! Pixel buffer generation: fill estimated dimensions with color data.
//!
//! All fill modes are pure data production. The generator never touches a
//! process-global randomness source; callers pass the RNG in, which keeps
//! tests deterministic under a seeded generator.

use rand::Rng;

use crate::estimate::{estimate_dimensions, Dimensions};
use crate::Result;

/// An 8-bit RGB color. No alpha channel is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Strategy used to populate a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Every pixel is the given color. The RNG is not consumed.
    Solid(Rgb),
    /// Each channel of each pixel is drawn independently and uniformly
    /// from 0..=255.
    Random,
    /// Each pixel is pure white or pure black, with probability 1/2 each.
    Monochrome,
}

impl Default for FillMode {
    /// A solid red fill, the color used when none is specified.
    fn default() -> Self {
        FillMode::Solid(Rgb::RED)
    }
}

/// Fill a buffer of `dimensions.pixel_count()` pixels according to `mode`.
///
/// The returned buffer is row-major for an image of
/// `(dimensions.width, dimensions.height)`. Pixels are independent of each
/// other in every mode, so the output length is the only shape guarantee.
///
/// # Example
/// ```ignore
/// let dims = Dimensions { width: 2, height: 2 };
/// let pixels = generate_buffer(dims, FillMode::Solid(Rgb::new(10, 20, 30)), &mut rng);
/// assert_eq!(pixels, vec![Rgb::new(10, 20, 30); 4]);
/// ```
pub fn generate_buffer<R: Rng>(dimensions: Dimensions, mode: FillMode, rng: &mut R) -> Vec<Rgb> {
    let count = dimensions.pixel_count();
    match mode {
        FillMode::Solid(color) => vec![color; count],
        FillMode::Random => (0..count)
            .map(|_| Rgb {
                r: rng.random(),
                g: rng.random(),
                b: rng.random(),
            })
            .collect(),
        FillMode::Monochrome => (0..count)
            .map(|_| if rng.random() { Rgb::WHITE } else { Rgb::BLACK })
            .collect(),
    }
}

/// Estimate dimensions for `kilobytes` and generate the buffer in one step.
///
/// # Errors
/// Propagates [`estimate_dimensions`] failures; no buffer is allocated when
/// the size request is rejected.
pub fn generate_by_size<R: Rng>(
    kilobytes: f64,
    mode: FillMode,
    rng: &mut R,
) -> Result<(Dimensions, Vec<Rgb>)> {
    let dimensions = estimate_dimensions(kilobytes)?;
    let pixels = generate_buffer(dimensions, mode, rng);
    Ok((dimensions, pixels))
}

/// Flatten a pixel buffer into packed RGB bytes (3 bytes per pixel,
/// row-major), the layout image encoders consume.
pub fn to_raw_rgb(pixels: &[Rgb]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(pixels.len() * 3);
    for pixel in pixels {
        raw.push(pixel.r);
        raw.push(pixel.g);
        raw.push(pixel.b);
    }
    raw
}
