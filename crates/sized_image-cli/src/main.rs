//! sizedimg - Generate images that approximate a requested file size
//!
//! A command-line tool that turns a kilobyte budget into a square RGB image,
//! filled with a solid color, fully random pixels, or two-tone random noise.

use clap::{Parser, ValueEnum};
use image::ImageFormat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sized_image::{generate_by_size, to_raw_rgb, FillMode, Rgb};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sizedimg")]
#[command(version)]
#[command(about = "Generate a raster image approximating a requested file size", long_about = None)]
struct Cli {
    /// Requested size, in kilobytes, of the image
    #[arg(short, long)]
    size: Option<f64>,

    /// Fill the image with fully random pixel data
    #[arg(short, long)]
    random: bool,

    /// With --random, restrict pixels to pure black and white
    #[arg(short, long)]
    monochrome: bool,

    /// Solid fill color as R,G,B (ignored with --random)
    #[arg(short, long, value_parser = parse_color, default_value = "255,0,0")]
    color: Rgb,

    /// Seed for the random number generator (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file; the format is inferred from the extension unless --format is given
    #[arg(short = 'f', long)]
    output: Option<PathBuf>,

    /// Output format, overriding the file extension
    #[arg(short = 't', long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl From<OutputFormat> for ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Webp => ImageFormat::WebP,
        }
    }
}

fn parse_color(s: &str) -> Result<Rgb, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected three components R,G,B, got '{}'", s));
    }
    let channel = |part: &str| {
        part.trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid channel '{}': {}", part, e))
    };
    Ok(Rgb::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Without a size request there is nothing to generate
    let Some(kilobytes) = cli.size else {
        return Ok(());
    };
    let output = cli
        .output
        .ok_or("--output is required when --size is given")?;

    let mode = if cli.random {
        if cli.monochrome {
            FillMode::Monochrome
        } else {
            FillMode::Random
        }
    } else {
        FillMode::Solid(cli.color)
    };

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (dimensions, pixels) = generate_by_size(kilobytes, mode, &mut rng)?;

    eprintln!(
        "Generating {}x{} image ({} bytes uncompressed) for a {} KB request",
        dimensions.width,
        dimensions.height,
        dimensions.uncompressed_bytes(),
        kilobytes
    );

    let raw = to_raw_rgb(&pixels);
    let img = image::RgbImage::from_raw(dimensions.width, dimensions.height, raw)
        .ok_or("generated pixel data does not match the estimated dimensions")?;

    match cli.format {
        Some(format) => img.save_with_format(&output, format.into())?,
        None => img.save(&output)?,
    }
    eprintln!("Written '{}'", output.display());

    Ok(())
}
