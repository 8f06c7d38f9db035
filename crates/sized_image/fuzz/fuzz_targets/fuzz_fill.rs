#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sized_image::{generate_buffer, Dimensions, FillMode, Rgb};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    axis: u8,
    mode: u8,
    seed: u64,
    color: (u8, u8, u8),
}

fuzz_target!(|input: FuzzInput| {
    // Keep buffers small; the fill is O(pixel count)
    let axis = (input.axis as u32).max(1).min(64);
    let dims = Dimensions {
        width: axis,
        height: axis,
    };

    let mode = match input.mode % 3 {
        0 => FillMode::Solid(Rgb::new(input.color.0, input.color.1, input.color.2)),
        1 => FillMode::Random,
        _ => FillMode::Monochrome,
    };

    let mut rng = StdRng::seed_from_u64(input.seed);

    // The generator should never panic and always honors the pixel count
    let pixels = generate_buffer(dims, mode, &mut rng);
    assert_eq!(pixels.len(), dims.pixel_count());
});
