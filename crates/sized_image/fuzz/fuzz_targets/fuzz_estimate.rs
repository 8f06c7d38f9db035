#![no_main]

use libfuzzer_sys::fuzz_target;
use sized_image::estimate_dimensions;

fuzz_target!(|kilobytes: f64| {
    // The estimator should never panic, whatever the request
    if let Ok(dims) = estimate_dimensions(kilobytes) {
        assert_eq!(dims.width, dims.height, "estimated image must be square");
        assert!(dims.width >= 1, "accepted requests must map to at least one pixel");
        assert_eq!(dims.pixel_count(), (dims.width as usize).pow(2));
    }
});
