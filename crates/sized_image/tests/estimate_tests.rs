use sized_image::{estimate_dimensions, Dimensions, SizedImageError};

#[test]
fn test_three_kilobytes_is_a_32_pixel_square() {
    // 3 KB => 3072 bytes => floor(sqrt(3072 / 3)) = floor(sqrt(1024)) = 32
    let dims = estimate_dimensions(3.0).expect("3 KB should be estimable");

    assert_eq!(
        dims,
        Dimensions {
            width: 32,
            height: 32
        }
    );
    assert_eq!(dims.pixel_count(), 1024, "Pixel count should be 32 * 32");
    assert_eq!(dims.uncompressed_bytes(), 3072);
}

#[test]
fn test_pixel_count_matches_size_formula() {
    for kilobytes in [0.01, 0.5, 1.0, 3.0, 10.0, 100.0, 1024.0, 99999.0] {
        let dims = estimate_dimensions(kilobytes).expect("request should be estimable");
        let expected_axis = (kilobytes * 1024.0 / 3.0).sqrt().floor() as usize;

        assert_eq!(dims.width, dims.height, "Estimated image should be square");
        assert_eq!(
            dims.pixel_count(),
            expected_axis * expected_axis,
            "Pixel count for {} KB should be floor(sqrt(KB * 1024 / 3))^2",
            kilobytes
        );
    }
}

#[test]
fn test_estimate_is_deterministic() {
    let first = estimate_dimensions(42.0).unwrap();
    let second = estimate_dimensions(42.0).unwrap();

    assert_eq!(first, second, "Same request should yield identical dimensions");
}

#[test]
fn test_fractional_requests_round_down() {
    // 3.5 KB => 3584 bytes => floor(sqrt(1194.67)) = 34
    let dims = estimate_dimensions(3.5).unwrap();

    assert_eq!(dims.width, 34);
    assert_eq!(dims.pixel_count(), 34 * 34);
}

#[test]
fn test_rejects_non_positive_requests() {
    for kilobytes in [0.0, -1.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = estimate_dimensions(kilobytes);
        assert!(
            matches!(result, Err(SizedImageError::InvalidSizeRequest { .. })),
            "Request of {} KB should be rejected as invalid",
            kilobytes
        );
    }
}

#[test]
fn test_rejects_sub_pixel_request() {
    // 0.001 KB is barely one byte, a third of a single pixel
    let result = estimate_dimensions(0.001);

    assert!(
        matches!(result, Err(SizedImageError::DegenerateSize { .. })),
        "Sub-pixel request should be rejected, not clamped to 1x1"
    );
}

#[test]
fn test_smallest_viable_request_is_one_pixel() {
    // 0.003 KB = 3.072 bytes, just past the 3 bytes a single pixel needs
    let dims = estimate_dimensions(0.003).expect("3 bytes should map to one pixel");

    assert_eq!(
        dims,
        Dimensions {
            width: 1,
            height: 1
        }
    );
    assert_eq!(dims.pixel_count(), 1);
}

#[test]
fn test_rejects_oversized_request() {
    // Far past the 1,000,000 pixel axis limit
    let result = estimate_dimensions(1e16);

    assert!(
        matches!(result, Err(SizedImageError::SizeOverflow { .. })),
        "Oversized request should fail fast instead of wrapping"
    );
}

#[test]
fn test_errors_render_the_offending_request() {
    let err = estimate_dimensions(-2.0).unwrap_err();
    assert!(
        err.to_string().contains("-2"),
        "Error message should name the rejected request: {}",
        err
    );

    let err = estimate_dimensions(1e16).unwrap_err();
    assert!(
        err.to_string().contains("1e16") || err.to_string().contains("10000000000000000"),
        "Overflow message should name the rejected request: {}",
        err
    );
}
