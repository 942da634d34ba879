use super::*;

#[test]
fn clamp01_handles_out_of_range_and_nan() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(7.0), 1.0);
    assert_eq!(clamp01(f64::NAN), 0.0);
}

#[test]
fn lerp_u8_rounds_half_away_from_zero() {
    assert_eq!(lerp_u8(27, 58, 0.5), 43);
    assert_eq!(lerp_u8(58, 27, 0.5), 43);
    assert_eq!(lerp_u8(0, 255, 0.0), 0);
    assert_eq!(lerp_u8(0, 255, 1.0), 255);
}

#[test]
fn lerp_u8_endpoints_are_exact() {
    for a in [0u8, 1, 127, 200, 255] {
        for b in [0u8, 3, 128, 255] {
            assert_eq!(lerp_u8(a, b, 0.0), a);
            assert_eq!(lerp_u8(a, b, 1.0), b);
        }
    }
}

#[test]
fn offsets_must_be_finite_and_non_negative() {
    assert!(is_valid_offset(0.0));
    assert!(is_valid_offset(1200.5));
    assert!(!is_valid_offset(-1.0));
    assert!(!is_valid_offset(f64::NAN));
    assert!(!is_valid_offset(f64::INFINITY));
}
