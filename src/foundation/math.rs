/// Clamp an interpolation fraction into `[0, 1]`; NaN collapses to 0.
pub(crate) fn clamp01(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// Boundary offsets must be finite and non-negative.
pub(crate) fn is_valid_offset(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
