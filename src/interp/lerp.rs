use crate::foundation::core::{Gradient, Rgb8};
use crate::foundation::math::lerp_u8;

/// Linear interpolation between two values at fraction `t`.
pub trait Lerp: Sized {
    /// `a` at `t = 0`, `b` at `t = 1`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgb8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

impl Lerp for Gradient {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self([
            Rgb8::lerp(&a.0[0], &b.0[0], t),
            Rgb8::lerp(&a.0[1], &b.0[1], t),
            Rgb8::lerp(&a.0[2], &b.0[2], t),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/lerp.rs"]
mod tests;
