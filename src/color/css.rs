use crate::foundation::core::{Gradient, Rgb8};

/// Angle of the page background (`bg-gradient-to-br`).
pub const DEFAULT_CSS_ANGLE_DEG: f64 = 135.0;

impl Rgb8 {
    /// `rgb(r, g, b)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Gradient {
    /// `linear-gradient(<angle>deg, rgb(..), rgb(..), rgb(..))`.
    pub fn to_css_linear(&self, angle_deg: f64) -> String {
        let [a, b, c] = self.0;
        format!(
            "linear-gradient({angle_deg}deg, {}, {}, {})",
            a.to_css(),
            b.to_css(),
            c.to_css()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/css.rs"]
mod tests;
