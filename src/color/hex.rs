use std::fmt;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{GradientError, GradientResult};

impl Rgb8 {
    /// Strictly parse `#RRGGBB` or `RRGGBB` (case-insensitive, surrounding whitespace ignored).
    pub fn from_hex(s: &str) -> GradientResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GradientError::color(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| GradientError::color(format!("invalid hex byte in \"{s}\"")))
        };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }

    /// Parse like [`Rgb8::from_hex`], resolving anything malformed to [`Rgb8::BLACK`].
    pub fn from_hex_lenient(s: &str) -> Self {
        Self::from_hex(s).unwrap_or(Self::BLACK)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A color as written in configuration: a hex string or an `[r, g, b]` array.
///
/// Anything else is kept verbatim so a malformed entry never fails the whole document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// `"#RRGGBB"`.
    Hex(String),
    /// `[r, g, b]`, each an integer in `[0, 255]`.
    Channels(Vec<f64>),
    /// Unrecognized JSON; `null` counts as a missing slot.
    Unrecognized(serde_json::Value),
}

impl ColorInput {
    /// Strict interpretation, used for diagnostics.
    pub fn to_rgb8(&self) -> GradientResult<Rgb8> {
        match self {
            Self::Hex(s) => Rgb8::from_hex(s),
            Self::Channels(v) => {
                fn channel(x: f64) -> Option<u8> {
                    if x.fract() == 0.0 && (0.0..=255.0).contains(&x) {
                        Some(x as u8)
                    } else {
                        None
                    }
                }

                match v.as_slice() {
                    [r, g, b] => match (channel(*r), channel(*g), channel(*b)) {
                        (Some(r), Some(g), Some(b)) => Ok(Rgb8::new(r, g, b)),
                        _ => Err(GradientError::color(format!(
                            "rgb channels must be integers in 0..=255, got {v:?}"
                        ))),
                    },
                    _ => Err(GradientError::color(format!(
                        "rgb array must have len 3, got {}",
                        v.len()
                    ))),
                }
            }
            Self::Unrecognized(serde_json::Value::Null) => {
                Err(GradientError::color("color is missing (null)"))
            }
            Self::Unrecognized(other) => Err(GradientError::color(format!(
                "expected a hex string or [r, g, b] array, got {other}"
            ))),
        }
    }

    /// Lenient interpretation used when building sections.
    ///
    /// `None` marks a missing slot (filled from the fallback gradient); malformed input
    /// resolves to [`Rgb8::BLACK`].
    pub fn to_slot(&self) -> Option<Rgb8> {
        if self.is_missing() {
            return None;
        }
        Some(self.to_rgb8().unwrap_or(Rgb8::BLACK))
    }

    /// Whether this entry is JSON `null`.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Unrecognized(serde_json::Value::Null))
    }
}

impl From<Rgb8> for ColorInput {
    fn from(c: Rgb8) -> Self {
        Self::Hex(c.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
