use std::fmt;
use std::path::Path;

use crate::color::hex::ColorInput;
use crate::foundation::core::{DEFAULT_GRADIENT, GRADIENT_STOPS, Gradient, Section};
use crate::foundation::error::{GradientError, GradientResult};
use crate::interp::interpolator::validate_sections;

/// On-disk section table (JSON).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientConfig {
    /// Fallback used ahead of [`DEFAULT_GRADIENT`] when the first section has no usable colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_gradient: Option<Vec<ColorInput>>,
    /// Sections in ascending boundary order.
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

/// One configured section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionConfig {
    /// Unique section id.
    pub id: String,
    /// Start offset; may be left at 0 and supplied later by layout.
    #[serde(default)]
    pub boundary: f64,
    /// Up to three colors; missing slots come from the fallback chain.
    #[serde(default)]
    pub gradient: Vec<ColorInput>,
}

/// A non-fatal problem found in a [`GradientConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Section id, or `default_gradient`.
    pub scope: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.message)
    }
}

impl GradientConfig {
    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> GradientResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GradientError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a JSON config document.
    pub fn from_json_str(s: &str) -> GradientResult<Self> {
        serde_json::from_str(s).map_err(|e| GradientError::serde(e.to_string()))
    }

    /// Build a config from resolved sections (colors written as hex).
    pub fn from_sections(sections: &[Section]) -> Self {
        Self {
            default_gradient: None,
            sections: sections
                .iter()
                .map(|s| SectionConfig {
                    id: s.id.clone(),
                    boundary: s.boundary,
                    gradient: s.gradient.0.iter().copied().map(ColorInput::from).collect(),
                })
                .collect(),
        }
    }

    /// Resolve every section to a full three-stop gradient and validate the table.
    ///
    /// Missing slots fall back to the first section's resolved gradient, then to
    /// `default_gradient`, then to [`DEFAULT_GRADIENT`]. Malformed colors become black and
    /// are logged. Duplicate or empty ids and invalid or unordered boundaries are errors.
    #[tracing::instrument(skip(self), fields(sections = self.sections.len()))]
    pub fn resolve(&self) -> GradientResult<Vec<Section>> {
        for d in self.diagnostics() {
            tracing::warn!(scope = %d.scope, "{}", d.message);
        }

        let base = match &self.default_gradient {
            Some(colors) => resolve_slots(colors, &DEFAULT_GRADIENT),
            None => DEFAULT_GRADIENT,
        };

        let mut out = Vec::<Section>::with_capacity(self.sections.len());
        for s in &self.sections {
            let fallback = out.first().map_or(base, |first| first.gradient);
            out.push(Section {
                id: s.id.clone(),
                boundary: s.boundary,
                gradient: resolve_slots(&s.gradient, &fallback),
            });
        }

        validate_sections(&out)?;
        Ok(out)
    }

    /// Non-fatal findings: malformed colors, missing slots, ignored extra slots.
    pub fn diagnostics(&self) -> Vec<ConfigDiagnostic> {
        let mut out = Vec::new();
        if let Some(colors) = &self.default_gradient {
            check_colors("default_gradient", colors, &mut out);
        }
        for s in &self.sections {
            check_colors(&s.id, &s.gradient, &mut out);
        }
        out
    }
}

fn resolve_slots(colors: &[ColorInput], fallback: &Gradient) -> Gradient {
    let slots: Vec<_> = colors.iter().map(ColorInput::to_slot).collect();
    Gradient::resolve(&slots, fallback)
}

fn check_colors(scope: &str, colors: &[ColorInput], out: &mut Vec<ConfigDiagnostic>) {
    let mut push = |message: String| {
        out.push(ConfigDiagnostic {
            scope: scope.to_owned(),
            message,
        })
    };

    for (slot, c) in colors.iter().take(GRADIENT_STOPS).enumerate() {
        if c.is_missing() {
            push(format!("color {slot} is missing, using fallback"));
        } else if let Err(e) = c.to_rgb8() {
            push(format!("color {slot} is malformed ({e}), using black"));
        }
    }
    if colors.len() < GRADIENT_STOPS {
        push(format!(
            "gradient has {} of {GRADIENT_STOPS} colors, filling from fallback",
            colors.len()
        ));
    }
    if colors.len() > GRADIENT_STOPS {
        push(format!(
            "gradient has {} colors, ignoring all past {GRADIENT_STOPS}",
            colors.len()
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
