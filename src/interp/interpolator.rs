use std::collections::BTreeSet;

use crate::foundation::core::{DEFAULT_GRADIENT, Gradient, Section};
use crate::foundation::error::{GradientError, GradientResult};
use crate::foundation::math::{clamp01, is_valid_offset};
use crate::interp::lerp::Lerp;

/// The pair of sections bracketing a scroll midpoint and the blend fraction between them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bracket {
    /// Index of the section the blend starts from.
    pub from: usize,
    /// Index of the section the blend moves toward (equal to `from` when clamped).
    pub to: usize,
    /// Blend fraction in `[0, 1]`.
    pub t: f64,
}

/// Locate the bracketing pair for `scroll_midpoint`.
///
/// Returns `None` only for an empty section list. Before the first boundary (or for NaN)
/// the pair is `(0, 0)`; at or past the last boundary it is `(last, last)`. `sections` are
/// assumed to be sorted by boundary.
pub fn interpolation_fraction(scroll_midpoint: f64, sections: &[Section]) -> Option<Bracket> {
    let last = sections.len().checked_sub(1)?;
    let hold = |i: usize| Bracket {
        from: i,
        to: i,
        t: 0.0,
    };

    if scroll_midpoint.is_nan() {
        return Some(hold(0));
    }

    let idx = sections.partition_point(|s| s.boundary <= scroll_midpoint);
    if idx == 0 {
        return Some(hold(0));
    }
    if idx > last {
        return Some(hold(last));
    }

    let (a, b) = (&sections[idx - 1], &sections[idx]);
    let span = b.boundary - a.boundary;
    let t = if span > 0.0 {
        clamp01((scroll_midpoint - a.boundary) / span)
    } else {
        0.0
    };
    Some(Bracket {
        from: idx - 1,
        to: idx,
        t,
    })
}

/// Background gradient for `scroll_midpoint`.
///
/// Linear per-channel blend between the two sections bracketing the midpoint, clamped at
/// both ends. An empty list yields [`DEFAULT_GRADIENT`]. Never fails.
pub fn compute_current_gradient(scroll_midpoint: f64, sections: &[Section]) -> Gradient {
    match interpolation_fraction(scroll_midpoint, sections) {
        None => DEFAULT_GRADIENT,
        Some(Bracket { from, to, t }) => {
            Gradient::lerp(&sections[from].gradient, &sections[to].gradient, t)
        }
    }
}

/// Check ids are present and unique and boundaries are valid and ascending.
pub(crate) fn validate_sections(sections: &[Section]) -> GradientResult<()> {
    let mut seen = BTreeSet::new();
    for s in sections {
        if s.id.trim().is_empty() {
            return Err(GradientError::config("section id must be non-empty"));
        }
        if !seen.insert(s.id.as_str()) {
            return Err(GradientError::config(format!(
                "duplicate section id '{}'",
                s.id
            )));
        }
        if !is_valid_offset(s.boundary) {
            return Err(GradientError::config(format!(
                "section '{}' boundary must be finite and >= 0, got {}",
                s.id, s.boundary
            )));
        }
    }
    validate_ascending(sections.iter().map(|s| (s.id.as_str(), s.boundary)))
        .map_err(GradientError::config)
}

pub(crate) fn validate_ascending<'a>(
    offsets: impl IntoIterator<Item = (&'a str, f64)>,
) -> Result<(), String> {
    let mut prev: Option<(&str, f64)> = None;
    for (id, offset) in offsets {
        match prev {
            Some((prev_id, prev_offset)) if offset < prev_offset => {
                return Err(format!(
                    "section '{id}' boundary {offset} is before '{prev_id}' boundary {prev_offset}"
                ));
            }
            _ => {}
        }
        prev = Some((id, offset));
    }
    Ok(())
}

/// A validated, ordered section table.
#[derive(Clone, Debug, Default)]
pub struct ScrollGradientInterpolator {
    sections: Vec<Section>,
}

impl ScrollGradientInterpolator {
    /// Validate and take ownership of `sections`.
    ///
    /// Ids must be unique and non-empty; boundaries must be finite, non-negative and
    /// ascending. An empty table is allowed and samples as [`DEFAULT_GRADIENT`].
    #[tracing::instrument(skip(sections), fields(count = sections.len()))]
    pub fn new(sections: Vec<Section>) -> GradientResult<Self> {
        validate_sections(&sections)?;
        tracing::debug!("section table ready");
        Ok(Self { sections })
    }

    /// Sections in boundary order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// See [`compute_current_gradient`].
    pub fn sample(&self, scroll_midpoint: f64) -> Gradient {
        compute_current_gradient(scroll_midpoint, &self.sections)
    }

    /// See [`interpolation_fraction`].
    pub fn bracket(&self, scroll_midpoint: f64) -> Option<Bracket> {
        interpolation_fraction(scroll_midpoint, &self.sections)
    }

    /// Replace boundary offsets in section order. Callers validate ordering first.
    pub(crate) fn set_boundaries(&mut self, offsets: &[f64]) {
        for (section, offset) in self.sections.iter_mut().zip(offsets) {
            section.boundary = *offset;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/interpolator.rs"]
mod tests;
