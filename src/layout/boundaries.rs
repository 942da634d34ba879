use std::collections::BTreeMap;

use crate::foundation::core::{Section, SectionBoundary};
use crate::foundation::error::{GradientError, GradientResult};
use crate::foundation::math::is_valid_offset;
use crate::interp::interpolator::validate_ascending;

/// Merge layout-measured offsets into the existing section order.
///
/// Returns the new boundary list, one entry per section. Sections without an update keep
/// their current offset; updates for unknown ids are skipped. Fails if an offset is not
/// finite and non-negative, or if the merged offsets are no longer ascending.
pub fn apply_boundaries(
    sections: &[Section],
    updates: &[SectionBoundary],
) -> GradientResult<Vec<f64>> {
    let index: BTreeMap<&str, usize> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.as_str(), i))
        .collect();

    let mut offsets: Vec<f64> = sections.iter().map(|s| s.boundary).collect();
    for u in updates {
        let Some(&i) = index.get(u.id.as_str()) else {
            tracing::debug!(id = %u.id, "ignoring boundary for unknown section");
            continue;
        };
        if !is_valid_offset(u.offset) {
            return Err(GradientError::layout(format!(
                "section '{}' offset must be finite and >= 0, got {}",
                u.id, u.offset
            )));
        }
        offsets[i] = u.offset;
    }

    validate_ascending(
        sections
            .iter()
            .zip(&offsets)
            .map(|(s, o)| (s.id.as_str(), *o)),
    )
    .map_err(GradientError::layout)?;
    Ok(offsets)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/boundaries.rs"]
mod tests;
