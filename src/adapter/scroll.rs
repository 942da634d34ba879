use crate::foundation::core::{Gradient, ScrollEvent, Section, SectionBoundary};
use crate::foundation::error::GradientResult;
use crate::interp::interpolator::ScrollGradientInterpolator;
use crate::layout::boundaries::apply_boundaries;

/// Event-loop adapter: feeds scroll and layout notifications into the interpolator and keeps
/// the most recent gradient for the render pass.
///
/// Every call overwrites the stored gradient; nothing else is retained between events.
#[derive(Clone, Debug)]
pub struct ScrollBackground {
    interp: ScrollGradientInterpolator,
    last_midpoint: f64,
    current: Gradient,
}

impl ScrollBackground {
    /// Validate `sections` and start at midpoint 0.
    pub fn new(sections: Vec<Section>) -> GradientResult<Self> {
        Ok(Self::from_interpolator(ScrollGradientInterpolator::new(
            sections,
        )?))
    }

    /// Wrap an already validated table.
    pub fn from_interpolator(interp: ScrollGradientInterpolator) -> Self {
        let current = interp.sample(0.0);
        Self {
            interp,
            last_midpoint: 0.0,
            current,
        }
    }

    /// Recompute for a scroll notification and return the new background.
    pub fn on_scroll(&mut self, event: ScrollEvent) -> Gradient {
        let midpoint = event.midpoint();
        self.last_midpoint = midpoint;
        self.current = self.interp.sample(midpoint);
        tracing::trace!(midpoint, gradient = ?self.current, "scroll");
        self.current
    }

    /// Apply freshly measured section offsets (mount/resize).
    ///
    /// On error the previous offsets and gradient are kept. On success the gradient is
    /// recomputed at the last seen midpoint.
    pub fn on_layout(&mut self, boundaries: &[SectionBoundary]) -> GradientResult<()> {
        let offsets = apply_boundaries(self.interp.sections(), boundaries)?;
        self.interp.set_boundaries(&offsets);
        self.current = self.interp.sample(self.last_midpoint);
        tracing::debug!(updates = boundaries.len(), "section boundaries refreshed");
        Ok(())
    }

    /// Gradient from the most recent computation.
    pub fn current(&self) -> Gradient {
        self.current
    }

    /// Midpoint of the most recent scroll event (0 before any event).
    pub fn last_midpoint(&self) -> f64 {
        self.last_midpoint
    }

    /// The underlying section table.
    pub fn interpolator(&self) -> &ScrollGradientInterpolator {
        &self.interp
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapter/scroll.rs"]
mod tests;
