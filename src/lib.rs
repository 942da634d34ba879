//! Scroll-driven background gradients for sectioned pages.
//!
//! A page is a sequence of [`Section`]s, each starting at a boundary offset and painting a
//! three-stop [`Gradient`]. As the viewport midpoint moves through the page, the background
//! blends linearly between the two sections that bracket it.
//!
//! # Layers
//!
//! 1. **Core**: [`compute_current_gradient`], a pure function of `(midpoint, sections)`.
//! 2. **Adapter**: [`ScrollBackground`] feeds [`ScrollEvent`]s and [`SectionBoundary`]
//!    refreshes into the core and keeps the last result for the render pass.
//! 3. **Config**: [`GradientConfig`] loads JSON section tables and resolves them with a
//!    fallback chain so every gradient has exactly three colors.
//! 4. **Output**: [`Rgb8::to_css`] and [`Gradient::to_css_linear`] for CSS-style surfaces.
//!
//! The core never fails: malformed colors resolve to black, zero-height sections blend with
//! fraction 0, and an empty table paints [`DEFAULT_GRADIENT`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adapter;
mod color;
mod config;
mod foundation;
mod interp;
mod layout;

pub use adapter::scroll::ScrollBackground;
pub use color::css::DEFAULT_CSS_ANGLE_DEG;
pub use color::hex::ColorInput;
pub use config::model::{ConfigDiagnostic, GradientConfig, SectionConfig};
pub use foundation::core::{
    DEFAULT_GRADIENT, GRADIENT_STOPS, Gradient, Rgb8, ScrollEvent, Section, SectionBoundary,
};
pub use foundation::error::{GradientError, GradientResult};
pub use interp::interpolator::{
    Bracket, ScrollGradientInterpolator, compute_current_gradient, interpolation_fraction,
};
pub use interp::lerp::Lerp;
pub use layout::boundaries::apply_boundaries;
