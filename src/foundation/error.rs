/// Result alias used by every fallible API in this crate.
pub type GradientResult<T> = Result<T, GradientError>;

/// Errors raised by the configuration, validation and layout layers.
///
/// The interpolation core itself never fails; see [`crate::compute_current_gradient`].
#[derive(thiserror::Error, Debug)]
pub enum GradientError {
    /// Structural problem in a section table (ids, ordering, offsets).
    #[error("config error: {0}")]
    Config(String),

    /// A layout refresh that would break section ordering or carries invalid offsets.
    #[error("layout error: {0}")]
    Layout(String),

    /// A color that failed strict parsing.
    #[error("color error: {0}")]
    Color(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GradientError {
    /// Build a [`GradientError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GradientError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`GradientError::Color`].
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`GradientError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
