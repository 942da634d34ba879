pub(crate) mod interpolator;
pub(crate) mod lerp;
