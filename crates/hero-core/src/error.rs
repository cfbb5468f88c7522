//! Construction-time validation errors.
//!
//! Per-frame code never fails; everything it computes is clamped back into
//! range instead. These errors only come out of building a scene.

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("smooth radius {radius} must be in (0, {half_extent})")]
    SmoothRadiusOutOfRange { radius: f32, half_extent: f32 },

    #[error("half extent must be positive, got {0}")]
    NonPositiveHalfExtent(f32),

    #[error("rounded box needs at least one subdivision per edge")]
    NoSubdivisions,

    #[error("scale `{field}` must be a positive finite number, got {value}")]
    NonPositiveScale { field: &'static str, value: f32 },

    #[error("entrance duration must be non-zero")]
    ZeroDuration,

    #[error("config validation error: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, SceneError>;
