//! Planet shape validation errors.

/// Reasons a [`crate::PlanetShape`] cannot be turned into a mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// The subdivision level was zero.
    #[error("resolution must be at least 1")]
    ZeroResolution,

    /// The subdivision level would overflow `u32` indices.
    #[error("resolution {resolution} exceeds the maximum of {max}")]
    ResolutionTooLarge { resolution: u32, max: u32 },

    /// The base radius was zero or negative.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    /// A smoothness parameter used as a blend width was zero.
    #[error("{0} must be non-zero")]
    ZeroSmoothness(&'static str),

    /// A parameter was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}
