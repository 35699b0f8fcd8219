//! Planet generation error types.

use orrery_terrain::ShapeError;

/// Errors that abort a single generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The planet shape violates an invariant.
    #[error("invalid planet configuration: {0}")]
    InvalidConfiguration(#[from] ShapeError),

    /// The displacement worker pool could not be started.
    #[error("failed to start terrain workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// A body hierarchy refers to missing parents, loops, or has a bad orbit.
    #[error("invalid planet system: {0}")]
    InvalidSystem(String),
}
