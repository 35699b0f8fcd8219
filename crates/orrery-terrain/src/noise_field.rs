//! Seeded 3D gradient noise, the single-sample primitive behind every terrain layer.

use glam::Vec3;
use noise::{NoiseFn, Simplex};

/// Deterministic 3D simplex noise.
///
/// The permutation table is built once in [`NoiseField::new`] and only read
/// afterwards, so one field can be shared by reference across worker threads.
#[derive(Clone, Debug)]
pub struct NoiseField {
    simplex: Simplex,
    seed: u32,
}

impl NoiseField {
    /// Build a noise field for the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
            seed,
        }
    }

    /// Sample the field at `point`. Output lies approximately in `[-1, 1]`.
    #[inline]
    pub fn sample(&self, point: Vec3) -> f32 {
        self.simplex
            .get([point.x as f64, point.y as f64, point.z as f64]) as f32
    }

    /// The seed this field was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}
