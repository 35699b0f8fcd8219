//! Planet mesh generation pipeline.
//!
//! Octahedron sphere → weld → craters → parallel terrain displacement →
//! normals → interleaved vertex buffer. Every stage finishes before the next
//! starts.

use std::time::Instant;

use orrery_mesh::{
    PlanetMesh, build_octahedron_sphere, compute_vertex_normals, interleave, weld_vertices,
};
use orrery_terrain::{NoiseField, PlanetShape, TerrainProfile, generate_craters, seed};
use rayon::ThreadPool;
use tracing::{debug, info, warn};

use crate::displace::displace_points;
use crate::error::GenerationError;

/// Displacement worker count when none is configured.
pub const DEFAULT_WORKERS: usize = 20;

/// Knobs that affect how (not what) a planet is generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Terrain seed. `None` draws a fresh one per call.
    pub seed: Option<u64>,
    /// Displacement worker count. `0` means one per logical CPU.
    pub workers: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            seed: None,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl GenerationOptions {
    /// Options with a fixed seed, for reproducible planets.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Replace the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Worker count with `0` resolved to the number of logical CPUs.
    pub fn resolved_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }
}

/// Builds planet meshes. Owns the worker pool, so create one and reuse it.
pub struct TerrainGenerator {
    options: GenerationOptions,
    workers: usize,
    pool: ThreadPool,
}

impl TerrainGenerator {
    /// Create a generator and start its worker pool.
    pub fn new(options: GenerationOptions) -> Result<Self, GenerationError> {
        let workers = options.resolved_workers();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("terrain-worker-{i}"))
            .build()?;

        debug!("Started {workers} terrain workers");

        Ok(Self {
            options,
            workers,
            pool,
        })
    }

    /// Number of displacement workers.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Generate one planet mesh.
    ///
    /// Rejects invalid shapes before doing any work. The seed actually used is
    /// returned in [`PlanetMesh::seed`].
    pub fn generate(&self, shape: &PlanetShape) -> Result<PlanetMesh, GenerationError> {
        shape.validate()?;

        let seed = self.options.seed.unwrap_or_else(seed::random_seed);
        let start = Instant::now();

        let raw = build_octahedron_sphere(shape.resolution);
        debug!(
            "Subdivided octahedron at resolution {}: {} points, {} triangles",
            shape.resolution,
            raw.points.len(),
            raw.indices.len() / 3
        );

        let welded = weld_vertices(&raw.points, &raw.indices);
        drop(raw);
        debug!("Welded down to {} vertices", welded.points.len());

        let craters = generate_craters(shape.num_craters, &mut seed::crater_rng(seed));
        let noise = NoiseField::new(seed::noise_seed(seed));
        debug!(
            "Placed {} craters, noise seed {:#010x}",
            craters.len(),
            noise.seed()
        );
        let profile = TerrainProfile::new(shape, &noise, &craters);

        let mut points = welded.points;
        let displace_start = Instant::now();
        displace_points(&self.pool, &mut points, &profile, self.workers);
        debug!(
            "Displaced {} points with {} workers in {:.1} ms",
            points.len(),
            self.workers,
            displace_start.elapsed().as_secs_f64() * 1000.0
        );

        let normals = compute_vertex_normals(&points, &welded.indices);
        if normals.degenerate > 0 {
            warn!(
                "{} vertices had no usable face normal; using radial fallback",
                normals.degenerate
            );
        }

        let mesh = PlanetMesh {
            vertices: interleave(&points, &normals.normals),
            indices: welded.indices,
            degenerate_normals: normals.degenerate,
            seed,
        };

        info!(
            "Generated planet (seed {seed}): {} vertices, {} triangles, {} craters in {:.1} ms",
            mesh.vertex_count(),
            mesh.triangle_count(),
            craters.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(mesh)
    }
}

/// Generate a planet with default options (random seed, default workers).
pub fn generate_planet(shape: &PlanetShape) -> Result<PlanetMesh, GenerationError> {
    TerrainGenerator::new(GenerationOptions::default())?.generate(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_terrain::ShapeError;

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.seed, None);
        assert_eq!(options.resolved_workers(), DEFAULT_WORKERS);
    }

    #[test]
    fn test_zero_workers_resolves_to_cpu_count() {
        let options = GenerationOptions::default().with_workers(0);
        assert!(options.resolved_workers() >= 1);
    }

    #[test]
    fn test_invalid_shape_rejected_before_work() {
        let generator = TerrainGenerator::new(GenerationOptions::seeded(1)).unwrap();
        let shape = PlanetShape {
            radius: -1.0,
            ..PlanetShape::smooth_sphere(1.0, 2)
        };
        let err = generator.generate(&shape).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidConfiguration(ShapeError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn test_seed_reported_and_reused() {
        let generator = TerrainGenerator::new(GenerationOptions::seeded(77)).unwrap();
        let shape = PlanetShape {
            resolution: 6,
            ..PlanetShape::moon()
        };
        let a = generator.generate(&shape).unwrap();
        let b = generator.generate(&shape).unwrap();
        assert_eq!(a.seed, 77);
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn test_random_seed_recorded() {
        let shape = PlanetShape {
            resolution: 4,
            ..PlanetShape::earth()
        };
        let first = generate_planet(&shape).unwrap();
        let generator = TerrainGenerator::new(GenerationOptions::seeded(first.seed)).unwrap();
        let again = generator.generate(&shape).unwrap();
        assert_eq!(first.vertices, again.vertices);
    }
}
