//! Parallel terrain displacement over disjoint, contiguous point ranges.

use glam::Vec3;
use orrery_terrain::TerrainProfile;
use rayon::ThreadPool;
use rayon::prelude::*;

/// Points handled by each worker: `ceil(point_count / workers)`, at least 1.
pub fn share_len(point_count: usize, workers: usize) -> usize {
    point_count.div_ceil(workers.max(1)).max(1)
}

/// Replace every unit-sphere point with its displaced surface position.
///
/// The slice is cut into `workers` contiguous shares; each share is written by
/// exactly one task and no task reads another point. Returns once every share
/// is done, so callers can rely on all points being final.
pub fn displace_points(
    pool: &ThreadPool,
    points: &mut [Vec3],
    profile: &TerrainProfile<'_>,
    workers: usize,
) {
    let share = share_len(points.len(), workers);

    pool.install(|| {
        points.par_chunks_mut(share).for_each(|chunk| {
            for point in chunk {
                *point = profile.displace(*point);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_terrain::{NoiseField, PlanetShape};

    fn pool(threads: usize) -> ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
    }

    #[test]
    fn test_share_len() {
        assert_eq!(share_len(100, 20), 5);
        assert_eq!(share_len(101, 20), 6);
        assert_eq!(share_len(3, 20), 1);
        assert_eq!(share_len(0, 20), 1);
        assert_eq!(share_len(10, 0), 10);
    }

    #[test]
    fn test_every_point_displaced() {
        let shape = PlanetShape::smooth_sphere(3.0, 1);
        let noise = NoiseField::new(1);
        let profile = TerrainProfile::new(&shape, &noise, &[]);
        let mut points: Vec<Vec3> = (0..1001)
            .map(|i| Vec3::new(1.0, i as f32 * 0.01, 0.0).normalize())
            .collect();

        displace_points(&pool(4), &mut points, &profile, 7);

        for p in &points {
            assert!((p.length() - 3.0).abs() < 1e-5, "Point {p} not displaced");
        }
    }

    #[test]
    fn test_worker_count_does_not_change_result() {
        let shape = PlanetShape::earth();
        let noise = NoiseField::new(2);
        let profile = TerrainProfile::new(&shape, &noise, &[]);
        let original: Vec<Vec3> = (0..777)
            .map(|i| {
                let t = i as f32 * 0.1;
                Vec3::new(t.cos(), t.sin(), 0.3).normalize()
            })
            .collect();

        let mut single = original.clone();
        displace_points(&pool(1), &mut single, &profile, 1);
        let mut many = original;
        displace_points(&pool(8), &mut many, &profile, 20);

        assert_eq!(single, many);
    }
}
