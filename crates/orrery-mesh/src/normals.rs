//! Smooth per-vertex normals from triangle geometry.

use glam::Vec3;

/// Accumulated lengths below this are treated as "no normal".
const DEGENERATE_LENGTH: f32 = 1e-12;

/// Per-vertex normals plus how many needed a fallback.
#[derive(Clone, Debug, Default)]
pub struct VertexNormals {
    /// One unit normal per vertex.
    pub normals: Vec<Vec3>,
    /// Vertices whose accumulated normal vanished and were given the radial
    /// direction instead.
    pub degenerate: usize,
}

/// Area-weighted vertex normals.
///
/// Each triangle `(i1, i2, i3)` adds `(v2 - v1) × (v3 - v1)` to its three
/// vertices, so larger faces pull harder. Counter-clockwise triangles seen
/// from outside therefore give outward normals.
///
/// A vertex touched only by zero-area triangles (or by none) falls back to
/// the direction from the origin, or `+Y` for a vertex at the origin.
pub fn compute_vertex_normals(points: &[Vec3], indices: &[u32]) -> VertexNormals {
    let mut sums = vec![Vec3::ZERO; points.len()];

    for tri in indices.chunks_exact(3) {
        let (i1, i2, i3) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let v1 = points[i1];
        let face = (points[i2] - v1).cross(points[i3] - v1);

        sums[i1] += face;
        sums[i2] += face;
        sums[i3] += face;
    }

    let mut degenerate = 0;
    let normals = sums
        .into_iter()
        .zip(points)
        .map(|(sum, &p)| {
            if sum.length_squared() > DEGENERATE_LENGTH * DEGENERATE_LENGTH {
                sum.normalize()
            } else {
                degenerate += 1;
                p.try_normalize().unwrap_or(Vec3::Y)
            }
        })
        .collect();

    VertexNormals {
        normals,
        degenerate,
    }
}
