//! Octahedron subdivision: a near-uniform triangulated sphere built face by face.
//!
//! ```text
//!  i                 B                  0
//!  0                / \                / \
//!  1              BA---BC             1---2
//!  2             / \ / \ / \         / \ / \
//!  3            A---o---o---C       3---4---5
//! ```
//!
//! Row `i` holds `i + 1` points running from the `B→C` edge (`k = 0`) to the
//! `B→A` edge (`k = i`). Rows are emitted back to back, which is what makes
//! the index arithmetic in [`subdivide_face`] valid.

use glam::Vec3;

/// The six octahedron corners.
pub const OCTAHEDRON_CORNERS: [Vec3; 6] = [
    Vec3::Y,
    Vec3::X,
    Vec3::Z,
    Vec3::NEG_X,
    Vec3::NEG_Z,
    Vec3::NEG_Y,
];

/// Corner indices `(A, B, C)` of the eight faces. Each face comes out
/// counter-clockwise when viewed from outside.
pub const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    // Top
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 1],
    // Bottom
    [5, 2, 1],
    [5, 3, 2],
    [5, 4, 3],
    [5, 1, 4],
];

/// Unwelded sphere mesh: every face owns its own copy of the seam points.
#[derive(Clone, Debug, Default)]
pub struct RawSphere {
    /// Points, face by face.
    pub points: Vec<Vec3>,
    /// Triangle list into `points`.
    pub indices: Vec<u32>,
}

impl RawSphere {
    /// Project every point onto the unit sphere.
    pub fn normalize(&mut self) {
        for p in &mut self.points {
            *p = p.normalize();
        }
    }
}

/// Number of points one subdivided face contributes.
pub fn points_per_face(resolution: u32) -> usize {
    let r = resolution as usize;
    (r + 1) * (r + 2) / 2
}

/// Number of triangles one subdivided face contributes.
pub fn triangles_per_face(resolution: u32) -> usize {
    let r = resolution as usize;
    r * r
}

/// Subdivide all eight octahedron faces at `resolution` and project the
/// result onto the unit sphere.
///
/// # Panics
///
/// Panics if `resolution` is zero.
pub fn build_octahedron_sphere(resolution: u32) -> RawSphere {
    assert!(resolution > 0, "resolution must be at least 1");

    let mut sphere = RawSphere {
        points: Vec::with_capacity(points_per_face(resolution) * OCTAHEDRON_FACES.len()),
        indices: Vec::with_capacity(triangles_per_face(resolution) * 3 * OCTAHEDRON_FACES.len()),
    };

    for [a, b, c] in OCTAHEDRON_FACES {
        subdivide_face(
            OCTAHEDRON_CORNERS[a],
            OCTAHEDRON_CORNERS[b],
            OCTAHEDRON_CORNERS[c],
            resolution,
            &mut sphere,
        );
    }

    sphere.normalize();
    sphere
}

/// Append one subdivided triangle `(a, b, c)` to `out`, numbering its points
/// after the ones already present.
fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, resolution: u32, out: &mut RawSphere) {
    let res = resolution as f32;
    let mut index = out.points.len() as u32;

    for i in 0..=resolution {
        let t = i as f32 / res;
        let ba = lerp(b, c, t);
        let bc = lerp(b, a, t);

        for k in 0..=i {
            let fraction = if i == 0 { 0.0 } else { k as f32 / i as f32 };
            out.points.push(lerp(ba, bc, fraction));

            if i < resolution {
                out.indices.extend_from_slice(&[index, index + i + 2, index + i + 1]);
                if k < i {
                    out.indices.extend_from_slice(&[index, index + 1, index + i + 2]);
                }
            }

            index += 1;
        }
    }
}

/// Written out rather than `Vec3::lerp` so that `t = 1` lands exactly on `b`.
#[inline]
fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_resolution() {
        for res in [1, 2, 3, 7, 16] {
            let sphere = build_octahedron_sphere(res);
            assert_eq!(sphere.points.len(), 8 * points_per_face(res));
            assert_eq!(sphere.indices.len(), 8 * triangles_per_face(res) * 3);
        }
    }

    #[test]
    fn test_resolution_one_is_octahedron() {
        let sphere = build_octahedron_sphere(1);
        assert_eq!(sphere.points.len(), 24);
        assert_eq!(sphere.indices.len(), 24);
        for p in &sphere.points {
            assert!(
                OCTAHEDRON_CORNERS.contains(p),
                "Resolution 1 should only emit corners, got {p}"
            );
        }
    }

    #[test]
    fn test_points_on_unit_sphere() {
        let sphere = build_octahedron_sphere(9);
        for p in &sphere.points {
            assert!((p.length() - 1.0).abs() < 1e-6, "Point {p} off unit sphere");
        }
    }

    #[test]
    fn test_indices_stay_inside_their_face() {
        let res = 5;
        let sphere = build_octahedron_sphere(res);
        let per_face = points_per_face(res) as u32;
        for tri in sphere.indices.chunks_exact(3) {
            let face = tri[0] / per_face;
            assert!(
                tri.iter().all(|&i| i / per_face == face),
                "Triangle {tri:?} spans two faces"
            );
        }
    }

    #[test]
    fn test_triangles_wind_outward() {
        let sphere = build_octahedron_sphere(6);
        for tri in sphere.indices.chunks_exact(3) {
            let [p1, p2, p3] = [0, 1, 2].map(|j| sphere.points[tri[j] as usize]);
            let normal = (p2 - p1).cross(p3 - p1);
            let center = (p1 + p2 + p3) / 3.0;
            assert!(
                normal.dot(center) > 0.0,
                "Triangle {tri:?} faces inward"
            );
        }
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Vec3::new(0.3, -0.7, 0.1);
        let b = Vec3::new(-0.9, 0.2, 0.6);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    #[should_panic(expected = "resolution must be at least 1")]
    fn test_zero_resolution_panics() {
        build_octahedron_sphere(0);
    }
}
