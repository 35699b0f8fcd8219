//! Vertex welding: merge the seam points each octahedron face generated independently.
//!
//! Positions are compared through a quantised integer key rather than raw
//! float bits, because the same seam point interpolated from two neighbouring
//! faces can differ in the last bit.

use glam::Vec3;
use rustc_hash::FxHashMap;

/// Decimal digits kept per coordinate when building a weld key.
pub const WELD_DECIMALS: i32 = 6;

/// `10^WELD_DECIMALS`: quantisation cells per world unit.
const WELD_SCALE: f64 = pow10(WELD_DECIMALS);

/// Size of one quantisation cell; also the weld tolerance per axis.
pub const WELD_TOLERANCE: f32 = (1.0 / WELD_SCALE) as f32;

const fn pow10(exp: i32) -> f64 {
    let mut value = 1.0;
    let mut i = 0;
    while i < exp {
        value *= 10.0;
        i += 1;
    }
    value
}

/// Integer key of a quantised position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WeldKey([i64; 3]);

impl WeldKey {
    /// Round each coordinate to [`WELD_DECIMALS`] digits.
    pub fn of(p: Vec3) -> Self {
        let q = |v: f32| (v as f64 * WELD_SCALE).round() as i64;
        Self([q(p.x), q(p.y), q(p.z)])
    }

    fn offset(self, dx: i64, dy: i64, dz: i64) -> Self {
        let [x, y, z] = self.0;
        Self([x + dx, y + dy, z + dz])
    }
}

/// Result of welding: compact shared-vertex mesh.
#[derive(Clone, Debug, Default)]
pub struct WeldedMesh {
    /// Unique points, in first-referenced order.
    pub points: Vec<Vec3>,
    /// Triangle list into `points`.
    pub indices: Vec<u32>,
}

/// Merge vertices whose positions agree within [`WELD_TOLERANCE`].
///
/// Walks `indices` in order; the first occurrence of a position claims the
/// next compact index. Input points that no triangle references are dropped.
///
/// # Panics
///
/// Panics if an index is out of range for `points`.
pub fn weld_vertices(points: &[Vec3], indices: &[u32]) -> WeldedMesh {
    let mut lookup: FxHashMap<WeldKey, u32> = FxHashMap::default();
    lookup.reserve(points.len() / 2);

    let mut welded = WeldedMesh {
        points: Vec::with_capacity(points.len() / 2),
        indices: Vec::with_capacity(indices.len()),
    };

    for &old in indices {
        let p = points[old as usize];
        let key = WeldKey::of(p);

        let new = match lookup.get(&key) {
            Some(&existing) => existing,
            None => match find_neighbor(&lookup, &welded.points, key, p) {
                Some(existing) => existing,
                None => {
                    let new = welded.points.len() as u32;
                    welded.points.push(p);
                    lookup.insert(key, new);
                    new
                }
            },
        };

        welded.indices.push(new);
    }

    welded
}

/// Probe the 26 cells around `key` for a point within tolerance of `p`.
///
/// Catches two copies of a point that round to adjacent cells.
fn find_neighbor(
    lookup: &FxHashMap<WeldKey, u32>,
    points: &[Vec3],
    key: WeldKey,
    p: Vec3,
) -> Option<u32> {
    for dx in -1..=1 {
        for dy in -1..=1 {
            for dz in -1..=1 {
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }
                if let Some(&candidate) = lookup.get(&key.offset(dx, dy, dz)) {
                    let delta = (points[candidate as usize] - p).abs();
                    if delta.max_element() <= WELD_TOLERANCE {
                        return Some(candidate);
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octahedron::build_octahedron_sphere;

    #[test]
    fn test_scale_and_tolerance_follow_decimals() {
        assert_eq!(WELD_SCALE, 10f64.powi(WELD_DECIMALS));
        assert!((WELD_TOLERANCE as f64 - 10f64.powi(-WELD_DECIMALS)).abs() < 1e-12);
        assert_eq!(pow10(0), 1.0);
        assert_eq!(pow10(3), 1000.0);
    }

    #[test]
    fn test_key_resolution_is_one_cell() {
        let a = Vec3::new(0.25, -0.5, 0.75);
        let step = 1.0 / WELD_SCALE as f32;
        let [x0, y0, z0] = WeldKey::of(a).0;
        let [x1, y1, z1] = WeldKey::of(a + Vec3::new(step, 0.0, -step)).0;
        assert_eq!((x1 - x0, y1 - y0, z1 - z0), (1, 0, -1));
    }

    #[test]
    fn test_exact_duplicates_merge() {
        let points = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::X, Vec3::Z, Vec3::NEG_Y];
        let indices = [0, 1, 2, 3, 4, 5];
        let welded = weld_vertices(&points, &indices);
        assert_eq!(welded.points, vec![Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_Y]);
        assert_eq!(welded.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_last_bit_noise_merges() {
        let a = Vec3::new(0.577_350_3, 0.577_350_3, 0.577_350_3);
        let b = Vec3::new(
            f32::from_bits(a.x.to_bits() + 1),
            a.y,
            f32::from_bits(a.z.to_bits() - 1),
        );
        let welded = weld_vertices(&[a, b, Vec3::X], &[0, 2, 1]);
        assert_eq!(welded.points.len(), 2);
        assert_eq!(welded.indices, vec![0, 1, 0]);
    }

    #[test]
    fn test_values_straddling_a_cell_boundary_merge() {
        let a = Vec3::new(0.100_000_45, 0.2, 0.3);
        let b = Vec3::new(0.100_000_55, 0.2, 0.3);
        assert_ne!(WeldKey::of(a), WeldKey::of(b));
        let welded = weld_vertices(&[a, b], &[0, 1]);
        assert_eq!(welded.points.len(), 1);
        assert_eq!(welded.indices, vec![0, 0]);
    }

    #[test]
    fn test_distinct_points_kept() {
        let a = Vec3::new(0.1, 0.2, 0.3);
        let b = Vec3::new(0.1, 0.2, 0.300_01);
        let welded = weld_vertices(&[a, b], &[0, 1]);
        assert_eq!(welded.points.len(), 2);
    }

    #[test]
    fn test_unreferenced_points_dropped() {
        let welded = weld_vertices(&[Vec3::X, Vec3::Y, Vec3::Z], &[2, 0, 2]);
        assert_eq!(welded.points, vec![Vec3::Z, Vec3::X]);
        assert_eq!(welded.indices, vec![0, 1, 0]);
    }

    #[test]
    fn test_welded_sphere_counts() {
        for res in [1_u32, 2, 3, 8, 10, 33] {
            let raw = build_octahedron_sphere(res);
            let welded = weld_vertices(&raw.points, &raw.indices);
            let r = res as usize;
            assert_eq!(welded.points.len(), 4 * r * r + 2, "res {res}");
            assert_eq!(welded.indices.len(), raw.indices.len());
            assert!(welded.points.len() <= raw.points.len());
        }
    }

    #[test]
    fn test_no_two_welded_points_within_tolerance() {
        let raw = build_octahedron_sphere(12);
        let welded = weld_vertices(&raw.points, &raw.indices);
        let mut keys: Vec<WeldKey> = welded.points.iter().map(|&p| WeldKey::of(p)).collect();
        let count = keys.len();
        keys.sort_by_key(|k| k.0);
        keys.dedup();
        assert_eq!(keys.len(), count, "Two welded points share a weld key");
    }
}
