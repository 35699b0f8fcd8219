//! Interleaved position + normal vertex format handed to the renderer.

use glam::Vec3;

/// One output vertex: position then normal, six contiguous `f32`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlanetVertex {
    /// World-space position (planet-local, centered on the origin).
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(PlanetVertex, [f32; 6]);

/// Floats per [`PlanetVertex`].
pub const FLOATS_PER_VERTEX: usize = 6;

impl PlanetVertex {
    /// Construct a vertex from glam vectors.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    /// Position as a glam vector.
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a glam vector.
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Zip positions and normals into interleaved vertices.
///
/// # Panics
///
/// Panics if the two slices differ in length.
pub fn interleave(positions: &[Vec3], normals: &[Vec3]) -> Vec<PlanetVertex> {
    assert_eq!(
        positions.len(),
        normals.len(),
        "every position needs exactly one normal"
    );
    positions
        .iter()
        .zip(normals)
        .map(|(&p, &n)| PlanetVertex::new(p, n))
        .collect()
}

/// Finished planet mesh, immutable once built.
#[derive(Clone, Debug, Default)]
pub struct PlanetMesh {
    /// Interleaved vertex buffer.
    pub vertices: Vec<PlanetVertex>,
    /// Triangle list into `vertices`.
    pub indices: Vec<u32>,
    /// Vertices that needed the radial fallback normal.
    pub degenerate_normals: usize,
    /// Seed the terrain was generated from.
    pub seed: u64,
}

impl PlanetMesh {
    /// Vertex data as a flat float slice, [`FLOATS_PER_VERTEX`] per vertex.
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Vertex data as bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Smallest and largest vertex distance from the planet center.
    ///
    /// Returns `None` for an empty mesh.
    pub fn radius_range(&self) -> Option<(f32, f32)> {
        self.vertices
            .iter()
            .map(|v| v.position().length())
            .fold(None, |acc, r| match acc {
                None => Some((r, r)),
                Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
            })
    }
}
