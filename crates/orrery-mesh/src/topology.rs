//! Closed-manifold checks for generated sphere meshes.

use rustc_hash::FxHashMap;

/// Ways an index buffer can fail to describe a closed sphere.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// The index count is not a whole number of triangles.
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),

    /// An index points past the vertex buffer.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// An edge is not shared by exactly two triangles.
    #[error("edge ({a}, {b}) used by {uses} triangles, expected 2")]
    OpenEdge { a: u32, b: u32, uses: u32 },

    /// Two triangles traverse an edge in the same direction, so their
    /// windings disagree.
    #[error("directed edge {a} -> {b} used by {uses} triangles, expected 1")]
    FlippedEdge { a: u32, b: u32, uses: u32 },
}

/// Vertex count of a welded octahedron sphere at `resolution`.
pub fn expected_vertex_count(resolution: u32) -> usize {
    let r = resolution as usize;
    4 * r * r + 2
}

/// Triangle count of an octahedron sphere at `resolution`.
pub fn expected_triangle_count(resolution: u32) -> usize {
    let r = resolution as usize;
    8 * r * r
}

/// Count how many triangles use each undirected edge.
pub fn edge_use_counts(indices: &[u32]) -> FxHashMap<(u32, u32), u32> {
    let mut counts = FxHashMap::default();
    for tri in indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }
    counts
}

/// Count how many triangles traverse each directed edge `a -> b`.
fn directed_edge_counts(indices: &[u32]) -> FxHashMap<(u32, u32), u32> {
    let mut counts = FxHashMap::default();
    for tri in indices.chunks_exact(3) {
        for edge in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}

/// Verify `indices` describes a watertight, consistently wound mesh over
/// `vertex_count` vertices.
///
/// Every undirected edge must be shared by exactly two triangles, and those
/// two must traverse it in opposite directions.
pub fn check_closed_manifold(indices: &[u32], vertex_count: usize) -> Result<(), TopologyError> {
    if indices.len() % 3 != 0 {
        return Err(TopologyError::PartialTriangle(indices.len()));
    }

    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(TopologyError::IndexOutOfRange {
            index,
            vertex_count,
        });
    }

    let mut open: Vec<_> = edge_use_counts(indices)
        .into_iter()
        .filter(|&(_, uses)| uses != 2)
        .collect();
    open.sort_unstable();

    if let Some(&((a, b), uses)) = open.first() {
        return Err(TopologyError::OpenEdge { a, b, uses });
    }

    let mut flipped: Vec<_> = directed_edge_counts(indices)
        .into_iter()
        .filter(|&(_, uses)| uses != 1)
        .collect();
    flipped.sort_unstable();

    match flipped.first() {
        Some(&((a, b), uses)) => Err(TopologyError::FlippedEdge { a, b, uses }),
        None => Ok(()),
    }
}
