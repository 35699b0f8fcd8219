//! Sphere meshing: octahedron subdivision, vertex welding, normals and the packed output format.

pub mod normals;
pub mod octahedron;
pub mod topology;
pub mod vertex;
pub mod weld;

pub use normals::{VertexNormals, compute_vertex_normals};
pub use octahedron::{RawSphere, build_octahedron_sphere};
pub use topology::{
    TopologyError, check_closed_manifold, edge_use_counts, expected_triangle_count,
    expected_vertex_count,
};
pub use vertex::{FLOATS_PER_VERTEX, PlanetMesh, PlanetVertex, interleave};
pub use weld::{WELD_DECIMALS, WELD_TOLERANCE, WeldKey, WeldedMesh, weld_vertices};
