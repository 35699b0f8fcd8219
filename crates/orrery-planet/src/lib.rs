//! Planet generation: drives sphere meshing and terrain synthesis into GPU-ready buffers.

mod displace;
mod error;
mod generator;

pub mod system;

pub use displace::{displace_points, share_len};
pub use error::GenerationError;
pub use generator::{DEFAULT_WORKERS, GenerationOptions, TerrainGenerator, generate_planet};
pub use orrery_mesh::{PlanetMesh, PlanetVertex};
pub use orrery_terrain::PlanetShape;
pub use system::{BodySpec, GeneratedBody, OrbitSpec, generate_system, initial_orbit_offset};
