//! Procedural planet terrain: seeded noise, layered height synthesis, craters and shape presets.

mod blend;
mod crater;
mod error;
mod noise_field;
mod profile;
mod shape;

pub mod seed;

pub use blend::{smooth_max, smooth_min};
pub use crater::{Crater, MAX_CRATER_RADIUS, crater_height, generate_craters, random_point_on_sphere};
pub use error::ShapeError;
pub use noise_field::NoiseField;
pub use profile::{MIN_HEIGHT_MULTIPLIER, OCTAVES, TerrainProfile};
pub use shape::{MAX_RESOLUTION, PlanetShape};
