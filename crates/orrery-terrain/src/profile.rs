//! Layered terrain height synthesis on the unit sphere.
//!
//! Continents, oceans, masked ridged mountains and craters are each built from
//! fractal noise and joined with smooth min/max so the combined surface has no
//! creases where one layer takes over from another.

use glam::Vec3;

use crate::blend::{smooth_max, smooth_min};
use crate::crater::{Crater, crater_height};
use crate::noise_field::NoiseField;
use crate::shape::PlanetShape;

/// Number of octaves summed by [`TerrainProfile::layered_noise`].
pub const OCTAVES: u32 = 5;

/// Lower bound of the height multiplier; keeps extreme shapes from turning
/// the surface inside out.
pub const MIN_HEIGHT_MULTIPLIER: f32 = 1e-3;

/// Mountain-mask frequency relative to the mountain frequency.
const MASK_FREQUENCY_RATIO: f32 = 1.1;

/// Floor of the mountain mask, just above zero.
const MASK_FLOOR: f32 = 1e-6;

/// Evaluates terrain height for one planet.
///
/// Borrows everything it reads, so it is `Copy` and can be handed to any
/// number of worker threads at once.
#[derive(Clone, Copy)]
pub struct TerrainProfile<'a> {
    shape: &'a PlanetShape,
    noise: &'a NoiseField,
    craters: &'a [Crater],
}

impl<'a> TerrainProfile<'a> {
    /// Create a profile over a validated shape, a noise field and a crater set.
    pub fn new(shape: &'a PlanetShape, noise: &'a NoiseField, craters: &'a [Crater]) -> Self {
        Self {
            shape,
            noise,
            craters,
        }
    }

    /// Fractal Brownian motion: [`OCTAVES`] samples, doubling frequency and
    /// halving amplitude each round.
    pub fn layered_noise(&self, point: Vec3, amplitude: f32, frequency: f32) -> f32 {
        let mut total = 0.0;
        let mut amplitude = amplitude;
        let mut frequency = frequency;

        for _ in 0..OCTAVES {
            total += self.noise.sample(point * frequency) * amplitude;
            frequency *= 2.0;
            amplitude *= 0.5;
        }

        total
    }

    /// Folded fBm producing sharp crests where the underlying noise crosses zero.
    pub fn ridged_noise(&self, point: Vec3, amplitude: f32, frequency: f32) -> f32 {
        amplitude * 0.5 - self.layered_noise(point, amplitude, frequency).abs()
    }

    /// Continent layer: land above zero, oceans deepened below zero and
    /// softly clamped to the ocean floor.
    pub fn continent_height(&self, point: Vec3) -> f32 {
        let s = self.shape;
        let mut height = self.layered_noise(
            point,
            s.continent_amplitude,
            s.continent_frequency * s.frequency,
        );

        if height < 0.0 {
            height *= s.ocean_depth;
        }

        smooth_max(height, -s.ocean_floor_depth, s.ocean_smoothness)
    }

    /// Near-binary gate marking where mountains are allowed.
    pub fn mountain_mask(&self, point: Vec3) -> f32 {
        let s = self.shape;
        let mask = self.layered_noise(
            point,
            s.mountain_mask_amplitude,
            s.mountain_frequency * s.frequency * MASK_FREQUENCY_RATIO,
        );

        smooth_max(
            MASK_FLOOR,
            mask + s.mountain_mask_offset,
            s.mountain_mask_smoothness,
        )
    }

    /// Ridged mountains, kept non-negative and clipped to the mountain mask.
    pub fn mountain_height(&self, point: Vec3) -> f32 {
        let s = self.shape;
        let ridges = self.ridged_noise(
            point,
            s.mountain_amplitude,
            s.mountain_frequency * s.frequency,
        );
        let mountains = smooth_max(0.0, ridges, s.mountain_smoothness);

        smooth_min(self.mountain_mask(point), mountains, 0.0)
    }

    /// Combined contribution of every crater at `point`.
    pub fn crater_height(&self, point: Vec3) -> f32 {
        crater_height(point, self.craters, self.shape)
    }

    /// Radial scale factor for a unit-sphere point, before the planet radius.
    pub fn height_multiplier(&self, point: Vec3) -> f32 {
        let terrain = (self.continent_height(point) + self.mountain_height(point)) / 3.0
            + self.crater_height(point);

        (1.0 + terrain * self.shape.amplitude).max(MIN_HEIGHT_MULTIPLIER)
    }

    /// Move a unit-sphere point onto the planet surface.
    pub fn displace(&self, unit_point: Vec3) -> Vec3 {
        unit_point * (self.height_multiplier(unit_point) * self.shape.radius)
    }
}
