//! Planet shape definition: the full recipe for one planet's geometry and terrain.

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Highest accepted subdivision level.
///
/// The raw (pre-weld) mesh holds `4 * (res + 1) * (res + 2)` points, which must
/// stay addressable by `u32` indices.
pub const MAX_RESOLUTION: u32 = 16_384;

/// Recipe describing a planet's size, tessellation and terrain.
///
/// Amplitudes are relative to the base radius: a total height term of `0.1`
/// with `amplitude = 1.0` raises the surface by 10% of `radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetShape {
    /// Base sphere radius in world units. Must be positive.
    pub radius: f32,
    /// Octahedron subdivision level per face. Must be at least 1.
    pub resolution: u32,
    /// Global scale applied to the combined terrain height.
    pub amplitude: f32,
    /// Global frequency multiplier applied to every noise layer.
    pub frequency: f32,

    /// Multiplier applied to negative continent heights to deepen oceans.
    pub ocean_depth: f32,
    /// Deepest allowed ocean floor (as a positive depth).
    pub ocean_floor_depth: f32,
    /// Blend width where oceans meet the floor clamp.
    pub ocean_smoothness: f32,

    /// Base amplitude of the continent fBm layer.
    pub continent_amplitude: f32,
    /// Base frequency of the continent fBm layer.
    pub continent_frequency: f32,

    /// Base amplitude of the ridged mountain layer.
    pub mountain_amplitude: f32,
    /// Base frequency of the ridged mountain layer.
    pub mountain_frequency: f32,
    /// Blend width where mountains meet flat ground.
    pub mountain_smoothness: f32,

    /// Amplitude of the noise deciding where mountains may appear.
    pub mountain_mask_amplitude: f32,
    /// Blend width of the mountain mask edge.
    pub mountain_mask_smoothness: f32,
    /// Offset added to the mask noise; more negative means fewer mountains.
    pub mountain_mask_offset: f32,

    /// Number of impact craters scattered over the surface.
    pub num_craters: u32,
    /// Width of the raised rim outside the cavity, relative to crater radius.
    pub crater_rim_width: f32,
    /// Height scale of the rim.
    pub crater_rim_steepness: f32,
    /// Blend width between cavity, floor and rim.
    pub crater_smoothness: f32,
    /// Flat floor level of the cavity.
    pub crater_floor_height: f32,
}

impl Default for PlanetShape {
    fn default() -> Self {
        Self::earth()
    }
}

impl PlanetShape {
    /// Earth-like preset: deep oceans, masked mountain ranges, no craters.
    pub fn earth() -> Self {
        Self {
            radius: 1.0,
            resolution: 100,
            amplitude: 1.0,
            frequency: 1.0,

            ocean_depth: 7.0,
            ocean_floor_depth: 0.4,
            ocean_smoothness: 0.8,

            continent_amplitude: 0.15,
            continent_frequency: 1.0,

            mountain_amplitude: 1.5,
            mountain_frequency: 0.75,
            mountain_smoothness: 0.5,

            mountain_mask_amplitude: 1.1,
            mountain_mask_smoothness: 0.4,
            mountain_mask_offset: -0.5,

            num_craters: 0,
            crater_rim_width: 0.7,
            crater_rim_steepness: 0.4,
            crater_smoothness: 0.3,
            crater_floor_height: -0.3,
        }
    }

    /// Moon-like preset: no oceans to speak of, low rolling hills, 40 craters.
    pub fn moon() -> Self {
        Self {
            ocean_depth: 1.0,
            ocean_floor_depth: 10.0,
            ocean_smoothness: 0.05,

            mountain_amplitude: 1.1,
            mountain_frequency: 0.1,
            mountain_smoothness: 0.1,

            mountain_mask_amplitude: 1.1,
            mountain_mask_smoothness: 0.1,
            mountain_mask_offset: -0.1,

            num_craters: 40,
            ..Self::earth()
        }
    }

    /// A plain sphere: terrain layers keep their defaults but the global
    /// amplitude is zero, so every vertex lands exactly on `radius`.
    pub fn smooth_sphere(radius: f32, resolution: u32) -> Self {
        Self {
            radius,
            resolution,
            amplitude: 0.0,
            num_craters: 0,
            ..Self::earth()
        }
    }

    /// Check every invariant the generator relies on.
    ///
    /// Rejects configurations that would otherwise surface as NaN or Inf deep
    /// inside the pipeline.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.resolution == 0 {
            return Err(ShapeError::ZeroResolution);
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(ShapeError::ResolutionTooLarge {
                resolution: self.resolution,
                max: MAX_RESOLUTION,
            });
        }

        for (name, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(ShapeError::NonFinite { field: name, value });
            }
        }

        if self.radius <= 0.0 {
            return Err(ShapeError::NonPositiveRadius(self.radius));
        }

        for (name, value) in [
            ("ocean_smoothness", self.ocean_smoothness),
            ("mountain_smoothness", self.mountain_smoothness),
            ("mountain_mask_smoothness", self.mountain_mask_smoothness),
            ("crater_smoothness", self.crater_smoothness),
        ] {
            if value == 0.0 {
                return Err(ShapeError::ZeroSmoothness(name));
            }
        }

        Ok(())
    }

    fn float_fields(&self) -> [(&'static str, f32); 18] {
        [
            ("radius", self.radius),
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("ocean_depth", self.ocean_depth),
            ("ocean_floor_depth", self.ocean_floor_depth),
            ("ocean_smoothness", self.ocean_smoothness),
            ("continent_amplitude", self.continent_amplitude),
            ("continent_frequency", self.continent_frequency),
            ("mountain_amplitude", self.mountain_amplitude),
            ("mountain_frequency", self.mountain_frequency),
            ("mountain_smoothness", self.mountain_smoothness),
            ("mountain_mask_amplitude", self.mountain_mask_amplitude),
            ("mountain_mask_smoothness", self.mountain_mask_smoothness),
            ("mountain_mask_offset", self.mountain_mask_offset),
            ("crater_rim_width", self.crater_rim_width),
            ("crater_rim_steepness", self.crater_rim_steepness),
            ("crater_smoothness", self.crater_smoothness),
            ("crater_floor_height", self.crater_floor_height),
        ]
    }
}
