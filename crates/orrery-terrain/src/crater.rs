//! Impact craters: random placement and the cavity/floor/rim height profile.

use std::f64::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use crate::blend::{smooth_max, smooth_min};
use crate::shape::PlanetShape;

/// Largest crater radius produced by [`generate_craters`], in unit-sphere units.
pub const MAX_CRATER_RADIUS: f32 = 0.25;

/// A single crater on the unit sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crater {
    /// Crater center on the unit sphere.
    pub position: Vec3,
    /// Cavity radius, measured as straight-line distance on the unit sphere.
    pub radius: f32,
}

/// Scatter `count` craters over the unit sphere.
///
/// Radii are `u² * MAX_CRATER_RADIUS` for uniform `u`, which favours small craters.
pub fn generate_craters(count: u32, rng: &mut impl Rng) -> Vec<Crater> {
    (0..count)
        .map(|_| {
            let position = random_point_on_sphere(rng);
            let u: f64 = rng.random();
            Crater {
                position,
                radius: (u * u) as f32 * MAX_CRATER_RADIUS,
            }
        })
        .collect()
}

/// Pick a point on the unit sphere from uniform spherical angles.
pub fn random_point_on_sphere(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.random_range(0.0..TAU);
    let phi = rng.random_range(0.0..PI);
    Vec3::new(
        (theta.cos() * phi.sin()) as f32,
        (theta.sin() * phi.sin()) as f32,
        phi.cos() as f32,
    )
}

/// Summed height contribution of every crater at `point`.
///
/// Each crater digs a parabolic cavity clamped to a flat floor and raises a
/// rim out to `(1 + rim_width) * radius`. Overlapping craters simply add.
pub fn crater_height(point: Vec3, craters: &[Crater], shape: &PlanetShape) -> f32 {
    let k = shape.crater_smoothness;

    craters
        .iter()
        .filter(|crater| crater.radius > 0.0)
        .map(|crater| {
            let x = point.distance(crater.position) / crater.radius;

            let cavity = x * x - 1.0;
            let rim_x = (x - 1.0 - shape.crater_rim_width).min(0.0);
            let rim = shape.crater_rim_steepness * rim_x * rim_x;

            let floored = smooth_max(cavity, shape.crater_floor_height, k);
            smooth_min(floored, rim, k) * crater.radius
        })
        .sum()
}
