//! Planet systems: several bodies, some orbiting others, generated together.
//!
//! Only the initial placement is resolved here; animating the orbits is the
//! renderer's job.

use std::collections::HashMap;

use glam::Vec3;
use orrery_mesh::PlanetMesh;
use orrery_terrain::PlanetShape;
use tracing::info;

use crate::error::GenerationError;
use crate::generator::TerrainGenerator;

/// A body orbiting a named parent.
///
/// Only `parent`, `distance` and `axis` affect generation. `period_s` is
/// carried through to [`GeneratedBody::orbit`] for whoever animates the system.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSpec {
    /// Name of the parent body.
    pub parent: String,
    /// Distance from the parent's center.
    pub distance: f32,
    /// Orbit axis; need not be normalized.
    pub axis: Vec3,
    /// Seconds per full orbit.
    pub period_s: f64,
}

/// One body in a system.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySpec {
    /// Unique name.
    pub name: String,
    /// Shape recipe.
    pub shape: PlanetShape,
    /// `None` for a body fixed at the system origin.
    pub orbit: Option<OrbitSpec>,
}

/// A generated body with its starting position.
#[derive(Clone, Debug)]
pub struct GeneratedBody {
    pub name: String,
    /// Initial center, relative to the system origin.
    pub position: Vec3,
    pub mesh: PlanetMesh,
    /// The orbit the body was placed on, unchanged.
    pub orbit: Option<OrbitSpec>,
}

/// Starting offset of an orbiting body from its parent: `distance` along
/// `normalize(axis × (1, 1, 1))`, a direction perpendicular to the axis.
///
/// Returns `None` when the axis is zero or parallel to `(1, 1, 1)`.
pub fn initial_orbit_offset(axis: Vec3, distance: f32) -> Option<Vec3> {
    let axis = axis.try_normalize()?;
    Some(axis.cross(Vec3::ONE).try_normalize()? * distance)
}

/// Generate every body in `bodies` and place it in the system.
///
/// Bodies are generated in the given order; parents may be listed after
/// their moons.
pub fn generate_system(
    generator: &TerrainGenerator,
    bodies: &[BodySpec],
) -> Result<Vec<GeneratedBody>, GenerationError> {
    let positions = resolve_positions(bodies)?;

    bodies
        .iter()
        .zip(positions)
        .map(|(body, position)| {
            info!("Generating {} at {position}", body.name);
            let mesh = generator.generate(&body.shape)?;
            Ok(GeneratedBody {
                name: body.name.clone(),
                position,
                mesh,
                orbit: body.orbit.clone(),
            })
        })
        .collect()
}

fn resolve_positions(bodies: &[BodySpec]) -> Result<Vec<Vec3>, GenerationError> {
    let mut name_index = HashMap::with_capacity(bodies.len());
    for (idx, body) in bodies.iter().enumerate() {
        if name_index.insert(body.name.as_str(), idx).is_some() {
            return Err(GenerationError::InvalidSystem(format!(
                "duplicate body name '{}'",
                body.name
            )));
        }
    }

    let mut resolved: Vec<Option<Vec3>> = vec![None; bodies.len()];

    for start in 0..bodies.len() {
        // Walk up to the first body with a known position, remembering the path.
        let mut chain = Vec::new();
        let mut current = start;
        let mut position = loop {
            if let Some(p) = resolved[current] {
                break p;
            }
            if chain.contains(&current) {
                return Err(GenerationError::InvalidSystem(format!(
                    "orbit cycle through '{}'",
                    bodies[current].name
                )));
            }
            match &bodies[current].orbit {
                None => {
                    resolved[current] = Some(Vec3::ZERO);
                    break Vec3::ZERO;
                }
                Some(orbit) => {
                    chain.push(current);
                    current = *name_index.get(orbit.parent.as_str()).ok_or_else(|| {
                        GenerationError::InvalidSystem(format!(
                            "'{}' orbits unknown body '{}'",
                            bodies[current].name, orbit.parent
                        ))
                    })?;
                }
            }
        };

        while let Some(idx) = chain.pop() {
            if let Some(orbit) = &bodies[idx].orbit {
                position += orbit_offset(&bodies[idx].name, orbit)?;
            }
            resolved[idx] = Some(position);
        }
    }

    Ok(resolved.into_iter().map(Option::unwrap_or_default).collect())
}

fn orbit_offset(name: &str, orbit: &OrbitSpec) -> Result<Vec3, GenerationError> {
    if !orbit.distance.is_finite() || orbit.distance < 0.0 {
        return Err(GenerationError::InvalidSystem(format!(
            "'{name}' has invalid orbit distance {}",
            orbit.distance
        )));
    }
    initial_orbit_offset(orbit.axis, orbit.distance).ok_or_else(|| {
        GenerationError::InvalidSystem(format!(
            "'{name}' has degenerate orbit axis {}",
            orbit.axis
        ))
    })
}
