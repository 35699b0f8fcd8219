//! Headless demo that generates every body configured in `config.ron`.
//!
//! Run with `cargo run -p orrery-demo --release` to build the default system.
//! Run with `cargo run -p orrery-demo -- --resolution 32 --seed 7` to override.

use std::process::ExitCode;

use clap::Parser;
use glam::Vec3;
use orrery_config::{BodyConfig, CliArgs, Config, ConfigError};
use orrery_mesh::{TopologyError, check_closed_manifold};
use orrery_planet::{
    BodySpec, GeneratedBody, GenerationError, GenerationOptions, OrbitSpec, TerrainGenerator,
    generate_system,
};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("body '{name}' failed topology check: {source}")]
    Topology {
        name: String,
        #[source]
        source: TopologyError,
    },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().or_else(orrery_config::default_config_dir) {
        Some(dir) => dir,
        None => {
            eprintln!("{}", ConfigError::NoConfigDir);
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    orrery_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    let options = GenerationOptions {
        seed: config.generation.seed,
        workers: config.generation.workers,
    };
    let generator = TerrainGenerator::new(options)?;
    info!(
        "Generating {} bodies with {} workers",
        config.bodies.len(),
        generator.workers()
    );

    let specs: Vec<BodySpec> = config.bodies.iter().map(body_spec).collect();
    let bodies = generate_system(&generator, &specs)?;

    for body in &bodies {
        report(body);
        if config.debug.verify_topology {
            check_closed_manifold(&body.mesh.indices, body.mesh.vertex_count()).map_err(
                |source| DemoError::Topology {
                    name: body.name.clone(),
                    source,
                },
            )?;
            info!("{}: closed manifold", body.name);
        }
    }

    Ok(())
}

fn body_spec(body: &BodyConfig) -> BodySpec {
    BodySpec {
        name: body.name.clone(),
        shape: body.shape.clone(),
        orbit: body.orbit.as_ref().map(|orbit| OrbitSpec {
            parent: orbit.parent.clone(),
            distance: orbit.distance,
            axis: Vec3::from_array(orbit.axis),
            period_s: orbit.period_s,
        }),
    }
}

fn report(body: &GeneratedBody) {
    let mesh = &body.mesh;
    let (min_r, max_r) = mesh.radius_range().unwrap_or((0.0, 0.0));
    info!(
        "{} at {}: {} vertices, {} triangles, radius {:.4}..{:.4}, {} KiB vertex data, seed {}",
        body.name,
        body.position,
        mesh.vertex_count(),
        mesh.triangle_count(),
        min_r,
        max_r,
        mesh.vertex_bytes().len() / 1024,
        mesh.seed
    );
    if let Some(orbit) = &body.orbit {
        info!(
            "{}: orbits {} every {:.1} s",
            body.name, orbit.parent, orbit.period_s
        );
    }
    if mesh.degenerate_normals > 0 {
        info!(
            "{}: {} vertices used the radial normal fallback",
            body.name, mesh.degenerate_normals
        );
    }
}
