//! Command-line argument parsing for the orrery generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`. Shape overrides
/// apply to every configured body.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural planet mesh generator")]
pub struct CliArgs {
    /// Subdivision level per octahedron face.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Fixed seed for reproducible terrain.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Displacement worker count (0 = one per logical CPU).
    #[arg(long)]
    pub workers: Option<usize>,

    /// Crater count.
    #[arg(long)]
    pub craters: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(workers) = args.workers {
            self.generation.workers = workers;
        }
        for body in &mut self.bodies {
            if let Some(res) = args.resolution {
                body.shape.resolution = res;
            }
            if let Some(craters) = args.craters {
                body.shape.num_craters = craters;
            }
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            resolution: Some(16),
            seed: Some(7),
            workers: None,
            craters: None,
            log_level: Some("debug".to_string()),
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.generation.seed, Some(7));
        assert_eq!(config.debug.log_level, "debug");
        assert!(config.bodies.iter().all(|b| b.shape.resolution == 16));
        // Non-overridden fields retain defaults
        assert_eq!(config.generation.workers, 20);
        assert_eq!(config.body("Luna").unwrap().shape.num_craters, 40);
    }

    #[test]
    fn test_cli_craters_apply_to_all_bodies() {
        let mut config = Config::default();
        let args = CliArgs {
            craters: Some(0),
            workers: Some(0),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert!(config.bodies.iter().all(|b| b.shape.num_craters == 0));
        assert_eq!(config.generation.workers, 0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "orrery",
            "--resolution",
            "32",
            "--seed",
            "99",
            "--config",
            "/tmp/orrery",
        ]);
        assert_eq!(args.resolution, Some(32));
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/orrery")));
        assert_eq!(args.workers, None);
    }
}
