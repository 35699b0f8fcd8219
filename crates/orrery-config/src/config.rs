//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use orrery_terrain::PlanetShape;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Worker pool and seeding.
    pub generation: GenerationConfig,
    /// Bodies to generate, in file order.
    pub bodies: Vec<BodyConfig>,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Worker pool and seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of displacement workers (0 = one per logical CPU).
    pub workers: usize,
    /// Fixed seed for reproducible output. `None` draws a fresh seed per body.
    pub seed: Option<u64>,
}

/// One body of the system: a named planet shape with an optional orbit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Unique body name, also used as the orbit parent key.
    pub name: String,
    /// Geometry and terrain recipe.
    pub shape: PlanetShape,
    /// Orbit around another body. `None` places the body at the origin.
    pub orbit: Option<OrbitConfig>,
}

/// Orbit of a body around a named parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Name of the body being orbited.
    pub parent: String,
    /// Distance from the parent's centre in world units.
    pub distance: f32,
    /// Orbital axis; need not be normalised.
    pub axis: [f32; 3],
    /// Orbital period in seconds. Not used for generation; passed through
    /// to the generated body for animation.
    pub period_s: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Check every generated mesh is a closed manifold.
    pub verify_topology: bool,
    /// Directory for JSON log files. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            bodies: vec![
                BodyConfig {
                    name: "Terra".to_string(),
                    shape: PlanetShape::earth(),
                    orbit: None,
                },
                BodyConfig {
                    name: "Luna".to_string(),
                    shape: PlanetShape {
                        radius: 0.27,
                        resolution: 50,
                        ..PlanetShape::moon()
                    },
                    orbit: Some(OrbitConfig {
                        parent: "Terra".to_string(),
                        distance: 30.0,
                        axis: [0.0, 1.0, 0.0],
                        period_s: 120.0,
                    }),
                },
            ],
            debug: DebugConfig::default(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            workers: 20,
            seed: None,
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: "Planet".to_string(),
            shape: PlanetShape::default(),
            orbit: None,
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            parent: String::new(),
            distance: 10.0,
            axis: [0.0, 1.0, 0.0],
            period_s: 60.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            verify_topology: false,
            log_dir: None,
        }
    }
}

/// Platform config directory for orrery, e.g. `~/.config/orrery` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("orrery"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Look up a configured body by name.
    pub fn body(&self, name: &str) -> Option<&BodyConfig> {
        self.bodies.iter().find(|body| body.name == name)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
