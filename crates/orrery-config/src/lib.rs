//! Configuration for the orrery planet generator.
//!
//! Settings persist to disk as a RON file, accept CLI overrides via clap and
//! tolerate missing or unknown fields so old files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BodyConfig, CONFIG_FILE_NAME, Config, DebugConfig, GenerationConfig, OrbitConfig,
    default_config_dir,
};
pub use error::ConfigError;
