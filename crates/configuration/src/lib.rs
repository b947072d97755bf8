use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    HistogramSettings, LoggingSettings, MAX_BINS, MAX_PRECISION, OutputFormat, ReportSettings,
    Settings,
};

/// The file read when no explicit path is given. It may be absent.
pub const DEFAULT_CONFIG_FILE: &str = "statlens.toml";

/// Prefix for environment overrides, e.g. `STATLENS__REPORT__PRECISION=4`.
pub const ENV_PREFIX: &str = "STATLENS";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file at
/// `path` (or `statlens.toml` if present), then `STATLENS__*` environment
/// variables. An explicitly given `path` must exist.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let required = path.is_some();
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(required))
        .add_source(environment());

    let settings = deserialize(builder)?;
    tracing::debug!(?settings, "Configuration loaded.");
    Ok(settings)
}

/// `STATLENS__SECTION__KEY` variables, with numbers and booleans parsed.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Builds, deserializes and validates a prepared set of sources.
fn deserialize(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}
