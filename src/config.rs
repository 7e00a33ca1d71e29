//! Expander configuration.
//!
//! [`ExpandConfig`] is loaded from the `[expand]` section of `config/config.toml`
//! or from `LIFEGUARD__EXPAND__*` environment variables using `ExpandConfig::load()`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/config.toml";

/// PostgreSQL caps a single statement at `u16::MAX` bind parameters; the usual
/// value for `max_bind_values` when targeting it.
pub const POSTGRES_MAX_BIND_VALUES: usize = u16::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpandConfig {
    /// Check placeholder/argument counts even when no argument expands.
    ///
    /// Off by default: queries without sequences are passed through untouched,
    /// so a count mismatch surfaces at the driver instead.
    #[serde(default)]
    pub strict_placeholders: bool,
    /// Upper bound on the flattened value count. No limit when unset.
    #[serde(default)]
    pub max_bind_values: Option<usize>,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            strict_placeholders: false,
            max_bind_values: None,
        }
    }
}

impl ExpandConfig {
    /// Load the expander configuration from `config/config.toml`, falling back to env vars.
    ///
    /// A missing `[expand]` section yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix("LIFEGUARD").separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                // File exists but could not be parsed or read
                if std::path::Path::new(CONFIG_FILE).exists() {
                    log::warn!("failed to load {CONFIG_FILE}, falling back to env: {err}");
                }
                Config::builder()
                    .add_source(Environment::with_prefix("LIFEGUARD").separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {err}, then env-only error: {env_err}"
                        ))
                    })?
            }
        };

        Self::from_settings(&settings)
    }

    fn from_settings(settings: &Config) -> Result<Self, ConfigError> {
        match settings.get::<ExpandConfig>("expand") {
            Ok(cfg) => Ok(cfg),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Expand configuration could not be loaded from file or environment: {e}"
            ))),
        }
    }
}
