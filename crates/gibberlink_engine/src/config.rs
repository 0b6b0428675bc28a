//! Engine configuration.
//!
//! Configuration is layered with the `config` crate:
//! 1. Bundled defaults (`gibberlink.toml` shipped with this crate)
//! 2. `~/.config/gibberlink/gibberlink.toml`
//! 3. `./gibberlink.toml`
//!
//! User files are optional; later sources override earlier ones.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use gibberlink_error::{ConfigError, ConfigErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const DEFAULT_CONFIG: &str = include_str!("../gibberlink.toml");

/// Timing knobs for the scheduler.
///
/// # Examples
///
/// ```
/// use gibberlink_engine::{EngineConfig, EngineConfigBuilder};
///
/// let config = EngineConfigBuilder::default()
///     .mode_switch_delay_ms(250u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(*config.mode_switch_delay_ms(), 250);
/// assert_eq!(*config.snapshot_timeout_ms(), 5000);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[serde(default, deny_unknown_fields)]
#[builder(default, setter(into), build_fn(private, name = "build_internal"))]
pub struct EngineConfig {
    /// Delay between delivering the trigger step and entering protocol mode.
    mode_switch_delay_ms: u64,
    /// Upper bound on waiting for a state snapshot.
    snapshot_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode_switch_delay_ms: 1000,
            snapshot_timeout_ms: 5000,
        }
    }
}

impl EngineConfigBuilder {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot timeout is zero.
    pub fn build(&self) -> Result<EngineConfig, ConfigError> {
        let config = self
            .build_internal()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}

impl EngineConfig {
    /// Mode switch delay as a duration.
    pub fn mode_switch_delay(&self) -> Duration {
        Duration::from_millis(self.mode_switch_delay_ms)
    }

    /// Snapshot timeout as a duration.
    pub fn snapshot_timeout(&self) -> Duration {
        Duration::from_millis(self.snapshot_timeout_ms)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if `snapshot_timeout_ms` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snapshot_timeout_ms == 0 {
            return Err(ConfigError::new(ConfigErrorKind::InvalidValue {
                field: "snapshot_timeout_ms",
                reason: "must be positive",
            }));
        }
        Ok(())
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: Self = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Load(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_override(None)
    }

    /// Load layered configuration, then apply an explicit file on top.
    ///
    /// The explicit file, when given, must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or parsed, or validation fails.
    pub fn load_with_override(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/gibberlink/gibberlink.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("gibberlink").required(false));

        if let Some(path) = path {
            debug!(path = %path.display(), "Applying explicit configuration file");
            builder = builder.add_source(File::from(path));
        }

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        debug!(?config, "Loaded engine configuration");
        Ok(config)
    }
}
