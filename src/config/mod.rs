//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing through:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{VizError, VizResult};
use crate::playback::{DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};

/// Top-level visualizer configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Playback settings.
    #[validate(nested)]
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Input handling settings.
    #[validate(nested)]
    #[serde(default)]
    pub input: InputConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        // Schema constraints first, then semantic constraints.
        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> VizResult<()> {
        let interval = self.playback.interval_ms;
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&interval) {
            return Err(VizError::config(format!(
                "playback interval must be within {MIN_INTERVAL_MS}..={MAX_INTERVAL_MS} ms, got {interval}"
            )));
        }

        if self.input.warn_length == 0 {
            return Err(VizError::config("warn_length must be at least 1"));
        }

        Ok(())
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            playback: PlaybackConfig::default(),
            input: InputConfig::default(),
        }
    }
}

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Timer interval between automatic steps, in milliseconds.
    #[validate(range(min = 100, max = 3000))]
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Start playing as soon as a trace is generated.
    #[serde(default)]
    pub autoplay: bool,
}

const fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            autoplay: false,
        }
    }
}

/// Input handling settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Array length above which the visualizer warns (advisory only; the
    /// generators themselves place no bound).
    #[validate(range(min = 1))]
    #[serde(default = "default_warn_length")]
    pub warn_length: usize,

    /// Seed for random demo arrays.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_warn_length() -> usize {
    10
}

const fn default_seed() -> u64 {
    42
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            warn_length: default_warn_length(),
            seed: default_seed(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct VizConfigBuilder {
    interval_ms: Option<u64>,
    autoplay: Option<bool>,
    warn_length: Option<usize>,
    seed: Option<u64>,
}

impl VizConfigBuilder {
    /// Set the playback interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }

    /// Set whether playback starts automatically.
    #[must_use]
    pub const fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    /// Set the advisory array length threshold.
    #[must_use]
    pub const fn warn_length(mut self, warn_length: usize) -> Self {
        self.warn_length = Some(warn_length);
        self
    }

    /// Set the demo array seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> VizConfig {
        let mut config = VizConfig::default();

        if let Some(interval_ms) = self.interval_ms {
            config.playback.interval_ms = interval_ms;
        }
        if let Some(autoplay) = self.autoplay {
            config.playback.autoplay = autoplay;
        }
        if let Some(warn_length) = self.warn_length {
            config.input.warn_length = warn_length;
        }
        if let Some(seed) = self.seed {
            config.input.seed = seed;
        }

        config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VizConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.validate_semantic().is_ok());
        assert_eq!(config.playback.interval_ms, 1000);
        assert_eq!(config.input.warn_length, 10);
    }

    #[test]
    fn test_load_from_yaml() {
        let yaml = r"
playback:
  interval_ms: 500
  autoplay: true
input:
  warn_length: 12
  seed: 7
";
        let config = VizConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.playback.interval_ms, 500);
        assert!(config.playback.autoplay);
        assert_eq!(config.input.warn_length, 12);
        assert_eq!(config.input.seed, 7);
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = VizConfig::from_yaml("schema_version: '1.0'").unwrap();
        assert_eq!(config.playback.interval_ms, 1000);
        assert!(!config.playback.autoplay);
    }

    #[test]
    fn test_interval_out_of_range_rejected() {
        let yaml = "playback:\n  interval_ms: 50\n";
        assert!(VizConfig::from_yaml(yaml).is_err());

        let yaml = "playback:\n  interval_ms: 5000\n";
        assert!(VizConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "unknown_field: true\n";
        assert!(VizConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_builder() {
        let config = VizConfig::builder()
            .interval_ms(250)
            .autoplay(true)
            .warn_length(8)
            .seed(99)
            .build();
        assert_eq!(config.playback.interval_ms, 250);
        assert!(config.playback.autoplay);
        assert_eq!(config.input.warn_length, 8);
        assert_eq!(config.input.seed, 99);
    }
}
