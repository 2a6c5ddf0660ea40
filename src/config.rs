//! Benchmark driver configuration.
//!
//! Settings come from an optional YAML file; command-line flags override
//! whatever the file provides.
//!
//! ```yaml
//! iterations: 50000
//! warmup: 500
//! include_header: false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A setting is out of range
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn default_iterations() -> usize {
    100_000
}

fn default_warmup() -> usize {
    1_000
}

fn default_include_header() -> bool {
    true
}

/// Settings for one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// Timed repetitions per phase
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Untimed repetitions per codec before timing
    #[serde(default = "default_warmup")]
    pub warmup: usize,

    /// Whether serialized CSV carries a header line
    #[serde(default = "default_include_header")]
    pub include_header: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            warmup: default_warmup(),
            include_header: default_include_header(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct BenchOverrides {
    pub iterations: Option<usize>,
    pub warmup: Option<usize>,
    pub no_header: bool,
}

impl BenchConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: BenchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration: file (or defaults), then overrides.
    pub fn resolve(path: Option<&Path>, overrides: &BenchOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(iterations) = overrides.iterations {
            config.iterations = iterations;
        }
        if let Some(warmup) = overrides.warmup {
            config.warmup = warmup;
        }
        if overrides.no_header {
            config.include_header = false;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "iterations",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations, 100_000);
        assert_eq!(config.warmup, 1_000);
        assert!(config.include_header);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = BenchConfig::from_yaml("iterations: 10\n").unwrap();
        assert_eq!(config.iterations, 10);
        assert_eq!(config.warmup, 1_000);
        assert!(config.include_header);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let err = BenchConfig::from_yaml("iteration: 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::YamlError(_)));
    }

    #[test]
    fn test_from_yaml_rejects_zero_iterations() {
        let err = BenchConfig::from_yaml("iterations: 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "iterations",
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "iterations: 50\nwarmup: 5\ninclude_header: true").unwrap();

        let overrides = BenchOverrides {
            iterations: Some(7),
            warmup: None,
            no_header: true,
        };
        let config = BenchConfig::resolve(Some(file.path()), &overrides).unwrap();
        assert_eq!(
            config,
            BenchConfig {
                iterations: 7,
                warmup: 5,
                include_header: false,
            }
        );
    }

    #[test]
    fn test_resolve_without_file() {
        let config = BenchConfig::resolve(None, &BenchOverrides::default()).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_resolve_missing_file() {
        let err = BenchConfig::resolve(
            Some(Path::new("/nonexistent/flatcsv.yaml")),
            &BenchOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
