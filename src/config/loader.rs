//! Configuration file loader.

use super::error::{ConfigError, ConfigResult};
use super::types::BenchConfig;
use super::validation::{BasicValidator, Validator};
use std::path::Path;
use tracing::debug;

/// Configuration loader with validation support.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Validators to run on loaded configuration.
    validators: Vec<Box<dyn Validator>>,
}

impl ConfigLoader {
    /// Create a loader with no validators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that runs the [`BasicValidator`].
    #[must_use]
    pub fn validated() -> Self {
        Self::new().with_validator(BasicValidator::new())
    }

    /// Add a validator to the loader.
    #[must_use]
    pub fn with_validator<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Load configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ConfigResult<BenchConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_str(&content)
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn load_str(&self, content: &str) -> ConfigResult<BenchConfig> {
        let config: BenchConfig = toml::from_str(content)?;
        self.validate(&config)?;
        Ok(config)
    }

    /// Run every registered validator against `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] listing every failure of the
    /// first validator that rejects the configuration.
    pub fn validate(&self, config: &BenchConfig) -> ConfigResult<()> {
        for validator in &self.validators {
            let result = validator.validate(config);
            if !result.is_valid() {
                let errors: Vec<String> = result
                    .errors()
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                return Err(ConfigError::ValidationError(errors.join("; ")));
            }
        }
        Ok(())
    }

    /// Load configuration or return default if file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_or_default<P: AsRef<Path>>(&self, path: P) -> ConfigResult<BenchConfig> {
        let path = path.as_ref();
        if path.exists() {
            self.load(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(BenchConfig::default())
        }
    }

    /// Save configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save<P: AsRef<Path>>(&self, config: &BenchConfig, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}
