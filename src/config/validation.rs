//! Configuration validation.

use super::types::BenchConfig;

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field path that failed validation.
    pub field: String,
    /// Error message.
    pub message: String,
}

impl ValidationError {
    /// Create a new error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty (valid) result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if the validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all validation errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Trait for configuration validators.
pub trait Validator: std::fmt::Debug + Send + Sync {
    /// Validate a configuration and return any errors.
    fn validate(&self, config: &BenchConfig) -> ValidationResult;
}

/// Rejects settings the runner and fixture cannot work with.
#[derive(Debug, Default)]
pub struct BasicValidator;

impl BasicValidator {
    /// Create a new basic validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BasicValidator {
    fn validate(&self, config: &BenchConfig) -> ValidationResult {
        let mut result = ValidationResult::new();

        // The mean divides by this
        if config.runner.measured_iterations == 0 {
            result.add_error(ValidationError::new(
                "runner.measured_iterations",
                "measured_iterations must be greater than 0",
            ));
        }

        if config.fixture.element_count == 0 {
            result.add_error(ValidationError::new(
                "fixture.element_count",
                "element_count must be greater than 0",
            ));
        }

        result
    }
}
