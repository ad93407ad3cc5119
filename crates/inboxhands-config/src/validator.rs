//! Configuration validation.

use url::Url;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_browser(config, &mut result);
        Self::validate_webmail(config, &mut result);
        Self::validate_polling(config, &mut result);

        result
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        if config.browser.application.trim().is_empty() {
            result.add_error(ValidationError::new(
                "browser.application",
                "Application name cannot be empty",
            ));
        }

        if config.browser.script_timeout_ms == Some(0) {
            result.add_error(ValidationError::new(
                "browser.script_timeout_ms",
                "script_timeout_ms must be greater than 0 when set",
            ));
        }
    }

    fn validate_webmail(config: &Config, result: &mut ValidationResult) {
        match Url::parse(&config.webmail.origin) {
            Ok(url) if url.host_str().is_some() => {}
            Ok(_) => result.add_error(ValidationError::new(
                "webmail.origin",
                "Origin must include a host",
            )),
            Err(e) => result.add_error(ValidationError::new(
                "webmail.origin",
                format!("Origin is not a valid URL: {}", e),
            )),
        }

        if config.webmail.inbox_url.trim().is_empty() {
            result.add_error(ValidationError::new(
                "webmail.inbox_url",
                "Inbox URL cannot be empty",
            ));
        }
    }

    fn validate_polling(config: &Config, result: &mut ValidationResult) {
        let polling = &config.polling;

        if polling.interval_ms == 0 {
            result.add_error(ValidationError::new(
                "polling.interval_ms",
                "interval_ms must be greater than 0",
            ));
        }

        for (path, value) in [
            ("polling.inbox_timeout_ms", polling.inbox_timeout_ms),
            ("polling.body_timeout_ms", polling.body_timeout_ms),
        ] {
            if value == 0 {
                result.add_error(ValidationError::new(path, "timeout must be greater than 0"));
            } else if polling.interval_ms > value {
                result.add_warning(ValidationWarning::new(
                    path,
                    "timeout is shorter than the poll interval; only one attempt will be made",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
