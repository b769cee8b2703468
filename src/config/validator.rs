use thiserror::Error;

use crate::config::Settings;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&settings.log_level.to_lowercase().as_str()) {
            errors.push(ValidationError::InvalidValue {
                field: "log_level".to_string(),
                reason: format!(
                    "'{}' is not one of {}",
                    settings.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        if let Some(dir) = &settings.metadata_dir {
            if dir.trim().is_empty() {
                errors.push(ValidationError::MissingField("metadata_dir".to_string()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
