use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid date of birth '{value}': {reason}")]
    InvalidDateError { value: String, reason: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    System,
}

impl ProfileError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProfileError::IoError(_) => ErrorSeverity::Critical,
            ProfileError::SerializationError(_) => ErrorSeverity::High,
            ProfileError::ProcessingError { .. } => ErrorSeverity::High,
            ProfileError::TomlError(_) => ErrorSeverity::Medium,
            ProfileError::InvalidDateError { .. } => ErrorSeverity::Medium,
            ProfileError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            ProfileError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::IoError(_) => ErrorCategory::System,
            ProfileError::SerializationError(_) => ErrorCategory::Processing,
            ProfileError::ProcessingError { .. } => ErrorCategory::Processing,
            ProfileError::InvalidDateError { .. } => ErrorCategory::Input,
            ProfileError::TomlError(_)
            | ProfileError::InvalidConfigValueError { .. }
            | ProfileError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ProfileError::IoError(_) => {
                "Check that the output directory is writable and has free space".to_string()
            }
            ProfileError::SerializationError(_) => {
                "This is unexpected; re-run with --verbose and report the log".to_string()
            }
            ProfileError::TomlError(_) => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            ProfileError::InvalidDateError { .. } => {
                "Provide the date of birth as dd/mm/yyyy, e.g. 17/08/1990".to_string()
            }
            ProfileError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            ProfileError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            ProfileError::ProcessingError { .. } => {
                "Re-run with --verbose to see the processing log".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::InvalidDateError { value, .. } => {
                format!("'{}' is not a valid date of birth (expected dd/mm/yyyy)", value)
            }
            ProfileError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
