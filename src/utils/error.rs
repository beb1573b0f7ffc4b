use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomieError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("No input provided")]
    EmptyInput,

    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot {operation} while questionnaire is at step {step}")]
    InvalidStep {
        operation: &'static str,
        step: String,
    },

    #[error("No user is signed in")]
    NotAuthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Session,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HomieError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HomieError::TomlParseError { .. } | HomieError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            HomieError::ValidationError { .. }
            | HomieError::EmptyInput
            | HomieError::IndexOutOfRange { .. } => ErrorCategory::Input,
            HomieError::InvalidStep { .. } | HomieError::NotAuthenticated => {
                ErrorCategory::Session
            }
            HomieError::IoError(_) | HomieError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Session | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HomieError::EmptyInput => "Describe your ideal roommate before analyzing",
            HomieError::IndexOutOfRange { .. } => "Pick one of the listed preferences",
            HomieError::InvalidStep { .. } => "Restart the questionnaire from the first step",
            HomieError::NotAuthenticated => "Log in or sign up first",
            HomieError::ValidationError { .. } => "Check the submitted fields and try again",
            HomieError::TomlParseError { .. } => "Fix the TOML syntax in the config file",
            HomieError::InvalidConfigValueError { .. } => "Check the configuration values",
            HomieError::IoError(_) => "Check that the file exists and is readable",
            HomieError::SerializationError(_) => "Check the data format",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HomieError::EmptyInput => "Please provide some input first.".to_string(),
            HomieError::NotAuthenticated => "Please log in to continue.".to_string(),
            HomieError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        HomieError::ValidationError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HomieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert_eq!(HomieError::EmptyInput.category(), ErrorCategory::Input);
        assert_eq!(HomieError::EmptyInput.severity(), ErrorSeverity::Medium);
        assert_eq!(
            HomieError::NotAuthenticated.category(),
            ErrorCategory::Session
        );
        let io = HomieError::from(std::io::Error::other("boom"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_friendly_message() {
        assert_eq!(
            HomieError::EmptyInput.user_friendly_message(),
            "Please provide some input first."
        );
        let err = HomieError::validation("Passwords do not match");
        assert_eq!(err.user_friendly_message(), "Passwords do not match");
    }
}
