use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Export error: {message}")]
    ExportError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GraphError {
    pub fn validation(message: impl Into<String>) -> Self {
        GraphError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GraphError::IoError(_) => ErrorCategory::Io,
            GraphError::SerializationError(_)
            | GraphError::CsvError(_)
            | GraphError::ExportError { .. } => ErrorCategory::Serialization,
            GraphError::ConfigValidationError { .. }
            | GraphError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GraphError::ValidationError { .. } | GraphError::UnknownCommand { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者輸入錯誤可以直接重試
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GraphError::IoError(e) => format!("File operation failed: {}", e),
            GraphError::SerializationError(_)
            | GraphError::CsvError(_)
            | GraphError::ExportError { .. } => {
                "Routes could not be exported in the requested format".to_string()
            }
            GraphError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            GraphError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            GraphError::ValidationError { message } => message.clone(),
            GraphError::UnknownCommand { command } => {
                format!("'{}' is not a known command", command)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is writable",
            ErrorCategory::Serialization => "Try another export format or check the route data",
            ErrorCategory::Configuration => "Fix the dataset file or command line arguments",
            ErrorCategory::Input => "Correct the input and try again (type 'help' in the shell)",
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = GraphError::validation("City name is required");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "City name is required");
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = GraphError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("missing"));
    }
}
