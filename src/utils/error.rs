use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input is not valid UTF-8: {0}")]
    DecodeError(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Decode,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SortError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SortError::IoError(_) => ErrorCategory::Io,
            SortError::DecodeError(_) => ErrorCategory::Decode,
            SortError::ConfigError { .. }
            | SortError::InvalidConfigValueError { .. }
            | SortError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SortError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ErrorSeverity::High
            }
            SortError::IoError(_) => ErrorSeverity::Critical,
            SortError::DecodeError(_) => ErrorSeverity::High,
            SortError::ConfigError { .. }
            | SortError::InvalidConfigValueError { .. }
            | SortError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SortError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Input file not found".to_string()
            }
            SortError::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied while accessing a file".to_string()
            }
            SortError::IoError(e) => format!("File access failed: {}", e),
            SortError::DecodeError(_) => "Input file is not valid UTF-8 text".to_string(),
            SortError::ConfigError { message } => format!("Configuration problem: {}", message),
            SortError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            SortError::MissingConfigError { field } => format!("Missing {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SortError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input path exists and is spelled correctly".to_string()
            }
            SortError::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                "Check file permissions for the input and output paths".to_string()
            }
            SortError::IoError(_) => "Check disk space and that the paths are valid".to_string(),
            SortError::DecodeError(_) => {
                "Re-save the input file with UTF-8 encoding".to_string()
            }
            SortError::ConfigError { .. }
            | SortError::InvalidConfigValueError { .. }
            | SortError::MissingConfigError { .. } => {
                "Run with --help to review the expected arguments".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
