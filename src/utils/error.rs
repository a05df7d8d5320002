use thiserror::Error;

#[derive(Error, Debug)]
pub enum KennelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not read roster '{path}': {source}")]
    RosterReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster parsing error: {0}")]
    RosterParseError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
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
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl KennelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
            Self::RosterReadError { .. } | Self::RosterParseError(_) => ErrorCategory::Input,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not access a file: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::RosterReadError { path, source } => {
                format!("Could not read the roster at {}: {}", path, source)
            }
            Self::RosterParseError(e) => format!("The roster file is not valid TOML: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem with {}: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for {}: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Please provide {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Try the text output format",
            Self::RosterReadError { .. } => "Check the --roster path and its permissions",
            Self::RosterParseError(_) => "Each dog needs a [[dogs]] table with a `name` key",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the reported value and run again"
            }
            Self::MissingConfigError { .. } => "Pass a dog name or --roster <FILE>",
        }
    }
}

pub type Result<T> = std::result::Result<T, KennelError>;
