use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("File not found: {file}")]
    MissingSource { file: String },

    #[error("Source and destination must not be the same: {file}")]
    SameSourceAndDestination { file: String },

    #[error("Cannot copy '{file}' into a subdirectory of itself")]
    DestinationInsideSource { file: String },

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BuildError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            BuildError::MissingSource { file } => format!("Source file is missing: {}", file),
            BuildError::SameSourceAndDestination { file } => {
                format!("Refusing to copy {} onto itself", file)
            }
            BuildError::DestinationInsideSource { file } => {
                format!("The output directory lies inside {}", file)
            }
            BuildError::WalkError(e) => format!("Could not read a source directory: {}", e),
            BuildError::IoError(e) => format!("A filesystem operation failed: {}", e),
            BuildError::SerializationError(e) => format!("Could not write the build report: {}", e),
            BuildError::ConfigError { message } => format!("Invalid configuration: {}", message),
            BuildError::ConfigValidationError { field, message } => {
                format!("Invalid configuration for {}: {}", field, message)
            }
            BuildError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BuildError::MissingSource { .. } => {
                "Check that the file exists under the project root or remove it from the file list"
            }
            BuildError::SameSourceAndDestination { .. }
            | BuildError::DestinationInsideSource { .. } => {
                "Choose an output directory outside the listed entries and different from the project root"
            }
            BuildError::WalkError(_) | BuildError::IoError(_) => {
                "Check permissions on the project root and the output directory"
            }
            BuildError::SerializationError(_) => "Check that the report path is writable",
            BuildError::ConfigError { .. } | BuildError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            BuildError::InvalidConfigValueError { .. } => {
                "Fix the reported value on the command line or in the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
