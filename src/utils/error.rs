use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    Schema { message: String },

    #[error("Failed to create {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Schema,
    Output,
    Configuration,
}

impl SplitError {
    pub fn schema_missing_children() -> Self {
        SplitError::Schema {
            message: "Expected 'layout.children' structure in JSON file.".to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SplitError::NotFound { .. } | SplitError::Parse { .. } | SplitError::IoError(_) => {
                ErrorCategory::Input
            }
            SplitError::Schema { .. } => ErrorCategory::Schema,
            SplitError::Write { .. } | SplitError::SerializationError(_) => ErrorCategory::Output,
            SplitError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SplitError::NotFound { .. } => "Check the input path, or place ui.json next to the executable",
            SplitError::Parse { .. } => "Fix the JSON syntax at the reported line and column",
            SplitError::Schema { .. } => "The input must look like {\"layout\": {\"children\": [...]}}",
            SplitError::Write { .. } => "Check permissions and free space in the output directory",
            SplitError::IoError(_) => "Check that the paths are readable and the directory is writable",
            SplitError::SerializationError(_) => "The child could not be encoded as JSON",
            SplitError::InvalidConfigValue { .. } => "Pass a non-empty path without NUL bytes",
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
