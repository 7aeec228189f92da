//! Unified error hierarchy for planrs
//!
//! The scheduling core itself is total: merging, normalization, and AI
//! adaptation degrade malformed input to defaults instead of failing.
//! Errors exist only at the boundaries, where files are read, parsed,
//! written, or configuration is loaded.

use std::path::PathBuf;
use thiserror::Error;

use crate::timeslot::TimeSlotError;

/// Top-level error type for all planrs operations
#[derive(Debug, Error)]
pub enum PlanRsError {
    /// Clock time parsing errors
    #[error("Time parsing error: {0}")]
    Time(#[from] TimeSlotError),

    /// Plan or AI result import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Schedule export errors
    #[error("Export error: {0}")]
    Export(#[from] crate::export::ExportError),

    /// Plan validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Plan and AI result import errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// No importer recognizes the file
    #[error("Unsupported format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// File not found at the given path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Format-specific parsing error
    #[error("Parse error in {format}: {reason}")]
    ParseError { format: String, reason: String },

    /// Required field missing from the document
    #[error("Missing required data: {field}")]
    MissingData { field: String },

    /// Document parsed but its structure is unusable
    #[error("Invalid data structure: {reason}")]
    InvalidStructure { reason: String },
}

/// Result type alias for planrs operations
pub type Result<T> = std::result::Result<T, PlanRsError>;

impl PlanRsError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlanRsError::Import(ImportError::FileNotFound { .. }) => ErrorSeverity::Warning,
            PlanRsError::Time(_) => ErrorSeverity::Warning,
            PlanRsError::Validation(_) => ErrorSeverity::Warning,
            PlanRsError::Internal(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PlanRsError::Import(ImportError::FileNotFound { path }) => {
                format!("Could not find plan file: {}", path.display())
            }
            PlanRsError::Import(ImportError::UnsupportedFormat { path }) => {
                format!(
                    "Don't know how to read {}. Supported formats: JSON, CSV.",
                    path.display()
                )
            }
            PlanRsError::Import(ImportError::ParseError { format, reason }) => {
                format!("Plan file is not valid {}: {}", format, reason)
            }
            PlanRsError::Configuration(reason) => {
                format!("Configuration problem: {}. Run `planrs config --init`.", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
    /// Informational message
    Info,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Info => tracing::Level::INFO,
        }
    }
}
