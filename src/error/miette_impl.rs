//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{LocatorError, UnrecognizedScheme};

/// A diagnostic wrapper for locator errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct LocatorDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<LocatorError> for LocatorDiagnostic {
    fn from(e: LocatorError) -> Self {
        LocatorDiagnostic {
            message: e.to_string(),
            source: match e {
                LocatorError::Empty => None,
                LocatorError::Malformed { source, .. } => Some(Box::new(source)),
            },
            help: Some("Expected a file path or a file://, http:// or https:// URI".into()),
            severity: Severity::Error,
        }
    }
}

impl From<UnrecognizedScheme> for LocatorDiagnostic {
    fn from(e: UnrecognizedScheme) -> Self {
        LocatorDiagnostic {
            message: e.to_string(),
            source: None,
            help: Some("Supported schemes are file, http and https".into()),
            severity: Severity::Error,
        }
    }
}

impl From<LocatorError> for miette::Report {
    fn from(e: LocatorError) -> Self {
        miette::Report::new(LocatorDiagnostic::from(e))
    }
}
