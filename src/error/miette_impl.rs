//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{SourceError, Stage};

/// A diagnostic wrapper for source errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct IoDiagnostic {
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

impl From<SourceError> for IoDiagnostic {
    fn from(e: SourceError) -> Self {
        let help = match e.stage {
            Stage::Open => "Check that the input path exists and is readable",
            Stage::Read => "The input was skipped; remaining inputs are still read",
            Stage::Close => "The input was released but reported an error on close",
        };
        IoDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(Box::new(e.error)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<std::io::Error> for IoDiagnostic {
    fn from(err: std::io::Error) -> Self {
        if SourceError::from_io(&err).is_none() {
            return IoDiagnostic {
                message: err.to_string(),
                source: Some(Box::new(err)),
                help: None,
                severity: Severity::Error,
            };
        }
        match err.into_inner().map(|inner| inner.downcast::<SourceError>()) {
            Some(Ok(source)) => IoDiagnostic::from(*source),
            Some(Err(other)) => IoDiagnostic {
                message: other.to_string(),
                source: Some(other),
                help: None,
                severity: Severity::Error,
            },
            None => IoDiagnostic {
                message: "Unknown I/O error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            },
        }
    }
}
