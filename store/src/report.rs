//! Diagnostic reporting sink.
//!
//! The store never prints. Human-readable diagnostics from the existence
//! guard and the error-catch boundary go through a [`Reporter`], which the
//! embedding layer supplies; the CLI installs a terminal renderer, while
//! the default [`LogReporter`] forwards to `tracing`.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral progress information.
    Info,
    /// An operation completed as requested.
    Success,
    /// Something suspicious that did not stop the operation.
    Warning,
    /// The operation could not be performed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{label}")
    }
}

/// Destination for human-readable diagnostics.
pub trait Reporter {
    /// Delivers one diagnostic message.
    fn report(&self, severity: Severity, message: &str);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn report(&self, severity: Severity, message: &str) {
        (**self).report(severity, message);
    }
}

/// Default reporter that forwards diagnostics to `tracing`.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info | Severity::Success => tracing::info!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
