//! Terminal diagnostic sink.

use passfort_store::{Reporter, Severity};

/// Renders store diagnostics on the terminal: errors and warnings go to
/// stderr with a severity label, everything else to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error | Severity::Warning => eprintln!("{severity}: {message}"),
            Severity::Info | Severity::Success => println!("{message}"),
        }
    }
}
