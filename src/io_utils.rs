//! Error reporting for the `fracpow` binary: wraps generator and output-file
//! failures into messages with a hint for the flag to change.

use std::fmt;
use std::io;
use std::path::Path;

/// Error shown to the user on stderr before exiting with status 1.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the parent directory exists.",
        PermissionDenied => "Check permissions or pick another output path.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check the output path and try again.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a generator error into a CLI error with a hint.
pub fn pow_table_cli_error(context: &str, err: crate::PowTableError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a generator error variant.
pub fn cli_hint(err: &crate::PowTableError) -> String {
    use crate::PowTableError::*;
    match err {
        Config(msg) => format!("{msg}. Check --max-n and --divisor."),
        ValueOutOfRange { n, divisor, value } => format!(
            "entry for n={n}, d={divisor} is {value}, wider than 4 bytes. Lower --max-n or drop --strict to truncate."
        ),
        Json(e) => format!("{e}"),
        Io(io) => format!("{io}"),
    }
}
