//! Diagnostic reporting for rejected operations.
//!
//! Errors are always returned to the caller; reporting is a side channel
//! for whatever `tracing` subscriber the host has installed. With no
//! subscriber the events are discarded.

use crate::error::GeomError;
use std::panic::Location;

/// How loudly a detected error is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Routine rejection, emitted at `DEBUG`.
    Info,
    /// Caller misuse, emitted at `WARN`.
    Warning,
    /// Broken internal state, emitted at `ERROR`.
    Severe,
}

/// Report `err` as detected by `operation`.
///
/// The source file and line recorded are those of the caller.
#[track_caller]
pub fn report(err: &GeomError, severity: Severity, operation: &'static str) {
    let loc = Location::caller();
    let (file, line) = (loc.file(), loc.line());
    let code = err.code();
    match severity {
        Severity::Info => {
            tracing::debug!(code, operation, file, line, "{err}");
        }
        Severity::Warning => {
            tracing::warn!(code, operation, file, line, "{err}");
        }
        Severity::Severe => {
            tracing::error!(code, operation, file, line, "{err}");
        }
    }
}

/// Report the error side of a `Result` and pass it through unchanged.
///
/// ```
/// use tessera_core::{GeomError, ReportExt};
///
/// fn check(dim: usize) -> Result<(), GeomError> {
///     if dim == 0 {
///         return Err(GeomError::DimensionMismatch { expected: 1, found: 0 });
///     }
///     Ok(())
/// }
///
/// assert!(check(0).reported("check").is_err());
/// ```
pub trait ReportExt {
    /// Report an `Err` at [`Severity::Warning`].
    #[track_caller]
    fn reported(self, operation: &'static str) -> Self;

    /// Report an `Err` at the given severity.
    #[track_caller]
    fn reported_as(self, severity: Severity, operation: &'static str) -> Self;
}

impl<T> ReportExt for Result<T, GeomError> {
    #[track_caller]
    fn reported(self, operation: &'static str) -> Self {
        self.reported_as(Severity::Warning, operation)
    }

    #[track_caller]
    fn reported_as(self, severity: Severity, operation: &'static str) -> Self {
        if let Err(err) = &self {
            report(err, severity, operation);
        }
        self
    }
}
