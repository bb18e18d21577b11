//! Error kinds for archview operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide how to report a failure; the
/// renderer itself only ever produces `WriteFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid configuration file or option value
    ConfigInvalid,

    /// Invalid argument passed on the command line or to a function
    InvalidArgument,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Writing rendered output to the sink failed
    WriteFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Deserialization of a world or config document failed
    DeserializationFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether the failure originated in the filesystem or an output stream.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ErrorKind::FileNotFound
                | ErrorKind::PermissionDenied
                | ErrorKind::IoFailed
                | ErrorKind::WriteFailed
        )
    }
}
