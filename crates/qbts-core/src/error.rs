use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while materializing a manifest on disk.
///
/// Every variant aborts the run; files written before the failure stay in place.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("refusing to write '{path}': {reason}")]
    UnsafePath { path: String, reason: &'static str },
    #[error("'{}' exists but is not a directory", .path.display())]
    ParentNotDirectory { path: PathBuf },
    #[error("'{}' is a directory, expected a file path", .path.display())]
    TargetIsDirectory { path: PathBuf },
    #[error("failed to create directory '{}'", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write file '{}'", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to inspect '{}'", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
