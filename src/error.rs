//! Error types for port resolution.

use thiserror::Error;

/// Errors surfaced by [`resolve`](crate::resolve).
///
/// "No matching ports" is not an error on any platform; it comes back
/// as an empty [`PortSet`](crate::PortSet) instead.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Pid was zero, negative, or does not fit a `u32`.
    #[error("invalid pid {0}: expected a positive integer")]
    InvalidArgument(i64),

    #[error("unsupported platform '{0}'")]
    UnsupportedPlatform(String),

    /// The native query tool could not be invoked, failed outright, or
    /// a kernel file could not be read for an unexpected reason.
    #[error("platform query failed: {0}")]
    PlatformQueryFailed(String),

    /// The process's descriptor directory does not exist.
    #[error("process {0} not found")]
    ProcessNotFound(u32),

    /// The process's descriptor directory cannot be listed.
    #[error("access denied inspecting process {pid}: {source}")]
    AccessDenied {
        pid: u32,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
