//! Dispatches a pid lookup to the strategy for the running host.

use crate::error::{ResolveError, Result};
use crate::platform::{self, Platform};
use crate::types::PortSet;

/// Resolve the TCP ports currently bound by `pid`.
///
/// Returns an empty [`PortSet`] when the process owns no matching
/// sockets. Non-positive pids fail with
/// [`ResolveError::InvalidArgument`] before any I/O happens.
pub fn resolve(pid: i64) -> Result<PortSet> {
    let pid = validate_pid(pid)?;
    dispatch(Platform::detect()?, pid)
}

fn dispatch(host: Platform, pid: u32) -> Result<PortSet> {
    match host {
        Platform::Linux => platform::linux::resolve(pid),
        Platform::Macos => platform::macos::resolve(pid),
        Platform::Windows => platform::windows::resolve(pid),
    }
}

fn validate_pid(pid: i64) -> Result<u32> {
    if pid <= 0 {
        return Err(ResolveError::InvalidArgument(pid));
    }
    u32::try_from(pid).map_err(|_| ResolveError::InvalidArgument(pid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pid_rejected() {
        assert!(matches!(resolve(0), Err(ResolveError::InvalidArgument(0))));
    }

    #[test]
    fn test_negative_pid_rejected() {
        assert!(matches!(
            resolve(-42),
            Err(ResolveError::InvalidArgument(-42))
        ));
    }

    #[test]
    fn test_oversized_pid_rejected() {
        let pid = i64::from(u32::MAX) + 1;
        assert!(matches!(
            validate_pid(pid),
            Err(ResolveError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_valid_pid_passes_validation() {
        assert_eq!(validate_pid(1234).unwrap(), 1234);
    }
}
