//! macOS port discovery via `lsof`.
//!
//! `lsof -iTCP -n -P` lists every descriptor with a TCP association
//! across all processes; the lines belonging to the target pid carry
//! `address:port` tokens.

use std::process::Command;

use crate::error::{ResolveError, Result};
use crate::types::PortSet;

pub fn resolve(pid: u32) -> Result<PortSet> {
    let output = Command::new("lsof")
        .args(["-iTCP", "-n", "-P"])
        .output()
        .map_err(|e| ResolveError::PlatformQueryFailed(format!("lsof -iTCP -n -P: {}", e)))?;

    if !output.status.success() {
        // lsof also exits non-zero when nothing matched; only a
        // non-empty stderr marks a real invocation failure.
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            return Err(ResolveError::PlatformQueryFailed(format!(
                "lsof exited with {}: {}",
                output.status, stderr
            )));
        }
        return Ok(PortSet::new());
    }

    Ok(scan_lsof_output(&String::from_utf8_lossy(&output.stdout), pid))
}

/// Collect ports from the lines owned by `pid`.
///
/// A line participates only when one of its whitespace tokens equals
/// the pid exactly; pid 1234 must not match inside "12345".
fn scan_lsof_output(output: &str, pid: u32) -> PortSet {
    let pid_token = pid.to_string();
    let mut ports = PortSet::new();

    for line in output.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if !tokens.iter().any(|&t| t == pid_token) {
            continue;
        }

        for token in tokens {
            if let Some(port) = trailing_port(token) {
                ports.insert(port);
            }
        }
    }

    ports
}

/// Port of an `address:port` token: the text after the *last* colon,
/// so IPv6 shapes like `::1:3000` yield 3000. Accepted only when
/// all-digit and within `u16`.
fn trailing_port(token: &str) -> Option<u16> {
    let (_, tail) = token.rsplit_once(':')?;
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok()
}
