//! Windows port discovery via `netstat`.
//!
//! `netstat -ano` reports every active TCP connection with the owning
//! pid in the last column; the rows owned by the target pid yield
//! their local ports.

use std::process::Command;

use crate::error::{ResolveError, Result};
use crate::types::PortSet;

pub fn resolve(pid: u32) -> Result<PortSet> {
    let output = Command::new("netstat")
        .args(["-ano"])
        .output()
        .map_err(|e| ResolveError::PlatformQueryFailed(format!("netstat -ano: {}", e)))?;

    if !output.status.success() {
        return Err(ResolveError::PlatformQueryFailed(format!(
            "netstat -ano exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(filter_netstat_output(
        &String::from_utf8_lossy(&output.stdout),
        pid,
    ))
}

/// Extract the local ports of TCP rows owned by `pid`.
///
/// Example output:
/// ```text
/// Active Connections
///
///   Proto  Local Address          Foreign Address        State           PID
///   TCP    0.0.0.0:135            0.0.0.0:0              LISTENING       1020
///   TCP    [::]:445               [::]:0                 LISTENING       4
/// ```
fn filter_netstat_output(output: &str, pid: u32) -> PortSet {
    let mut ports = PortSet::new();

    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();

        // TCP rows carry proto, local, foreign, state, pid. Banner,
        // header, and UDP rows fall out here.
        if fields.len() < 5 || fields[0] != "TCP" {
            continue;
        }

        if fields[4].parse::<u32>() != Ok(pid) {
            continue;
        }

        if let Some(port) = local_port(fields[1]) {
            ports.insert(port);
        }
    }

    ports
}

/// Port of a local address shaped `ip:port` or `[v6]:port`.
fn local_port(addr: &str) -> Option<u16> {
    let (_, port) = addr.rsplit_once(':')?;
    port.parse().ok()
}
