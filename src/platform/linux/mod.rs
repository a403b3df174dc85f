//! Linux port discovery from `/proc` - no subprocess needed.
//!
//! Joins the target's socket inodes (`/proc/<pid>/fd`) against the
//! kernel connection tables (`/proc/net/tcp`, `/proc/net/tcp6`). Works
//! inside containers too, since only namespace-local files are read.

pub mod fd;
pub mod net;

use std::io;
use std::path::Path;

use crate::error::{ResolveError, Result};
use crate::types::PortSet;

const TCP_TABLES: [&str; 2] = ["net/tcp", "net/tcp6"];

pub fn resolve(pid: u32) -> Result<PortSet> {
    resolve_under(Path::new("/proc"), pid)
}

/// The join, parameterized over the proc root so tests can run against
/// a synthetic tree.
fn resolve_under(proc_root: &Path, pid: u32) -> Result<PortSet> {
    let inodes = fd::socket_inodes(proc_root, pid)?;

    let mut ports = PortSet::new();
    if inodes.is_empty() {
        return Ok(ports);
    }

    for table in TCP_TABLES {
        let path = proc_root.join(table);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            // Absent table: that protocol family is disabled in this
            // kernel and contributes zero records.
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(ResolveError::PlatformQueryFailed(format!(
                    "reading {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        ports.extend(
            net::parse_tcp_table(&content)
                .into_iter()
                .filter(|record| inodes.contains(&record.inode))
                .map(|record| record.local_port),
        );
    }

    Ok(ports)
}
