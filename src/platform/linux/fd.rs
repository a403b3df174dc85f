//! Phase one of the Linux strategy: which socket inodes does the
//! process own?

use std::collections::HashSet;
use std::io;
use std::path::Path;

use crate::error::{ResolveError, Result};

/// Collect the socket inodes behind `<root>/<pid>/fd`.
///
/// Individual descriptors that cannot be resolved (closed in the
/// meantime, unreadable) are skipped; failing to list the directory
/// itself propagates, because the process is gone or off-limits.
pub fn socket_inodes(proc_root: &Path, pid: u32) -> Result<HashSet<u64>> {
    let fd_dir = proc_root.join(pid.to_string()).join("fd");

    let entries = std::fs::read_dir(&fd_dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ResolveError::ProcessNotFound(pid),
        io::ErrorKind::PermissionDenied => ResolveError::AccessDenied { pid, source: e },
        _ => ResolveError::PlatformQueryFailed(format!("listing {}: {}", fd_dir.display(), e)),
    })?;

    let mut inodes = HashSet::new();

    for entry in entries.flatten() {
        if let Ok(target) = std::fs::read_link(entry.path()) {
            if let Some(inode) = socket_inode(&target) {
                inodes.insert(inode);
            }
        }
    }

    Ok(inodes)
}

/// Inode of a descriptor link shaped `socket:[N]`; `None` for pipes,
/// anon inodes, and regular paths.
fn socket_inode(target: &Path) -> Option<u64> {
    target
        .to_str()?
        .strip_prefix("socket:[")?
        .strip_suffix(']')?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_socket_inode_valid() {
        assert_eq!(socket_inode(&PathBuf::from("socket:[12345]")), Some(12345));
    }

    #[test]
    fn test_socket_inode_large() {
        assert_eq!(
            socket_inode(&PathBuf::from("socket:[9876543210]")),
            Some(9876543210)
        );
    }

    #[test]
    fn test_socket_inode_rejects_other_links() {
        assert_eq!(socket_inode(&PathBuf::from("pipe:[12345]")), None);
        assert_eq!(socket_inode(&PathBuf::from("anon_inode:[eventfd]")), None);
        assert_eq!(socket_inode(&PathBuf::from("/dev/null")), None);
    }

    #[test]
    fn test_socket_inode_rejects_garbage_number() {
        assert_eq!(socket_inode(&PathBuf::from("socket:[abc]")), None);
        assert_eq!(socket_inode(&PathBuf::from("socket:[]")), None);
    }

    #[cfg(unix)]
    fn fake_fd_dir(pid: u32, targets: &[&str]) -> tempfile::TempDir {
        use std::os::unix::fs::symlink;

        let root = tempfile::tempdir().unwrap();
        let fd_dir = root.path().join(pid.to_string()).join("fd");
        std::fs::create_dir_all(&fd_dir).unwrap();
        for (i, target) in targets.iter().enumerate() {
            symlink(target, fd_dir.join(i.to_string())).unwrap();
        }
        root
    }

    #[cfg(unix)]
    #[test]
    fn test_collects_only_socket_links() {
        let root = fake_fd_dir(42, &["socket:[100]", "pipe:[7]", "/dev/null", "socket:[200]"]);
        let inodes = socket_inodes(root.path(), 42).unwrap();
        assert_eq!(inodes, HashSet::from([100, 200]));
    }

    #[cfg(unix)]
    #[test]
    fn test_duplicate_targets_collapse() {
        // Dup'd descriptors share one socket.
        let root = fake_fd_dir(42, &["socket:[100]", "socket:[100]"]);
        let inodes = socket_inodes(root.path(), 42).unwrap();
        assert_eq!(inodes.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_fd_dir_is_process_not_found() {
        let root = tempfile::tempdir().unwrap();
        let err = socket_inodes(root.path(), 42).unwrap_err();
        assert!(matches!(err, ResolveError::ProcessNotFound(42)));
    }
}
