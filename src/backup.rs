//! Safe-mode vault snapshots.

use crate::error::{LinkerError, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// A completed snapshot of the vault directory tree.
///
/// Created at most once per run, before any mutation; never touched again
/// afterwards. Deleting it is up to the user.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VaultSnapshot {
    /// Where the copy landed.
    pub dest: PathBuf,

    /// Number of files copied.
    pub files: usize,
}

/// Copy the entire vault tree to a timestamped sibling directory.
///
/// The destination is `<vault>-backup-<YYYYMMDDTHHMMSS>` next to the vault
/// root (a numeric suffix is added if that name is taken). Any failure
/// removes the partial copy and returns `Backup`, so from the caller's point
/// of view the snapshot either fully exists or does not exist at all.
pub fn snapshot(vault_root: &Path) -> Result<VaultSnapshot> {
    let dest = snapshot_dest(vault_root)?;

    match copy_tree(vault_root, &dest) {
        Ok(files) => Ok(VaultSnapshot { dest, files }),
        Err(source) => {
            // Best effort: don't leave a half-written snapshot behind.
            let _ = std::fs::remove_dir_all(&dest);
            Err(LinkerError::Backup { dest, source })
        }
    }
}

fn snapshot_dest(vault_root: &Path) -> Result<PathBuf> {
    let name = vault_root
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("vault");
    let parent = vault_root.parent().unwrap_or_else(|| Path::new("."));
    let stamp = Local::now().format("%Y%m%dT%H%M%S");

    let base = parent.join(format!("{}-backup-{}", name, stamp));
    if !base.exists() {
        return Ok(base);
    }

    for n in 1..100 {
        let alt = parent.join(format!("{}-backup-{}-{}", name, stamp, n));
        if !alt.exists() {
            return Ok(alt);
        }
    }

    Err(LinkerError::Backup {
        dest: base,
        source: std::io::Error::other("could not find a free snapshot directory name"),
    })
}

fn copy_tree(src: &Path, dest: &Path) -> std::io::Result<usize> {
    std::fs::create_dir(dest)?;
    let mut files = 0;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            files += copy_tree(&path, &target)?;
        } else {
            std::fs::copy(&path, &target)?;
            files += 1;
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_vault(parent: &Path) -> PathBuf {
        let vault = parent.join("vault");
        std::fs::create_dir(&vault).unwrap();
        std::fs::write(vault.join("a.md"), "A").unwrap();
        std::fs::create_dir(vault.join("sub")).unwrap();
        std::fs::write(vault.join("sub").join("b.md"), "B").unwrap();
        std::fs::create_dir(vault.join(".obsidian")).unwrap();
        std::fs::write(vault.join(".obsidian").join("app.json"), "{}").unwrap();
        vault
    }

    #[test]
    fn test_snapshot_copies_full_tree() {
        let dir = TempDir::new().unwrap();
        let vault = make_vault(dir.path());

        let snap = snapshot(&vault).unwrap();
        assert_eq!(snap.files, 3);
        assert!(snap.dest.starts_with(dir.path()));
        assert!(snap.dest.join("a.md").is_file());
        assert!(snap.dest.join("sub").join("b.md").is_file());
        // The whole tree is snapshotted, dot directories included.
        assert!(snap.dest.join(".obsidian").join("app.json").is_file());

        let name = snap.dest.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("vault-backup-"));
    }

    #[test]
    fn test_snapshot_does_not_mutate_source() {
        let dir = TempDir::new().unwrap();
        let vault = make_vault(dir.path());

        snapshot(&vault).unwrap();
        assert_eq!(std::fs::read_to_string(vault.join("a.md")).unwrap(), "A");
    }

    #[test]
    fn test_second_snapshot_gets_distinct_dir() {
        let dir = TempDir::new().unwrap();
        let vault = make_vault(dir.path());

        let first = snapshot(&vault).unwrap();
        let second = snapshot(&vault).unwrap();
        assert_ne!(first.dest, second.dest);
    }

    #[cfg(unix)]
    #[test]
    fn test_snapshot_failure_reports_backup_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let parent = dir.path().join("readonly");
        std::fs::create_dir(&parent).unwrap();
        let vault = make_vault(&parent);

        // Make the snapshot destination (the vault's parent) unwritable.
        std::fs::set_permissions(&parent, std::fs::Permissions::from_mode(0o555)).unwrap();

        let result = snapshot(&vault);
        assert!(matches!(result, Err(LinkerError::Backup { .. })));

        // Restore so TempDir can clean up.
        std::fs::set_permissions(&parent, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
