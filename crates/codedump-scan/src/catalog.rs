//! Single-directory listing for the navigator.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use codedump_core::{Entry, PARENT_REF};

/// List a directory for display, prefixed with the `..` entry.
///
/// The parent reference is omitted only at a filesystem root. Children come
/// in whatever order the filesystem yields them.
pub fn list_entries(path: &Path) -> Vec<Entry> {
    let children = read_children(path);
    let mut entries = Vec::with_capacity(children.len() + 1);
    if path.parent().is_some() {
        entries.push(Entry::parent_ref());
    }
    entries.extend(children);
    entries
}

/// Read the immediate children of a directory.
///
/// Never fails: an unreadable directory yields no children and unreadable
/// individual entries are dropped.
pub fn read_children(path: &Path) -> Vec<Entry> {
    let read_dir = match std::fs::read_dir(path) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "directory listing failed");
            return Vec::new();
        }
    };

    read_dir
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter_map(|entry| {
            let file_type = entry.file_type().ok()?;
            let symlink = file_type.is_symlink();
            // Symlinks are listed by what they point at.
            let is_dir = if symlink {
                entry.path().is_dir()
            } else {
                file_type.is_dir()
            };

            let name = entry.file_name();
            let name = name.to_string_lossy();
            let entry = if is_dir {
                Entry::directory(name.as_ref())
            } else {
                Entry::file(name.as_ref())
            };
            Some(entry.with_symlink(symlink))
        })
        .collect()
}

/// Resolve the path reached by entering `name` from `current`.
///
/// `..` goes to the parent (staying put at a root); anything else is joined.
/// The result is lexically normalized.
pub fn resolve(current: &Path, name: &str) -> PathBuf {
    if name == PARENT_REF {
        return current
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| current.to_path_buf());
    }
    normalize(&current.join(name))
}

/// Lexically normalize a path: drop `.` components and fold `..` into
/// the preceding component. Does not touch the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
