//! Directory entry types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Name of the synthetic parent-reference entry.
pub const PARENT_REF: &str = "..";

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory).
    File,
    /// Directory, including symlinks that resolve to one.
    Directory,
}

/// One child of a directory listing.
///
/// Entries carry no identity beyond name and kind; they are rebuilt on
/// every directory read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// File name (not a path).
    pub name: CompactString,
    /// File or directory.
    pub kind: EntryKind,
    /// Whether the entry itself is a symbolic link.
    #[serde(default)]
    pub symlink: bool,
}

impl Entry {
    /// Create a file entry.
    pub fn file(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            symlink: false,
        }
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            symlink: false,
        }
    }

    /// The synthetic `..` entry.
    pub fn parent_ref() -> Self {
        Self::directory(PARENT_REF)
    }

    /// Mark this entry as a symbolic link.
    pub fn with_symlink(mut self, symlink: bool) -> Self {
        self.symlink = symlink;
        self
    }

    /// Check if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Check if this is the synthetic parent reference.
    #[inline]
    pub fn is_parent_ref(&self) -> bool {
        self.name == PARENT_REF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_ref_is_directory() {
        let parent = Entry::parent_ref();
        assert!(parent.is_dir());
        assert!(parent.is_parent_ref());
        assert!(!parent.symlink);
    }

    #[test]
    fn test_file_entry() {
        let file = Entry::file("main.rs");
        assert!(!file.is_dir());
        assert!(!file.is_parent_ref());
        assert_eq!(file.name, "main.rs");
    }
}
