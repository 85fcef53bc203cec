use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A single item returned by a [`Filesystem`](crate::traits::Filesystem) listing.
///
/// Only `name` and `kind` take part in schema matching. `name` is a lossy
/// UTF-8 rendering used for matchers and collector keys; `file_name` is the
/// exact on-disk name and is what the traversal uses to reach the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskEntry {
    /// Full path to the entry.
    pub path: PathBuf,

    /// The entry's file name, lossily converted to UTF-8.
    pub name: String,

    /// The entry's file name exactly as the filesystem reported it.
    pub file_name: OsString,

    /// What kind of entry this is.
    pub kind: EntryKind,
}

/// The kind of a listed entry.
///
/// Symlinks are reported as such and never resolved, so they match neither
/// file nor directory schema entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

/// Identifies exactly one filesystem item to process: the directory it lives
/// in and its name within that directory.
///
/// A fresh `Location` is built for every recursive step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub base:   PathBuf,
    pub target: OsString,
}

impl Location {
    pub fn new(base: impl Into<PathBuf>, target: impl Into<OsString>) -> Self {
        Self {
            base:   base.into(),
            target: target.into(),
        }
    }

    /// Split a path into its parent and final component.
    ///
    /// Paths without a final component (`/`, `..`) keep the whole path as
    /// the base with an empty target, which [`path()`](Location::path)
    /// joins back to the original.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => Self::new(parent, name),
            _ => Self::new(path, ""),
        }
    }

    /// The joined path `base/target`.
    pub fn path(&self) -> PathBuf {
        if self.target.is_empty() {
            self.base.clone()
        } else {
            self.base.join(&self.target)
        }
    }
}
