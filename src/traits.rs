use std::path::Path;

use serde_json::Value;

use crate::entry::DiskEntry;
use crate::error::Result;
use crate::matchers::Priority;

/// Lists directories and reads files on behalf of the traversal.
///
/// [`DiskFs`](crate::engine::DiskFs) is the real-disk implementation.
/// Implement this to walk anything directory-shaped: archives, in-memory
/// fixtures, or a wrapper that injects failures in tests.
///
/// # Error Handling
///
/// Failures should come back as the I/O variants of
/// [`DirdocError`](crate::DirdocError) carrying the offending path.
/// [`DirdocError::from_io`](crate::DirdocError::from_io) does the
/// classification for plain `std::io::Error`s.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use dirdoc::{DiskEntry, Filesystem, Result};
///
/// struct Empty;
///
/// impl Filesystem for Empty {
///     fn list(&self, _dir: &Path) -> Result<Vec<DiskEntry>> {
///         Ok(Vec::new())
///     }
///
///     fn read(&self, file: &Path) -> Result<Vec<u8>> {
///         Err(dirdoc::DirdocError::NotFound(file.to_path_buf()))
///     }
/// }
/// ```
pub trait Filesystem {
    /// Return the immediate children of `dir`, in the order they should be
    /// processed.
    fn list(&self, dir: &Path) -> Result<Vec<DiskEntry>>;

    /// Read the full contents of `file`.
    fn read(&self, file: &Path) -> Result<Vec<u8>>;
}

/// Decides whether a schema entry applies to a disk entry's name.
///
/// Several matchers may accept the same name; the one with the lowest
/// [`Priority`] wins. Priority is only consulted among matchers whose
/// [`is_match`](Matcher::is_match) already returned `true`.
///
/// # Example
///
/// ```rust
/// use dirdoc::{Matcher, Priority};
///
/// struct Hidden;
///
/// impl Matcher for Hidden {
///     fn priority(&self) -> Priority {
///         Priority::PATTERN
///     }
///
///     fn is_match(&self, name: &str) -> bool {
///         name.starts_with('.')
///     }
/// }
/// ```
pub trait Matcher {
    /// Specificity of this matcher. Constant for the matcher's lifetime.
    fn priority(&self) -> Priority;

    /// Returns `true` if this matcher accepts `name`.
    fn is_match(&self, name: &str) -> bool;
}

/// Accumulates the documents produced for a directory's children.
///
/// A collector is owned by exactly one
/// [`DirectoryEntry`](crate::schema::DirectoryEntry) and reused for every
/// scan of that node, so it must come back to its empty state after
/// [`reset`](Collector::reset).
pub trait Collector {
    /// Add the document produced for the disk entry called `name`.
    fn add(&mut self, name: &str, document: Value);

    /// The aggregate document built so far.
    fn get(&self) -> Value;

    /// Drop everything accumulated so far.
    fn reset(&mut self);

    /// Return the aggregate document and reset in one step.
    fn take(&mut self) -> Value {
        let document = self.get();
        self.reset();
        document
    }
}
