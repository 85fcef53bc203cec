//! # dirdoc
//!
//! Declarative directory schemas: describe the shape of a directory tree,
//! then turn a real tree into one structured document.
//!
//! A schema is a tree of [`Entry`] values. [`FileEntry`] leaves parse one
//! file each; [`DirectoryEntry`] nodes list a directory, hand each child to
//! the most specific schema entry that accepts it, and gather the results
//! with a [`Collector`]. Anything on disk that no schema entry accepts is
//! left out of the document.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//! use dirdoc::{match_all, parsers, DirectoryEntry, Entry, FileEntry, ListCollector, MapCollector};
//!
//! let tmp = tempfile::tempdir().unwrap();
//! fs::create_dir(tmp.path().join("sub")).unwrap();
//! fs::write(tmp.path().join("sub/info.json"), r#"{"k":1}"#).unwrap();
//! fs::write(tmp.path().join("sub/notes.txt"), "hi").unwrap();
//!
//! let sub = DirectoryEntry::new(
//!     match_all(),
//!     ListCollector::new(),
//!     vec![
//!         FileEntry::with_parser("info.json", parsers::json).into(),
//!         FileEntry::new(match_all()).into(),
//!     ],
//! );
//! let mut root: Entry = DirectoryEntry::new(match_all(), MapCollector::new(), vec![sub.into()]).into();
//!
//! let results = dirdoc::scan().root(tmp.path()).run(&mut root).unwrap();
//!
//! assert_eq!(
//!     results.document,
//!     serde_json::json!({
//!         "sub": [
//!             { "k": 1, "_name": "info.json" },
//!             { "contents": "hi", "_name": "notes.txt" },
//!         ]
//!     })
//! );
//! ```
//!
//! # Matching
//!
//! Every entry has a [`Matcher`]. A plain string is shorthand for an exact
//! name. When several schema entries accept the same name, the lowest
//! [`Priority`] wins (`EXACT < PATTERN < ANY`); among equals, the one listed
//! first. A file schema entry never applies to a directory, and vice versa.
//!
//! # Reuse and concurrency
//!
//! Collectors live inside their [`DirectoryEntry`] and are emptied after
//! every scan, so a schema can be scanned repeatedly. Scanning takes the
//! schema by `&mut`, which rules out overlapping scans of one tree; build a
//! separate tree for each concurrent scan.

#![forbid(unsafe_code)]

pub mod engine;
pub mod parsers;

mod builder;
mod collectors;
mod entry;
mod error;
mod matchers;
mod results;
mod schema;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ScanBuilder;
pub use collectors::{ListCollector, MapCollector, NAME_KEY, VALUE_KEY};
pub use engine::{DiskFs, Visit};
pub use entry::{DiskEntry, EntryKind, Location};
pub use error::{BoxError, DirdocError, Result};
pub use matchers::{
    match_all, match_custom, match_exact, match_extension, match_regex, Any, Custom, Exact,
    Extension, IntoMatcher, Pattern, Priority,
};
pub use results::{Results, ScanStats};
pub use schema::{DirectoryEntry, Entry, FileEntry};
pub use traits::{Collector, Filesystem, Matcher};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`ScanBuilder`] to configure and run a scan.
///
/// # Example
///
/// ```rust
/// use dirdoc::{match_all, DirectoryEntry, Entry, FileEntry, MapCollector};
///
/// let tmp = tempfile::tempdir().unwrap();
/// std::fs::write(tmp.path().join("about.md"), "# About").unwrap();
///
/// let mut schema: Entry =
///     DirectoryEntry::new(match_all(), MapCollector::new(), vec![FileEntry::new("about.md").into()]).into();
///
/// let results = dirdoc::scan().root(tmp.path()).run(&mut schema).unwrap();
///
/// assert_eq!(results.document["about.md"]["contents"], "# About");
/// assert_eq!(results.stats.files, 1);
/// ```
pub fn scan() -> ScanBuilder {
    ScanBuilder::default()
}
