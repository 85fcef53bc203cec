use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::engine::Walk;
use crate::entry::{DiskEntry, EntryKind, Location};
use crate::error::{DirdocError, Result};
use crate::matchers::{IntoMatcher, Priority};
use crate::parsers::{self, ParseResult};
use crate::traits::{Collector, Filesystem, Matcher};

type Parser = dyn Fn(&[u8]) -> ParseResult;

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One node of a schema tree: either a file or a directory.
///
/// Build leaves with [`FileEntry`], group them with [`DirectoryEntry`], and
/// convert either into an `Entry` with `.into()` when placing it in a
/// directory's child list.
pub enum Entry {
    File(FileEntry),
    Directory(DirectoryEntry),
}

impl Entry {
    /// The matcher deciding which names this entry accepts.
    pub fn matcher(&self) -> &dyn Matcher {
        match self {
            Self::File(f)      => f.matcher.as_ref(),
            Self::Directory(d) => d.matcher.as_ref(),
        }
    }

    pub fn priority(&self) -> Priority {
        self.matcher().priority()
    }

    /// The only disk-entry kind this schema entry can ever apply to.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::File(_)      => EntryKind::File,
            Self::Directory(_) => EntryKind::Dir,
        }
    }

    /// `true` if `disk` has this entry's kind and its name passes the
    /// matcher. The matcher is not consulted on a kind mismatch.
    pub fn is_applicable(&self, disk: &DiskEntry) -> bool {
        disk.kind == self.kind() && self.matcher().is_match(&disk.name)
    }

    /// Turn the item at `location` into a document.
    ///
    /// # Errors
    ///
    /// Any listing, read or parse failure anywhere below `location` aborts
    /// the whole call; no partial document is returned.
    pub fn produce(&mut self, fs: &dyn Filesystem, location: &Location) -> Result<Value> {
        self.produce_with(&mut Walk::new(fs), location)
    }

    pub(crate) fn produce_with(&mut self, walk: &mut Walk<'_>, location: &Location) -> Result<Value> {
        match self {
            Self::File(f)      => f.produce_with(walk, location),
            Self::Directory(d) => d.produce_with(walk, location),
        }
    }
}

impl From<FileEntry> for Entry {
    fn from(f: FileEntry) -> Self {
        Self::File(f)
    }
}

impl From<DirectoryEntry> for Entry {
    fn from(d: DirectoryEntry) -> Self {
        Self::Directory(d)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(e)      => e.fmt(f),
            Self::Directory(e) => e.fmt(f),
        }
    }
}

// ---------------------------------------------------------------------------
// FileEntry
// ---------------------------------------------------------------------------

/// A leaf schema entry: reads one file and parses it into a document.
pub struct FileEntry {
    matcher: Box<dyn Matcher>,
    parser:  Box<Parser>,
}

impl FileEntry {
    /// A file entry using [`parsers::raw`], which yields
    /// `{"contents": <text>}`.
    pub fn new(matcher: impl IntoMatcher) -> Self {
        Self::with_parser(matcher, parsers::raw)
    }

    /// A file entry with a custom parser. See [`parsers`] for ready-made ones.
    pub fn with_parser<P>(matcher: impl IntoMatcher, parser: P) -> Self
    where
        P: Fn(&[u8]) -> ParseResult + 'static,
    {
        Self {
            matcher: matcher.into_matcher(),
            parser:  Box::new(parser),
        }
    }

    /// Read and parse the file at `location`.
    pub fn produce(&self, fs: &dyn Filesystem, location: &Location) -> Result<Value> {
        self.produce_with(&mut Walk::new(fs), location)
    }

    fn produce_with(&self, walk: &mut Walk<'_>, location: &Location) -> Result<Value> {
        let path = location.path();
        let bytes = walk.fs.read(&path)?;
        walk.files_read += 1;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "parsing file");

        (self.parser)(&bytes).map_err(|source| DirdocError::Parse { path, source })
    }
}

impl fmt::Debug for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileEntry")
            .field("priority", &self.matcher.priority())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// DirectoryEntry
// ---------------------------------------------------------------------------

/// A composite schema entry: lists a directory, hands each child to the
/// best-matching schema entry, and gathers the results in its collector.
///
/// # Reuse
///
/// The collector belongs to this node and is emptied at the end of every
/// [`produce`](DirectoryEntry::produce), whether it succeeds or fails, so
/// the same schema can be scanned any number of times in sequence.
/// `produce` takes `&mut self`: two scans cannot share a schema tree at
/// the same time. Build one tree per concurrent scan.
pub struct DirectoryEntry {
    matcher:   Box<dyn Matcher>,
    collector: Box<dyn Collector>,
    children:  Vec<Entry>,
}

impl DirectoryEntry {
    /// A directory entry with an ordered list of child schemas.
    ///
    /// Child order only matters for ties: when two applicable children share
    /// a priority, the earlier one is used.
    pub fn new<C>(matcher: impl IntoMatcher, collector: C, children: Vec<Entry>) -> Self
    where
        C: Collector + 'static,
    {
        Self {
            matcher:   matcher.into_matcher(),
            collector: Box::new(collector),
            children,
        }
    }

    /// Append one more child schema.
    pub fn with_child(mut self, child: impl Into<Entry>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[Entry] {
        &self.children
    }

    /// The child schema that should handle `disk`, if any.
    ///
    /// One pass over the children: an applicable child replaces the current
    /// best only when its priority is strictly lower, so among equals the
    /// first in list order is kept.
    pub fn select(&self, disk: &DiskEntry) -> Option<&Entry> {
        self.select_index(disk).map(|i| &self.children[i])
    }

    fn select_index(&self, disk: &DiskEntry) -> Option<usize> {
        let mut best: Option<(usize, Priority)> = None;

        for (index, child) in self.children.iter().enumerate() {
            if !child.is_applicable(disk) {
                continue;
            }
            let priority = child.priority();
            match best {
                Some((_, current)) if !priority.beats(current) => {}
                _ => best = Some((index, priority)),
            }
        }

        best.map(|(index, _)| index)
    }

    /// List the directory at `location` and build its document.
    pub fn produce(&mut self, fs: &dyn Filesystem, location: &Location) -> Result<Value> {
        self.produce_with(&mut Walk::new(fs), location)
    }

    fn produce_with(&mut self, walk: &mut Walk<'_>, location: &Location) -> Result<Value> {
        let path = location.path();
        let listing = walk.fs.list(&path)?;
        walk.dirs_listed += 1;

        tracing::debug!(path = %path.display(), entries = listing.len(), "listing directory");

        // Drain the collector even when a child fails part-way through.
        let filled = self.fill(walk, &path, &listing);
        let document = self.collector.take();
        filled.map(|()| document)
    }

    fn fill(&mut self, walk: &mut Walk<'_>, path: &Path, listing: &[DiskEntry]) -> Result<()> {
        for disk in listing {
            let selected = self.select_index(disk);
            walk.visit(path, disk, selected.map(|i| self.children[i].priority()));

            let Some(index) = selected else {
                walk.skipped += 1;
                continue;
            };

            let next = Location::new(path, disk.file_name.as_os_str());
            let document = self.children[index].produce_with(walk, &next)?;
            self.collector.add(&disk.name, document);
        }
        Ok(())
    }
}

impl fmt::Debug for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryEntry")
            .field("priority", &self.matcher.priority())
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
