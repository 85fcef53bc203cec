use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::entry::{DiskEntry, EntryKind};
use crate::error::{DirdocError, Result};
use crate::matchers::Priority;
use crate::traits::Filesystem;

// ---------------------------------------------------------------------------
// DiskFs
// ---------------------------------------------------------------------------

/// The real filesystem.
///
/// Listings are shallow and unfiltered: hidden files, `.gitignore`d files
/// and the like are all reported. Symlinks are not followed. By default
/// entries come back sorted by file name so scans are reproducible; turn
/// that off with [`sorted(false)`](DiskFs::sorted) to get whatever order the
/// OS hands out.
#[derive(Debug, Clone)]
pub struct DiskFs {
    sorted: bool,
}

impl Default for DiskFs {
    fn default() -> Self {
        Self { sorted: true }
    }
}

impl DiskFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted(mut self, yes: bool) -> Self {
        self.sorted = yes;
        self
    }
}

impl Filesystem for DiskFs {
    fn list(&self, dir: &Path) -> Result<Vec<DiskEntry>> {
        // The walker happily yields a lone file as its own root, so check up front.
        let meta = std::fs::metadata(dir).map_err(|e| DirdocError::from_io(dir, e))?;
        if !meta.is_dir() {
            return Err(DirdocError::NotADirectory(dir.to_path_buf()));
        }

        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .max_depth(Some(1));

        if self.sorted {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        let mut entries = Vec::new();
        for res in builder.build() {
            let entry = res.map_err(|e| map_ignore_error(dir, e))?;

            // Skip the directory itself
            if entry.depth() == 0 {
                continue;
            }

            let kind = match entry.file_type() {
                Some(ft) if ft.is_dir()     => EntryKind::Dir,
                Some(ft) if ft.is_file()    => EntryKind::File,
                Some(ft) if ft.is_symlink() => EntryKind::Symlink,
                _                           => EntryKind::Other,
            };

            entries.push(DiskEntry {
                path:      entry.path().to_path_buf(),
                name:      entry.file_name().to_string_lossy().into_owned(),
                file_name: entry.file_name().to_os_string(),
                kind,
            });
        }

        Ok(entries)
    }

    fn read(&self, file: &Path) -> Result<Vec<u8>> {
        std::fs::read(file).map_err(|e| DirdocError::from_io(file, e))
    }
}

// ---------------------------------------------------------------------------
// Walk
// ---------------------------------------------------------------------------

/// What the traversal did with one listed entry, as reported to an observer.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// The directory being listed.
    pub dir: &'a Path,

    /// The listed entry.
    pub entry: &'a DiskEntry,

    /// Priority of the schema entry chosen for it, or `None` if no schema
    /// entry applied and it was skipped.
    pub selected: Option<Priority>,
}

pub(crate) type Observer<'a> = Box<dyn FnMut(&Visit<'_>) + 'a>;

/// State threaded through one traversal: the filesystem, counters for
/// [`ScanStats`](crate::ScanStats) and the optional observer.
pub(crate) struct Walk<'a> {
    pub fs:          &'a dyn Filesystem,
    pub files_read:  usize,
    pub dirs_listed: usize,
    pub skipped:     usize,
    observer:        Option<Observer<'a>>,
}

impl<'a> Walk<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self {
            fs,
            files_read:  0,
            dirs_listed: 0,
            skipped:     0,
            observer:    None,
        }
    }

    pub fn with_observer(mut self, observer: Observer<'a>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn visit(&mut self, dir: &Path, entry: &DiskEntry, selected: Option<Priority>) {
        tracing::trace!(
            dir = %dir.display(),
            name = %entry.name,
            kind = ?entry.kind,
            selected = ?selected,
            "visiting entry"
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(&Visit { dir, entry, selected });
        }
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to DirdocError
// ---------------------------------------------------------------------------

fn map_ignore_error(dir: &Path, e: ignore::Error) -> DirdocError {
    match e {
        ignore::Error::WithPath { path, err } => map_ignore_error(&path, *err),
        ignore::Error::WithDepth { err, .. }  => map_ignore_error(dir, *err),
        ignore::Error::Io(io_err)             => DirdocError::from_io(dir, io_err),
        other => DirdocError::Io {
            path:   PathBuf::from(dir),
            source: std::io::Error::new(std::io::ErrorKind::Other, other.to_string()),
        },
    }
}
