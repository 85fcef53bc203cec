use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Instant;

use crate::engine::{DiskFs, Observer, Visit, Walk};
use crate::entry::Location;
use crate::error::{DirdocError, Result};
use crate::results::{Results, ScanStats};
use crate::schema::Entry;
use crate::traits::Filesystem;

// ---------------------------------------------------------------------------
// ScanBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a scan.
///
/// Created via [`dirdoc::scan()`](crate::scan). Configure with chained
/// builder methods, then call [`run()`](ScanBuilder::run) with the root
/// schema entry.
///
/// # Example
///
/// ```rust,ignore
/// let results = dirdoc::scan()
///     .root("data")
///     .sorted(true)
///     .observe(|visit| println!("{}", visit.entry.name))
///     .run(&mut schema)?;
/// ```
pub struct ScanBuilder {
    location:   Option<Location>,
    filesystem: Option<Box<dyn Filesystem>>,
    sorted:     bool,
    observer:   Option<Observer<'static>>,
}

impl Default for ScanBuilder {
    fn default() -> Self {
        Self {
            location:   None,
            filesystem: None,
            sorted:     true,
            observer:   None,
        }
    }
}

impl ScanBuilder {
    // ── Location ──────────────────────────────────────────────────────────

    /// Scan the item at `path`. The root schema entry's matcher is not
    /// consulted for it.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(Location::from_path(path.into()));
        self
    }

    /// Scan `target` inside `base`.
    pub fn location(mut self, base: impl Into<PathBuf>, target: impl Into<OsString>) -> Self {
        self.location = Some(Location::new(base, target));
        self
    }

    // ── Filesystem ────────────────────────────────────────────────────────

    /// Read from a custom [`Filesystem`] instead of the disk.
    ///
    /// When set, [`sorted()`](ScanBuilder::sorted) has no effect; ordering is
    /// up to the custom implementation.
    pub fn filesystem(mut self, fs: impl Filesystem + 'static) -> Self {
        self.filesystem = Some(Box::new(fs));
        self
    }

    /// Sort disk listings by file name. Enabled by default.
    pub fn sorted(mut self, yes: bool) -> Self {
        self.sorted = yes;
        self
    }

    // ── Observer ──────────────────────────────────────────────────────────

    /// Call `f` for every listed entry, whether or not a schema entry
    /// applied to it.
    pub fn observe(mut self, f: impl FnMut(&Visit<'_>) + 'static) -> Self {
        self.observer = Some(Box::new(f));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Walk the configured location against `schema` and return the
    /// document it produces.
    ///
    /// # Errors
    ///
    /// [`DirdocError::InvalidSource`] if no location was configured, and
    /// otherwise the first listing, read or parse failure in traversal
    /// order.
    pub fn run(self, schema: &mut Entry) -> Result<Results> {
        let location = self.location.ok_or_else(|| {
            DirdocError::InvalidSource("no root location provided".into())
        })?;

        let fs: Box<dyn Filesystem> = match self.filesystem {
            Some(fs) => fs,
            None     => Box::new(DiskFs::new().sorted(self.sorted)),
        };

        let start = Instant::now();
        let mut walk = Walk::new(fs.as_ref());
        if let Some(observer) = self.observer {
            walk = walk.with_observer(observer);
        }
        let document = schema.produce_with(&mut walk, &location)?;
        let duration = start.elapsed();

        tracing::debug!(
            files = walk.files_read,
            dirs = walk.dirs_listed,
            skipped = walk.skipped,
            ?duration,
            "scan complete"
        );

        Ok(Results {
            document,
            stats: ScanStats {
                files:   walk.files_read,
                dirs:    walk.dirs_listed,
                skipped: walk.skipped,
                duration,
            },
        })
    }
}
