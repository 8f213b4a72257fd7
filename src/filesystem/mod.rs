//! Filesystem capability used by the prompt store and the fill-in flow.
//!
//! Everything that touches the disk goes through the [`Filesystem`] trait so
//! the resolver, the manager and the interactive flow can run against either
//! the host filesystem ([`RealFilesystem`]) or the in-memory fake from
//! `test_utils`.
//!
//! Probing calls ([`Filesystem::is_dir`], [`Filesystem::read_dir`]) report
//! absence rather than failing loudly; callers treat a missing directory as
//! "location absent".

use std::io;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_PROMPT_EXTENSION;

/// A single directory entry as seen by the prompt store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name without any leading directory
    pub name: String,
    /// Whether the entry is itself a directory
    pub is_dir: bool,
}

/// Host filesystem operations consumed by the core.
///
/// All methods may fail with a plain [`io::Error`]; callers attach path
/// context where the operation itself cannot proceed.
pub trait Filesystem {
    /// Returns `true` when `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists the entries of a directory, sorted by file name.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Reads a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Creates `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Removes a single file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Resolves `path` to an absolute path with symlinks followed.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Creates a uniquely named temporary file holding `contents` and
    /// returns its path. The file outlives the call; wrap it in a
    /// [`StagedFile`] to have it removed.
    fn create_temp_file(&self, prefix: &str, contents: &str) -> io::Result<PathBuf>;

    /// The process working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// The platform configuration directory (e.g. `~/.config` on Linux).
    fn config_dir(&self) -> io::Result<PathBuf>;
}

/// [`Filesystem`] backed by the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFilesystem;

impl RealFilesystem {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Filesystem for RealFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            // file_type() does not follow symlinks; metadata() does
            let is_dir = entry.path().is_dir();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        path.canonicalize()
    }

    fn create_temp_file(&self, prefix: &str, contents: &str) -> io::Result<PathBuf> {
        use std::io::Write;

        let mut file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(&format!(".{DEFAULT_PROMPT_EXTENSION}"))
            .tempfile()?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        // Persist it: the editor may replace the file, so deletion is left to StagedFile
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> io::Result<PathBuf> {
        dirs::config_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Unable to determine user config directory")
        })
    }
}

/// A temporary file that is removed through its [`Filesystem`] when dropped.
///
/// Removal happens on every exit path, including early returns after an
/// editor failure. Removal errors are logged and otherwise ignored.
pub struct StagedFile<'a> {
    fs: &'a dyn Filesystem,
    path: PathBuf,
}

impl<'a> StagedFile<'a> {
    /// Creates the temporary file with the given contents.
    pub fn create(fs: &'a dyn Filesystem, prefix: &str, contents: &str) -> io::Result<Self> {
        let path = fs.create_temp_file(prefix, contents)?;
        tracing::debug!("Staged temporary file {}", path.display());
        Ok(Self {
            fs,
            path,
        })
    }

    /// Path of the staged file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedFile<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.fs.remove_file(&self.path) {
            tracing::debug!("Failed to remove temporary file {}: {}", self.path.display(), e);
        }
    }
}
