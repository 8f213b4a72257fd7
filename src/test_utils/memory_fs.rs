//! In-memory [`Filesystem`] for deterministic tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;

use crate::filesystem::{DirEntry, Filesystem};

#[derive(Debug)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    cwd: PathBuf,
    config_dir: PathBuf,
    temp_counter: Cell<u32>,
}

/// A filesystem held in a map of absolute paths.
///
/// Paths are normalized lexically (`.` and `..` are resolved), which also
/// serves as [`Filesystem::canonicalize`]. Adding a file or directory adds
/// all of its ancestors. Clones share the same state, so a
/// [`FakeEditor`](super::FakeEditor) can modify files the code under test
/// reads.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    state: Rc<RefCell<State>>,
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            c => normalized.push(c),
        }
    }
    normalized
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{} does not exist", path.display()))
}

impl MemoryFilesystem {
    /// Empty filesystem with cwd `/` and config dir `/home/user/.config`.
    #[must_use]
    pub fn new() -> Self {
        let mut dirs = BTreeSet::new();
        dirs.insert(PathBuf::from("/"));
        Self {
            state: Rc::new(RefCell::new(State {
                files: BTreeMap::new(),
                dirs,
                unreadable: HashSet::new(),
                cwd: PathBuf::from("/"),
                config_dir: PathBuf::from("/home/user/.config"),
                temp_counter: Cell::new(0),
            })),
        }
    }

    pub fn set_current_dir(&self, path: impl AsRef<Path>) {
        self.state.borrow_mut().cwd = normalize(path.as_ref());
    }

    pub fn set_config_dir(&self, path: impl AsRef<Path>) {
        self.state.borrow_mut().config_dir = normalize(path.as_ref());
    }

    /// Adds a directory and its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut state = self.state.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            state.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Adds (or replaces) a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = normalize(path.as_ref());
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.state.borrow_mut().files.insert(path, content.into());
    }

    /// Makes reads of `path` fail while it still shows up in listings.
    pub fn fail_reads_of(&self, path: impl AsRef<Path>) {
        self.state.borrow_mut().unreadable.insert(normalize(path.as_ref()));
    }

    /// Current content of a file, if it exists.
    #[must_use]
    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.borrow().files.get(&normalize(path.as_ref())).cloned()
    }

    /// All file paths, sorted.
    #[must_use]
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.state.borrow().files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.state.borrow().dirs.contains(&normalize(path))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let path = normalize(path);
        let state = self.state.borrow();
        if !state.dirs.contains(&path) {
            return Err(not_found(&path));
        }

        let child_name = |child: &Path| -> Option<String> {
            (child.parent() == Some(path.as_path()))
                .then(|| child.file_name().map(|n| n.to_string_lossy().into_owned()))
                .flatten()
        };

        let mut entries: Vec<DirEntry> = state
            .dirs
            .iter()
            .filter_map(|dir| {
                child_name(dir).map(|name| DirEntry {
                    name,
                    is_dir: true,
                })
            })
            .chain(state.files.keys().filter_map(|file| {
                child_name(file).map(|name| DirEntry {
                    name,
                    is_dir: false,
                })
            }))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let path = normalize(path);
        let state = self.state.borrow();
        if state.unreadable.contains(&path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read denied"));
        }
        state.files.get(&path).cloned().ok_or_else(|| not_found(&path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let path = normalize(path);
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        if !self.is_dir(&parent) {
            return Err(not_found(&parent));
        }
        let text = String::from_utf8(contents.to_vec())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.state.borrow_mut().files.insert(path, text);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.add_dir(path);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let path = normalize(path);
        self.state.borrow_mut().files.remove(&path).map(|_| ()).ok_or_else(|| not_found(&path))
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let path = normalize(path);
        let state = self.state.borrow();
        if state.files.contains_key(&path) || state.dirs.contains(&path) {
            Ok(path)
        } else {
            Err(not_found(&path))
        }
    }

    fn create_temp_file(&self, prefix: &str, contents: &str) -> io::Result<PathBuf> {
        let n = {
            let state = self.state.borrow();
            let n = state.temp_counter.get() + 1;
            state.temp_counter.set(n);
            n
        };
        let path = PathBuf::from(format!("/tmp/{prefix}{n:06}.md"));
        self.add_file(&path, contents);
        Ok(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.state.borrow().cwd.clone())
    }

    fn config_dir(&self) -> io::Result<PathBuf> {
        Ok(self.state.borrow().config_dir.clone())
    }
}
