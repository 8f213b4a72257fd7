//! Scripted stand-ins for the location resolver and external programs.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::MemoryFilesystem;
use crate::core::{ProomptError, Result};
use crate::external::{Clipboard, Editor, Picker};
use crate::filesystem::Filesystem;
use crate::prompt::{LocationResolver, PromptLocation, SelectionItem};

/// Resolver returning a fixed list of locations.
#[derive(Debug, Clone, Default)]
pub struct StaticLocationResolver {
    locations: Vec<PromptLocation>,
}

impl StaticLocationResolver {
    #[must_use]
    pub const fn new(locations: Vec<PromptLocation>) -> Self {
        Self {
            locations,
        }
    }
}

impl LocationResolver for StaticLocationResolver {
    fn resolve(&self) -> Result<Vec<PromptLocation>> {
        Ok(self.locations.clone())
    }
}

type Rewrite = Box<dyn Fn(&str) -> String>;

/// Editor that rewrites the file in a [`MemoryFilesystem`].
///
/// Without a rewrite the file is left untouched, like a user who saves
/// and quits immediately.
pub struct FakeEditor {
    fs: MemoryFilesystem,
    rewrite: Option<Rewrite>,
    fail: bool,
    edited: RefCell<Vec<PathBuf>>,
}

impl FakeEditor {
    #[must_use]
    pub fn new(fs: &MemoryFilesystem) -> Self {
        Self {
            fs: fs.clone(),
            rewrite: None,
            fail: false,
            edited: RefCell::new(Vec::new()),
        }
    }

    /// Replaces the file content with `rewrite(old content)`.
    #[must_use]
    pub fn with_rewrite(mut self, rewrite: impl Fn(&str) -> String + 'static) -> Self {
        self.rewrite = Some(Box::new(rewrite));
        self
    }

    /// Exits unsuccessfully without touching the file.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Every path handed to [`Editor::edit`], in call order.
    #[must_use]
    pub fn edited_paths(&self) -> Vec<PathBuf> {
        self.edited.borrow().clone()
    }
}

impl Editor for FakeEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        self.edited.borrow_mut().push(path.to_path_buf());
        if self.fail {
            return Err(ProomptError::command_failed("fake-editor", "exited with status 1"));
        }
        if let Some(rewrite) = &self.rewrite {
            let current = self.fs.file_content(path).unwrap_or_default();
            self.fs.write(path, rewrite(&current).as_bytes())?;
        }
        Ok(())
    }
}

/// Picker that answers with the item at a fixed index.
#[derive(Debug, Default)]
pub struct FakePicker {
    index: usize,
    fail: bool,
    offered: RefCell<Vec<Vec<SelectionItem>>>,
}

impl FakePicker {
    /// Picks the first item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selecting(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Behaves like a cancelled selection.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// The item lists the picker was shown.
    #[must_use]
    pub fn offered(&self) -> Vec<Vec<SelectionItem>> {
        self.offered.borrow().clone()
    }
}

impl Picker for FakePicker {
    fn pick(&self, items: &[SelectionItem]) -> Result<SelectionItem> {
        self.offered.borrow_mut().push(items.to_vec());
        if items.is_empty() {
            return Err(ProomptError::NoPrompts);
        }
        if self.fail {
            return Err(ProomptError::command_failed("fake-picker", "no selection made"));
        }
        items.get(self.index).cloned().ok_or_else(|| {
            ProomptError::command_failed("fake-picker", "selection does not match any prompt")
        })
    }
}

/// Clipboard that records what it was given.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    fail: bool,
    copies: RefCell<Vec<String>>,
}

impl FakeClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn copies(&self) -> Vec<String> {
        self.copies.borrow().clone()
    }

    #[must_use]
    pub fn last_copied(&self) -> Option<String> {
        self.copies.borrow().last().cloned()
    }
}

impl Clipboard for FakeClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(ProomptError::command_failed("fake-clipboard", "no clipboard available"));
        }
        self.copies.borrow_mut().push(text.to_string());
        Ok(())
    }
}
