//! The logical prompt namespace built from resolved locations.
//!
//! [`PromptManager`] walks the locations from a [`LocationResolver`] in
//! precedence order and applies two deduplication passes, both
//! "first location wins":
//!
//! 1. by resolved absolute file path (two locations may be the same directory)
//! 2. by prompt name (shadowing)
//!
//! Unreadable directories and files are skipped, so listing prefers partial
//! results over failure.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::resolver::LocationResolver;
use super::{LocationKind, PromptInfo, SelectionItem};
use crate::constants::{DEFAULT_PROMPT_EXTENSION, PROMPT_EXTENSIONS};
use crate::core::{ProomptError, Result};
use crate::filesystem::Filesystem;

/// Returns `true` when `file_name` has a prompt extension (case-insensitive).
#[must_use]
pub fn is_prompt_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PROMPT_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)))
}

/// Prompt name derived from a file name: everything before the last extension.
#[must_use]
pub fn prompt_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map_or_else(|| file_name.to_string(), |stem| stem.to_string_lossy().into_owned())
}

/// List/get/create/delete over the prompt hierarchy.
pub struct PromptManager<'a> {
    fs: &'a dyn Filesystem,
    resolver: &'a dyn LocationResolver,
}

impl<'a> PromptManager<'a> {
    pub fn new(fs: &'a dyn Filesystem, resolver: &'a dyn LocationResolver) -> Self {
        Self {
            fs,
            resolver,
        }
    }

    /// All visible prompts, location-major and file-name-minor.
    pub fn list(&self) -> Result<Vec<PromptInfo>> {
        let locations = self.resolver.resolve()?;

        let mut seen_paths: HashSet<PathBuf> = HashSet::new();
        let mut seen_names: HashSet<String> = HashSet::new();
        let mut prompts = Vec::new();

        for location in locations {
            let entries = match self.fs.read_dir(&location.path) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::debug!(
                        "Skipping {} location {}: {}",
                        location.kind,
                        location.path.display(),
                        e
                    );
                    continue;
                }
            };

            for entry in entries {
                if entry.is_dir || !is_prompt_file(&entry.name) {
                    continue;
                }

                let path = location.path.join(&entry.name);
                let absolute = self.fs.canonicalize(&path).unwrap_or_else(|_| path.clone());
                if !seen_paths.insert(absolute) {
                    tracing::trace!("Skipping duplicate path {}", path.display());
                    continue;
                }

                let name = prompt_name(&entry.name);
                if seen_names.contains(&name) {
                    tracing::trace!("'{}' at {} is shadowed", name, path.display());
                    continue;
                }

                let content = match self.fs.read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::debug!("Skipping unreadable prompt {}: {}", path.display(), e);
                        continue;
                    }
                };

                seen_names.insert(name.clone());
                prompts.push(PromptInfo {
                    name,
                    content,
                    source: location.kind,
                    path,
                });
            }
        }

        Ok(prompts)
    }

    /// The highest-precedence prompt called `name`.
    pub fn get(&self, name: &str) -> Result<PromptInfo> {
        self.list()?.into_iter().find(|prompt| prompt.name == name).ok_or_else(|| {
            ProomptError::PromptNotFound {
                name: name.to_string(),
            }
        })
    }

    /// Writes `<name>.md` into the location of kind `kind`, creating the
    /// directory if needed and overwriting an existing file at that path.
    ///
    /// Returns the path written.
    pub fn create(&self, name: &str, content: &str, kind: LocationKind) -> Result<PathBuf> {
        let location = self
            .resolver
            .resolve()?
            .into_iter()
            .find(|location| location.kind == kind)
            .ok_or_else(|| ProomptError::InvalidLocation {
                location: kind.to_string(),
            })?;

        self.fs
            .create_dir_all(&location.path)
            .map_err(|e| ProomptError::file_system("create directory", &location.path, e))?;

        let path = location.path.join(format!("{name}.{DEFAULT_PROMPT_EXTENSION}"));
        self.fs
            .write(&path, content.as_bytes())
            .map_err(|e| ProomptError::file_system("write prompt", &path, e))?;

        tracing::debug!("Created prompt '{}' at {}", name, path.display());
        Ok(path)
    }

    /// Removes the file backing the visible prompt `name`.
    ///
    /// Returns the removed prompt.
    pub fn delete(&self, name: &str) -> Result<PromptInfo> {
        let prompt = self.get(name)?;
        self.fs
            .remove_file(&prompt.path)
            .map_err(|e| ProomptError::file_system("remove prompt", &prompt.path, e))?;

        tracing::debug!("Removed prompt '{}' at {}", name, prompt.path.display());
        Ok(prompt)
    }

    /// Selection projection of [`list`](Self::list).
    pub fn list_for_selection(&self) -> Result<Vec<SelectionItem>> {
        Ok(self.list()?.iter().map(SelectionItem::from).collect())
    }
}
