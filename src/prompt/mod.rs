//! Prompt store: locations, resolution, management and placeholders.
//!
//! A prompt is a `.md` or `.txt` file in one of the resolved location
//! directories. Locations are searched in a fixed precedence order:
//!
//! 1. **directory** – `./prompts` under the working directory
//! 2. **project** – `<project root>/prompts`
//! 3. **project-local** – `<project root>/.git/info/prompts`
//! 4. **user** – `<config dir>/proompt/prompts`
//!
//! When several files share a name, only the one from the earliest location
//! is visible (shadowing). Nothing is cached; every call re-reads the disk.
//!
//! # Modules
//!
//! - [`resolver`] – computes the ordered [`PromptLocation`] list
//! - [`manager`] – list/get/create/delete over the resolved locations
//! - [`placeholder`] – `${NAME:-default}` parsing and substitution

pub mod manager;
pub mod placeholder;
pub mod resolver;

pub use manager::PromptManager;
pub use placeholder::{Placeholder, parse_placeholders, substitute_placeholders};
pub use resolver::{DefaultLocationResolver, LocationResolver, find_project_root, resolve_locations};

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The kind of a prompt location, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    /// `./prompts` relative to the working directory
    Directory,
    /// `prompts` at the project root
    Project,
    /// `.git/info/prompts` at the project root
    ProjectLocal,
    /// The per-user configuration directory
    User,
}

impl LocationKind {
    /// All kinds, highest precedence first.
    pub const ALL: [Self; 4] = [Self::Directory, Self::Project, Self::ProjectLocal, Self::User];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Project => "project",
            Self::ProjectLocal => "project-local",
            Self::User => "user",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = crate::core::ProomptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or_else(|| {
            crate::core::ProomptError::InvalidLocation {
                location: s.to_string(),
            }
        })
    }
}

/// A directory searched for prompts, tagged with its precedence kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptLocation {
    pub kind: LocationKind,
    pub path: PathBuf,
}

impl PromptLocation {
    #[must_use]
    pub fn new(kind: LocationKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// A visible prompt with its content loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInfo {
    /// File name without extension
    pub name: String,
    /// File content at the time of the call
    pub content: String,
    /// Location kind the prompt was found in
    pub source: LocationKind,
    /// Path of the prompt file
    pub path: PathBuf,
}

/// Lightweight projection of a prompt for selection UIs and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionItem {
    pub name: String,
    pub source: LocationKind,
    pub path: PathBuf,
}

impl From<&PromptInfo> for SelectionItem {
    fn from(info: &PromptInfo) -> Self {
        Self {
            name: info.name.clone(),
            source: info.source,
            path: info.path.clone(),
        }
    }
}
