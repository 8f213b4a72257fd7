//! Runtime configuration for proompt.
//!
//! [`Config`] names the three external programs proompt hands control to.
//! It is assembled once at startup and passed down explicitly.
//!
//! # Precedence
//!
//! From lowest to highest:
//!
//! 1. Built-in defaults (`nano`, `fzf`, `pbcopy`)
//! 2. TOML file: `--config <path>`, else `$PROOMPT_CONFIG`, else
//!    `<config dir>/proompt/config.toml` when it exists
//! 3. Environment: `EDITOR`, `PROOMPT_PICKER`, `PROOMPT_COPY_COMMAND`
//!
//! Empty environment values count as unset. An empty `copy_command`
//! disables clipboard copying.
//!
//! ```toml
//! editor = "vim"
//! picker = "fzf --height 40%"
//! copy_command = "xclip -selection clipboard"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_DIR, CONFIG_FILE, DEFAULT_COPY_COMMAND, DEFAULT_EDITOR, DEFAULT_PICKER, ENV_CONFIG,
    ENV_COPY_COMMAND, ENV_EDITOR, ENV_PICKER,
};

/// Shape of the optional config file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picker: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_command: Option<String>,
}

impl FileConfig {
    /// Reads and parses a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }
}

/// Resolved external program commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Command line used to edit prompts and fill-in documents
    pub editor: String,
    /// Command line of the interactive selector
    pub picker: String,
    /// Command line receiving text to copy on stdin; empty disables copying
    pub copy_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: DEFAULT_EDITOR.to_string(),
            picker: DEFAULT_PICKER.to_string(),
            copy_command: DEFAULT_COPY_COMMAND.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration using the process environment.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(explicit_path, |key| std::env::var(key).ok())
    }

    /// Loads the configuration with an injected environment lookup.
    ///
    /// A missing file is only an error when it was named explicitly via
    /// `explicit_path` or `PROOMPT_CONFIG`.
    pub fn load_with_env(
        explicit_path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

        let named = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => lookup(ENV_CONFIG).map(PathBuf::from),
        };

        let file = match named {
            Some(path) => {
                let path = expand_path(&path)?;
                tracing::debug!("Loading config from {}", path.display());
                Some(FileConfig::load_from(&path)?)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => {
                    tracing::debug!("Loading config from {}", path.display());
                    Some(FileConfig::load_from(&path)?)
                }
                _ => None,
            },
        };

        Ok(Self::from_sources(file, lookup))
    }

    /// Merges defaults, an optional file and environment overrides.
    pub fn from_sources(file: Option<FileConfig>, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(file) = file {
            if let Some(editor) = file.editor {
                config.editor = editor;
            }
            if let Some(picker) = file.picker {
                config.picker = picker;
            }
            if let Some(copy_command) = file.copy_command {
                config.copy_command = copy_command;
            }
        }

        let env = |key: &str| env(key).filter(|value| !value.is_empty());
        if let Some(editor) = env(ENV_EDITOR) {
            config.editor = editor;
        }
        if let Some(picker) = env(ENV_PICKER) {
            config.picker = picker;
        }
        if let Some(copy_command) = env(ENV_COPY_COMMAND) {
            config.copy_command = copy_command;
        }

        config
    }

    /// `<config dir>/proompt/config.toml`, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }
}

/// Expands `~` and `$VAR` in a user-supplied path.
fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand config path: {raw}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
