//! Global constants used throughout the proompt codebase.
//!
//! This module contains file names, directory names, and default commands
//! that are used across multiple modules. Defining them centrally keeps the
//! on-disk layout discoverable in one place.

/// File extensions (compared case-insensitively) that make a file a prompt.
pub const PROMPT_EXTENSIONS: &[&str] = &["md", "txt"];

/// Extension used when creating a new prompt file.
pub const DEFAULT_PROMPT_EXTENSION: &str = "md";

/// Name of the prompts directory at the directory and project levels.
pub const PROMPTS_DIR: &str = "prompts";

/// Marker directory identifying a project root.
pub const GIT_DIR: &str = ".git";

/// Path of the project-local prompts directory, relative to the project root.
///
/// Lives inside `.git/info` so it is never committed.
pub const PROJECT_LOCAL_PROMPTS_DIR: &str = ".git/info/prompts";

/// Application directory name under the platform configuration directory.
pub const APP_DIR: &str = "proompt";

/// Name of the optional configuration file inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Line that opens and closes the header of an interactive fill-in document.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Prefix for temporary files staged for interactive editing.
pub const TEMP_FILE_PREFIX: &str = "proompt-";

/// Editor used when neither the config file nor `EDITOR` name one.
pub const DEFAULT_EDITOR: &str = "nano";

/// Picker used when neither the config file nor `PROOMPT_PICKER` name one.
pub const DEFAULT_PICKER: &str = "fzf";

/// Clipboard command used when neither the config file nor
/// `PROOMPT_COPY_COMMAND` name one.
pub const DEFAULT_COPY_COMMAND: &str = "pbcopy";

/// Environment variable naming the editor command.
pub const ENV_EDITOR: &str = "EDITOR";

/// Environment variable naming the picker command.
pub const ENV_PICKER: &str = "PROOMPT_PICKER";

/// Environment variable naming the clipboard command.
pub const ENV_COPY_COMMAND: &str = "PROOMPT_COPY_COMMAND";

/// Environment variable pointing at an explicit configuration file.
pub const ENV_CONFIG: &str = "PROOMPT_CONFIG";
