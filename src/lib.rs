//! proompt - a prompt file manager
//!
//! proompt keeps reusable prompts as plain `.md` / `.txt` files in a
//! hierarchy of directories and turns them into ready-to-paste text.
//!
//! # Locations
//!
//! Prompts are looked up in four locations, highest precedence first:
//!
//! | Kind            | Directory                               |
//! |-----------------|-----------------------------------------|
//! | `directory`     | `./prompts`                             |
//! | `project`       | `<project root>/prompts`                |
//! | `project-local` | `<project root>/.git/info/prompts`      |
//! | `user`          | `<config dir>/proompt/prompts`          |
//!
//! The project root is the nearest ancestor of the working directory that
//! contains `.git` or `prompts`. A prompt's name is its file name without
//! extension, and a name found in a higher location shadows the same name
//! further down.
//!
//! # Placeholders
//!
//! Prompt text may contain `${NAME}` or `${NAME:-default}`; `$$` is a
//! literal `$`. Picking a prompt with placeholders opens a YAML frontmatter
//! document in the editor so values can be filled in:
//!
//! ```text
//! ---
//! NAME: World
//! ---
//! Hello ${NAME:-World}!
//! ```
//!
//! # Modules
//!
//! - [`prompt`] - locations, the prompt manager, placeholder engine
//! - [`markdown`] - frontmatter encoding of the fill-in document
//! - [`fill_in`] - the interactive fill-in flow
//! - [`filesystem`] / [`external`] - capabilities the core runs against
//! - [`config`] - editor, picker and clipboard commands
//! - [`cli`] - the `proompt` command tree

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod external;
pub mod filesystem;
pub mod fill_in;
pub mod markdown;
pub mod prompt;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
