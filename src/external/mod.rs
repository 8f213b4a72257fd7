//! External programs the interactive commands hand control to.
//!
//! Each capability is a small trait with one shell-backed implementation:
//!
//! - [`Editor`] / [`SystemEditor`] – blocks until the editor exits
//! - [`Picker`] / [`CommandPicker`] – fuzzy selection over prompts
//! - [`Clipboard`] / [`CommandClipboard`] – best-effort copy of the result
//!
//! In-memory fakes live in `test_utils`.

pub mod clipboard;
pub mod command;
pub mod editor;
pub mod picker;

pub use clipboard::CommandClipboard;
pub use editor::SystemEditor;
pub use picker::CommandPicker;

use std::path::Path;

use crate::core::Result;
use crate::prompt::SelectionItem;

/// Opens a file for interactive editing.
pub trait Editor {
    /// Blocks until the editor exits; a nonzero exit is an error.
    fn edit(&self, path: &Path) -> Result<()>;
}

/// Lets the user choose one item.
pub trait Picker {
    /// Fails on an empty list, a cancelled selection or an unknown answer.
    fn pick(&self, items: &[SelectionItem]) -> Result<SelectionItem>;
}

/// Places text on the system clipboard.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}
