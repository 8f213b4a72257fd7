//! Shared plumbing for CLI commands.

use anyhow::Result;

use crate::external::{Clipboard, Editor, Picker};
use crate::filesystem::Filesystem;
use crate::prompt::{PromptInfo, PromptManager};

/// Capabilities handed to every command.
///
/// Built once in [`Cli::execute`](super::Cli::execute) from the real
/// backends; unit tests build it from the `test_utils` fakes.
pub struct CommandContext<'a> {
    pub manager: PromptManager<'a>,
    pub fs: &'a dyn Filesystem,
    pub editor: &'a dyn Editor,
    pub picker: &'a dyn Picker,
    pub clipboard: &'a dyn Clipboard,
}

impl CommandContext<'_> {
    /// Looks up `name`, or asks the picker when no name was given.
    pub fn select_prompt(&self, name: Option<&str>) -> Result<PromptInfo> {
        if let Some(name) = name {
            return Ok(self.manager.get(name)?);
        }

        let items = self.manager.list_for_selection()?;
        let selected = self.picker.pick(&items)?;
        tracing::debug!("Picked '{}' ({})", selected.name, selected.source);
        Ok(self.manager.get(&selected.name)?)
    }
}
