//! Clipboard copy through a configured command (`pbcopy`, `wl-copy`, ...).

use super::Clipboard;
use super::command::ShellCommand;
use crate::core::Result;

/// Pipes text into the configured copy command.
///
/// An empty command disables copying.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: String,
}

impl CommandClipboard {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.command.trim().is_empty() {
            tracing::debug!("No copy command configured; skipping clipboard");
            return Ok(());
        }

        ShellCommand::new(&self.command).stdin(text).capture_stdout().execute()?;
        Ok(())
    }
}
