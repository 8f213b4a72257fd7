//! Editor invocation.

use std::path::Path;

use super::Editor;
use super::command::ShellCommand;
use crate::core::Result;

/// Runs the configured editor command on a file with inherited stdio.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Editor for SystemEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        tracing::debug!("Opening {} with '{}'", path.display(), self.command);
        ShellCommand::new(&self.command).arg(path).execute()?;
        Ok(())
    }
}
