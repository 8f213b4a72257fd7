//! Prompt selection through an external fuzzy finder.
//!
//! Items are written one per line as `name<TAB>(source)<TAB>path`; the
//! picker is expected to echo the chosen line back on stdout, which is how
//! `fzf`, `sk`, `peco` and `head -n1` behave.

use super::Picker;
use super::command::ShellCommand;
use crate::core::{ProomptError, Result};
use crate::prompt::SelectionItem;

/// Formats an item as a single picker line.
#[must_use]
pub fn format_item(item: &SelectionItem) -> String {
    format!("{}\t({})\t{}", item.name, item.source, item.path.display())
}

/// Runs the configured picker command over the item list.
#[derive(Debug, Clone)]
pub struct CommandPicker {
    command: String,
}

impl CommandPicker {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Picker for CommandPicker {
    fn pick(&self, items: &[SelectionItem]) -> Result<SelectionItem> {
        if items.is_empty() {
            return Err(ProomptError::NoPrompts);
        }

        let lines: Vec<String> = items.iter().map(format_item).collect();
        let mut input = lines.join("\n");
        input.push('\n');

        let output = ShellCommand::new(&self.command).stdin(input).capture_stdout().execute()?;

        let selected = output.stdout.lines().next().unwrap_or("").trim_end_matches('\r');
        if selected.is_empty() {
            return Err(ProomptError::command_failed(&self.command, "no selection made"));
        }

        lines
            .iter()
            .position(|line| line == selected)
            .map(|index| items[index].clone())
            .ok_or_else(|| {
                ProomptError::command_failed(
                    &self.command,
                    format!("selection '{selected}' does not match any prompt"),
                )
            })
    }
}
