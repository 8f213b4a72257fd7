//! Remove a prompt.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::io::Write;

use super::common::CommandContext;

#[derive(Args)]
pub struct RmCommand {
    /// Prompt name; omit to choose with the picker
    name: Option<String>,
}

impl RmCommand {
    /// Deletes the highest-precedence file for the prompt. Shadowed copies in
    /// lower locations become visible afterwards.
    pub fn execute(self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        let target = ctx.select_prompt(self.name.as_deref())?;
        let removed = ctx.manager.delete(&target.name)?;

        writeln!(out, "{} Removed prompt: {} ({})", "✓".green(), removed.name, removed.source)?;
        Ok(())
    }
}
