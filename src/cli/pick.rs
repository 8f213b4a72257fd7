//! Pick a prompt, fill in its placeholders and hand the result over.
//!
//! The final text goes to stdout without a trailing newline, so it can be
//! piped or captured verbatim, and to the clipboard unless `--no-copy` is
//! given. A clipboard failure only produces a warning.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::io::Write;

use super::common::CommandContext;
use crate::fill_in::fill_in;

#[derive(Args)]
pub struct PickCommand {
    /// Prompt name; omit to choose with the picker
    name: Option<String>,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    no_copy: bool,
}

impl PickCommand {
    pub fn execute(self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        let prompt = ctx.select_prompt(self.name.as_deref())?;
        let text = fill_in(&prompt.content, ctx.fs, ctx.editor)?;

        write!(out, "{text}")?;
        out.flush()?;

        if self.no_copy {
            return Ok(());
        }
        match ctx.clipboard.copy(&text) {
            Ok(()) => tracing::debug!("Copied '{}' to clipboard", prompt.name),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                eprintln!("{} failed to copy to clipboard: {e}", "Warning:".yellow());
            }
        }
        Ok(())
    }
}
