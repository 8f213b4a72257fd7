//! Show a single prompt.

use anyhow::Result;
use clap::Args;
use std::io::Write;

use super::common::CommandContext;

#[derive(Args)]
pub struct ShowCommand {
    /// Prompt name (file name without extension)
    name: String,

    /// Print only the prompt content
    #[arg(long)]
    raw: bool,
}

impl ShowCommand {
    pub fn execute(self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        let prompt = ctx.manager.get(&self.name)?;

        if self.raw {
            write!(out, "{}", prompt.content)?;
            return Ok(());
        }

        writeln!(out, "Name: {}", prompt.name)?;
        writeln!(out, "Source: {}", prompt.source)?;
        writeln!(out, "Path: {}", prompt.path.display())?;
        writeln!(out)?;
        writeln!(out, "Content:")?;
        writeln!(out, "{}", prompt.content)?;
        Ok(())
    }
}
