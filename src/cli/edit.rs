//! Edit an existing prompt or create a new one.
//!
//! ```bash
//! proompt edit review              # edit the visible "review" prompt
//! proompt edit review --project    # create <root>/prompts/review.md, then edit
//! proompt edit                     # pick a prompt to edit
//! ```
//!
//! A location flag is only accepted for a prompt that does not exist yet;
//! editing always targets the highest-precedence copy otherwise.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use std::io::Write;

use super::common::CommandContext;
use crate::core::ProomptError;
use crate::prompt::LocationKind;

/// Where to create a prompt that does not exist yet.
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct LocationFlags {
    /// Create in ./prompts
    #[arg(long)]
    directory: bool,

    /// Create in <project root>/prompts
    #[arg(long)]
    project: bool,

    /// Create in <project root>/.git/info/prompts
    #[arg(long)]
    project_local: bool,

    /// Create in the user config directory
    #[arg(long)]
    user: bool,
}

impl LocationFlags {
    const fn selected(&self) -> Option<LocationKind> {
        if self.directory {
            Some(LocationKind::Directory)
        } else if self.project {
            Some(LocationKind::Project)
        } else if self.project_local {
            Some(LocationKind::ProjectLocal)
        } else if self.user {
            Some(LocationKind::User)
        } else {
            None
        }
    }
}

#[derive(Args)]
pub struct EditCommand {
    /// Prompt name; omit to choose with the picker
    name: Option<String>,

    #[command(flatten)]
    location: LocationFlags,
}

impl EditCommand {
    pub fn execute(self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        let location = self.location.selected();

        let prompt = match self.name.as_deref() {
            Some(name) => match ctx.manager.get(name) {
                Ok(existing) => {
                    if location.is_some() {
                        bail!(
                            "Prompt '{}' already exists at {}. Cannot specify a location flag for an existing prompt",
                            name,
                            existing.source
                        );
                    }
                    existing
                }
                Err(ProomptError::PromptNotFound {
                    ..
                }) => {
                    let Some(kind) = location else {
                        bail!(
                            "Prompt '{name}' not found. Use a location flag (--directory, --project, --project-local, --user) to create it"
                        );
                    };
                    let path = ctx
                        .manager
                        .create(name, "", kind)
                        .with_context(|| format!("Failed to create prompt '{name}'"))?;
                    tracing::debug!("Created empty prompt at {}", path.display());
                    ctx.manager
                        .get(name)
                        .with_context(|| format!("Failed to load newly created prompt '{name}'"))?
                }
                Err(e) => return Err(e.into()),
            },
            None => {
                if location.is_some() {
                    bail!("Cannot use location flags without providing a prompt name");
                }
                ctx.select_prompt(None)?
            }
        };

        ctx.editor.edit(&prompt.path).context("Editor failed")?;

        writeln!(out, "{} Edited prompt: {} ({})", "✓".green(), prompt.name, prompt.source)?;
        Ok(())
    }
}
