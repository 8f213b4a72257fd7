//! Command-line interface for proompt.
//!
//! # Commands
//!
//! - `list` - Show every visible prompt and where it comes from
//! - `show` - Print one prompt with its metadata
//! - `edit` - Open a prompt in the editor, creating it if asked to
//! - `rm` - Delete a prompt
//! - `pick` - Select a prompt, fill in its placeholders, print and copy it
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Errors only
//! - `--config` / `-c` - Config file to use instead of the default
//!
//! Commands that take an optional prompt name fall back to the interactive
//! picker when it is omitted.
//!
//! # Logging
//!
//! Logs go to stderr. `RUST_LOG` overrides the level chosen by the flags:
//!
//! ```bash
//! RUST_LOG=proompt=trace proompt list
//! ```

pub mod common;
mod edit;
mod list;
mod pick;
mod rm;
mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::external::{CommandClipboard, CommandPicker, SystemEditor};
use crate::filesystem::RealFilesystem;
use crate::prompt::{DefaultLocationResolver, PromptManager};
use common::CommandContext;

/// Main CLI structure for proompt.
#[derive(Parser)]
#[command(
    name = "proompt",
    about = "Manage reusable prompt files and fill in their placeholders",
    version,
    long_about = "proompt finds prompts in ./prompts, the project root, .git/info/prompts and \
                  the user config directory, lets you edit and delete them, and fills in \
                  ${NAME:-default} placeholders through your editor."
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a TOML config file
    ///
    /// Overrides `PROOMPT_CONFIG` and the default
    /// `<config dir>/proompt/config.toml`.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all visible prompts
    List(list::ListCommand),

    /// Show a prompt's metadata and content
    Show(show::ShowCommand),

    /// Edit a prompt, or create one in a chosen location
    Edit(edit::EditCommand),

    /// Remove a prompt
    Rm(rm::RmCommand),

    /// Pick a prompt, fill in placeholders, print and copy the result
    Pick(pick::PickCommand),
}

impl Cli {
    /// Installs logging, loads configuration and runs the subcommand.
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_filter());

        let config = Config::load(self.config.as_deref())?;
        tracing::debug!(
            "Using editor '{}', picker '{}', copy command '{}'",
            config.editor,
            config.picker,
            config.copy_command
        );

        let fs = RealFilesystem::new();
        let resolver = DefaultLocationResolver::new(&fs);
        let editor = SystemEditor::new(&config.editor);
        let picker = CommandPicker::new(&config.picker);
        let clipboard = CommandClipboard::new(&config.copy_command);

        let ctx = CommandContext {
            manager: PromptManager::new(&fs, &resolver),
            fs: &fs,
            editor: &editor,
            picker: &picker,
            clipboard: &clipboard,
        };

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.command.execute(&ctx, &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Level directive derived from `--verbose` / `--quiet`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    fn log_filter(&self) -> EnvFilter {
        match std::env::var("RUST_LOG") {
            Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
            _ => EnvFilter::new(self.log_level()),
        }
    }
}

impl Commands {
    fn execute(self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.execute(ctx, out),
            Self::Show(cmd) => cmd.execute(ctx, out),
            Self::Edit(cmd) => cmd.execute(ctx, out),
            Self::Rm(cmd) => cmd.execute(ctx, out),
            Self::Pick(cmd) => cmd.execute(ctx, out),
        }
    }
}

fn init_logging(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
