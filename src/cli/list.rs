//! List visible prompts.
//!
//! ```bash
//! proompt list
//! proompt list --format json
//! ```

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::Write;

use super::common::CommandContext;
use crate::prompt::SelectionItem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Table,
    /// JSON array of `{name, source, path}`
    Json,
    /// YAML sequence of `{name, source, path}`
    Yaml,
}

#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ListCommand {
    pub fn execute(self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> Result<()> {
        let items = ctx.manager.list_for_selection()?;
        tracing::debug!("Listing {} prompt(s)", items.len());

        match self.format {
            OutputFormat::Table => write_table(&items, out)?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&items)
                    .context("Failed to serialize prompts as JSON")?;
                writeln!(out, "{json}")?;
            }
            OutputFormat::Yaml => {
                let yaml =
                    serde_yaml::to_string(&items).context("Failed to serialize prompts as YAML")?;
                write!(out, "{yaml}")?;
            }
        }
        Ok(())
    }
}

fn write_table(items: &[SelectionItem], out: &mut dyn Write) -> Result<()> {
    if items.is_empty() {
        writeln!(out, "No prompts found")?;
        return Ok(());
    }

    writeln!(out, "Found {} prompt(s):", items.len())?;
    writeln!(out)?;
    for item in items {
        writeln!(
            out,
            "{:<20} {:<15} {}",
            item.name,
            format!("({})", item.source),
            item.path.display()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::test_support::*;
    use crate::test_utils::{FakeClipboard, FakeEditor, FakePicker};

    fn run(format: OutputFormat, setup: impl Fn(&crate::test_utils::MemoryFilesystem)) -> String {
        let (fs, resolver) = fixture();
        setup(&fs);
        let (editor, picker, clipboard) = (FakeEditor::new(&fs), FakePicker::new(), FakeClipboard::new());
        let ctx = context(&fs, &resolver, &editor, &picker, &clipboard);

        let mut out = Vec::new();
        ListCommand {
            format,
        }
        .execute(&ctx, &mut out)
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_empty() {
        assert_eq!(run(OutputFormat::Table, |_| {}), "No prompts found\n");
    }

    #[test]
    fn test_list_table_in_precedence_order() {
        let output = run(OutputFormat::Table, |fs| {
            fs.add_file(format!("{USER}/zeta.md"), "z");
            fs.add_file(format!("{PROJECT}/alpha.md"), "a");
            fs.add_file(format!("{USER}/alpha.md"), "shadowed");
        });

        assert!(output.starts_with("Found 2 prompt(s):\n\n"));
        let lines: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("alpha"));
        assert!(lines[0].contains("(project)"));
        assert!(lines[0].ends_with("/repo/prompts/alpha.md"));
        assert!(lines[1].contains("(user)"));
    }

    #[test]
    fn test_list_json() {
        let output = run(OutputFormat::Json, |fs| {
            fs.add_file(format!("{PROJECT_LOCAL}/secret.txt"), "s");
        });

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "secret");
        assert_eq!(value[0]["source"], "project-local");
        assert_eq!(value[0]["path"], "/repo/.git/info/prompts/secret.txt");
    }

    #[test]
    fn test_list_yaml() {
        let output = run(OutputFormat::Yaml, |fs| {
            fs.add_file(format!("{DIRECTORY}/here.md"), "h");
        });
        assert!(output.contains("name: here"));
        assert!(output.contains("source: directory"));
    }
}
