//! Shell command builder for user-configured programs.
//!
//! Editor, picker and clipboard commands come from configuration as free-form
//! command lines (`code --wait`, `fzf --height 40%`, `xclip -sel clip`), so
//! they are run through the platform shell. Extra arguments are passed as
//! positional parameters rather than spliced into the command line.
//!
//! # Examples
//!
//! ```rust,no_run
//! use proompt::external::command::ShellCommand;
//!
//! # fn example() -> proompt::core::Result<()> {
//! let output = ShellCommand::new("fzf --height 40%")
//!     .stdin("alpha\nbeta\n")
//!     .capture_stdout()
//!     .execute()?;
//! println!("picked {}", output.stdout.trim_end());
//! # Ok(())
//! # }
//! ```

use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::core::{ProomptError, Result};

/// Exit code POSIX shells use for "command not found".
const SHELL_NOT_FOUND: i32 = 127;

/// Output of a successful [`ShellCommand`].
#[derive(Debug, Clone, Default)]
pub struct ShellOutput {
    /// Captured stdout; empty unless [`ShellCommand::capture_stdout`] was set
    pub stdout: String,
}

/// Builder for running a configured command line through the shell.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    command_line: String,
    args: Vec<OsString>,
    stdin: Option<String>,
    capture_stdout: bool,
}

impl ShellCommand {
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            args: Vec::new(),
            stdin: None,
            capture_stdout: false,
        }
    }

    /// Append a positional argument (e.g. the file to edit).
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Feed `input` to the command's stdin instead of inheriting it.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Capture stdout instead of inheriting it.
    pub const fn capture_stdout(mut self) -> Self {
        self.capture_stdout = true;
        self
    }

    /// The configured command line.
    #[must_use]
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    #[cfg(not(windows))]
    fn build(&self) -> Command {
        let mut cmd = Command::new("sh");
        if self.args.is_empty() {
            cmd.arg("-c").arg(&self.command_line);
        } else {
            // "$0" is the script name; the real arguments follow as "$@"
            cmd.arg("-c").arg(format!("{} \"$@\"", self.command_line)).arg("proompt");
            cmd.args(&self.args);
        }
        cmd
    }

    #[cfg(windows)]
    fn build(&self) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(&self.command_line);
        cmd.args(&self.args);
        cmd
    }

    /// Run the command to completion.
    ///
    /// Fails with [`ProomptError::CommandFailed`] when the command cannot be
    /// spawned or exits unsuccessfully.
    pub fn execute(self) -> Result<ShellOutput> {
        let mut cmd = self.build();
        tracing::debug!("Executing command: {} {:?}", self.command_line, self.args);

        cmd.stdin(if self.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });
        cmd.stdout(if self.capture_stdout {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });
        cmd.stderr(Stdio::inherit());

        let mut child = cmd
            .spawn()
            .map_err(|e| ProomptError::command_failed(&self.command_line, self.spawn_reason(&e)))?;

        if let Some(input) = &self.stdin {
            if let Some(mut pipe) = child.stdin.take() {
                // A reader that exits early closes the pipe; its exit status decides the outcome
                if let Err(e) = pipe.write_all(input.as_bytes()) {
                    tracing::debug!("Failed writing stdin of '{}': {}", self.command_line, e);
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| ProomptError::command_failed(&self.command_line, e.to_string()))?;

        if !output.status.success() {
            let reason = match output.status.code() {
                Some(SHELL_NOT_FOUND) => self.not_found_reason(),
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            };
            tracing::debug!("Command '{}' failed: {}", self.command_line, reason);
            return Err(ProomptError::command_failed(&self.command_line, reason));
        }

        tracing::trace!("Command '{}' completed successfully", self.command_line);
        Ok(ShellOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    /// First word of the command line, ignoring leading `VAR=value` assignments.
    fn program(&self) -> Option<&str> {
        self.command_line.split_whitespace().find(|word| !word.contains('='))
    }

    fn not_found_reason(&self) -> String {
        match self.program() {
            Some(program) if which::which(program).is_err() => {
                format!("'{program}' was not found in PATH")
            }
            _ => format!("exited with status {SHELL_NOT_FOUND}"),
        }
    }

    fn spawn_reason(&self, error: &std::io::Error) -> String {
        match self.program() {
            Some(program) if which::which(program).is_err() => {
                format!("'{program}' was not found in PATH")
            }
            _ => error.to_string(),
        }
    }
}
