//! Error handling for proompt
//!
//! This module provides the error taxonomy shared by the prompt store, the
//! placeholder engine and the interactive fill-in flow, together with a
//! user-facing wrapper that attaches details and suggestions for the CLI.
//!
//! # Error Categories
//!
//! - **Lookup**: [`ProomptError::PromptNotFound`], [`ProomptError::NoPrompts`]
//! - **Placement**: [`ProomptError::InvalidLocation`]
//! - **Interactive editing**: [`ProomptError::MalformedDocument`], [`ProomptError::Aborted`]
//! - **External programs**: [`ProomptError::CommandFailed`]
//! - **I/O**: [`ProomptError::FileSystem`], [`ProomptError::Io`]
//!
//! Library code returns [`Result`]; CLI commands wrap these in
//! [`anyhow::Error`] and the binary turns whatever reaches it into an
//! [`ErrorContext`] with [`user_friendly_error`].

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by the library.
pub type Result<T> = std::result::Result<T, ProomptError>;

/// The main error type for proompt operations.
#[derive(Error, Debug)]
pub enum ProomptError {
    /// No visible prompt carries the requested name.
    #[error("Prompt '{name}' not found")]
    PromptNotFound {
        /// Name that was looked up
        name: String,
    },

    /// A prompt was requested at a location kind that is not currently resolvable.
    #[error("Invalid location: {location}")]
    InvalidLocation {
        /// The requested location kind
        location: String,
    },

    /// The interactive fill-in document could not be decoded.
    #[error("Malformed document: {reason}")]
    MalformedDocument {
        /// What is wrong with the document
        reason: String,
    },

    /// The user saved an empty document to cancel.
    #[error("Operation aborted (empty file)")]
    Aborted,

    /// A selection was requested but no prompts exist.
    #[error("No prompts found")]
    NoPrompts,

    /// An external program (editor, picker, clipboard) failed.
    #[error("Command '{command}' failed: {reason}")]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Exit status or spawn failure description
        reason: String,
    },

    /// A filesystem operation on a known path failed.
    #[error("Failed to {operation} {}", .path.display())]
    FileSystem {
        /// Short description of the attempted operation
        operation: String,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error without path context.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProomptError {
    /// Build a [`ProomptError::FileSystem`] from an operation name and path.
    pub fn file_system(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Build a [`ProomptError::CommandFailed`].
    pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`ProomptError::MalformedDocument`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }
}

/// Error wrapper carrying optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The headline error message
    pub message: String,
    /// Optional suggestion for fixing the problem
    pub suggestion: Option<String>,
    /// Optional extra detail
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colored labels.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error reaching the binary into an [`ErrorContext`].
///
/// The outermost message (including any `anyhow` context) becomes the
/// headline; when a [`ProomptError`] sits anywhere in the chain a matching
/// suggestion is attached. Remaining causes are listed as details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let mut context = ErrorContext::new(error.to_string());

    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root which is already the headline
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        let mut details = String::from("Caused by:");
        for (i, cause) in chain.iter().enumerate() {
            details.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
        context = context.with_details(details);
    }

    let proompt_error = error.chain().find_map(|cause| cause.downcast_ref::<ProomptError>());
    match proompt_error.and_then(suggestion_for) {
        Some(suggestion) => context.with_suggestion(suggestion),
        None => context,
    }
}

fn suggestion_for(error: &ProomptError) -> Option<String> {
    match error {
        ProomptError::PromptNotFound { name } => Some(format!(
            "Run 'proompt list' to see available prompts, or create it with 'proompt edit {name} --user'"
        )),
        ProomptError::InvalidLocation { location } => Some(match location.as_str() {
            "directory" => "Create a 'prompts' directory in the current directory first".to_string(),
            "project" => "Create a 'prompts' directory at the project root (the nearest directory containing '.git' or 'prompts')".to_string(),
            "project-local" => "Create '.git/info/prompts' in the project root first".to_string(),
            _ => "Choose one of --directory, --project, --project-local or --user".to_string(),
        }),
        ProomptError::MalformedDocument { .. } => Some(
            "Keep the '---' delimiters intact and use 'NAME: value' lines between them".to_string(),
        ),
        ProomptError::NoPrompts => Some(
            "Create a prompt with 'proompt edit <name> --user' or add files to ./prompts".to_string(),
        ),
        ProomptError::CommandFailed { .. } => Some(
            "Check the EDITOR, PROOMPT_PICKER and PROOMPT_COPY_COMMAND settings".to_string(),
        ),
        ProomptError::Aborted | ProomptError::FileSystem { .. } | ProomptError::Io(_) => None,
    }
}
