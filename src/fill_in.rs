//! Interactive placeholder fill-in.
//!
//! ```text
//! Start ─ placeholders? ─ no ──────────────────────────────▶ content verbatim
//!                       └ yes ─ encode ─ edit ─ decode ─ empty? ─ yes ─▶ Aborted
//!                                                              └ no ──▶ substitute
//! ```
//!
//! The document is staged in a temporary file that is removed on every exit
//! path, including editor failure.

use crate::constants::TEMP_FILE_PREFIX;
use crate::core::{ProomptError, Result};
use crate::external::Editor;
use crate::filesystem::{Filesystem, StagedFile};
use crate::markdown::frontmatter;
use crate::prompt::{parse_placeholders, substitute_placeholders};

/// Runs the fill-in flow over `content` and returns the final text.
pub fn fill_in(content: &str, fs: &dyn Filesystem, editor: &dyn Editor) -> Result<String> {
    let placeholders = parse_placeholders(content);
    if placeholders.is_empty() {
        tracing::debug!("No placeholders; using content verbatim");
        return Ok(content.to_string());
    }
    tracing::debug!("Filling in {} placeholder(s)", placeholders.len());

    let document = frontmatter::encode(&placeholders, content)?;
    let staged = StagedFile::create(fs, TEMP_FILE_PREFIX, &document)
        .map_err(|e| ProomptError::file_system("create temporary file", std::env::temp_dir(), e))?;

    editor.edit(staged.path())?;

    let edited = fs
        .read_to_string(staged.path())
        .map_err(|e| ProomptError::file_system("read edited file", staged.path(), e))?;

    if edited.trim().is_empty() {
        return Err(ProomptError::Aborted);
    }

    let decoded = frontmatter::decode(&edited)?;
    Ok(substitute_placeholders(&decoded.template, &decoded.values))
}
