//! Markdown documents exchanged with the user's editor.
//!
//! Prompts are plain markdown (or text) files; the only structured markdown
//! proompt produces is the interactive fill-in document, a YAML frontmatter
//! header of placeholder values followed by the template. See
//! [`frontmatter`] for the encoding.

pub mod frontmatter;

pub use frontmatter::{EditedDocument, decode, encode};
