//! YAML frontmatter encoding of placeholder values for interactive editing.
//!
//! The document staged in the editor looks like:
//!
//! ```text
//! ---
//! NAME: World
//! SCORE: '0'
//! ---
//! Hello ${NAME:-World}! Score ${SCORE:-0}.
//! ```
//!
//! The header is a YAML mapping from placeholder name to value, so multi-line
//! values and special characters survive the round trip (`serde_yaml` emits
//! block scalars and quotes where needed). Everything after the closing
//! delimiter is the template, returned byte-for-byte.

use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

use crate::constants::FRONTMATTER_DELIMITER;
use crate::core::{ProomptError, Result};
use crate::prompt::Placeholder;

/// Values and template recovered from an edited document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditedDocument {
    /// Placeholder name to the value the user left in the header
    pub values: HashMap<String, String>,
    /// Template text following the header
    pub template: String,
}

impl EditedDocument {
    /// `true` for the empty decode result used to signal an abort.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.template.is_empty()
    }
}

/// Builds the editable document: header with each placeholder's default,
/// then `original_content` verbatim.
pub fn encode(placeholders: &[Placeholder], original_content: &str) -> Result<String> {
    let mut document = String::new();
    document.push_str(FRONTMATTER_DELIMITER);
    document.push('\n');

    if !placeholders.is_empty() {
        // Mapping keeps insertion order, so the header follows the prompt
        let mut mapping = Mapping::new();
        for placeholder in placeholders {
            mapping.insert(
                Value::String(placeholder.name.clone()),
                Value::String(placeholder.default_value.clone()),
            );
        }
        let yaml = serde_yaml::to_string(&mapping)
            .map_err(|e| ProomptError::malformed(format!("failed to serialize header: {e}")))?;
        document.push_str(&yaml);
        if !yaml.ends_with('\n') {
            document.push('\n');
        }
    }

    document.push_str(FRONTMATTER_DELIMITER);
    document.push('\n');
    document.push_str(original_content);
    Ok(document)
}

/// Parses an edited document back into values and template.
///
/// - whitespace-only input decodes to an empty [`EditedDocument`]
/// - input whose first non-blank line is not `---` is all template, no values
/// - an opening `---` without a closing one is [`ProomptError::MalformedDocument`]
/// - invalid YAML, a non-mapping header or nested values are malformed too
/// - values keep the text the user typed; `KEY:` and `KEY: ~` decode to ""
pub fn decode(document: &str) -> Result<EditedDocument> {
    if document.trim().is_empty() {
        return Ok(EditedDocument::default());
    }

    // Editors sometimes insert blank lines above the opening delimiter
    let mut lines = LineSpans::new(document);
    let opened = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => {}
            Some((_, line)) => break is_delimiter(line),
            None => break false,
        }
    };
    if !opened {
        return Ok(EditedDocument {
            values: HashMap::new(),
            template: document.to_string(),
        });
    }

    let header_start = lines.offset;
    let (header_end, body_start) = loop {
        match lines.next() {
            Some((start, line)) if is_delimiter(line) => break (start, lines.offset),
            Some(_) => {}
            None => return Err(ProomptError::malformed("unclosed frontmatter delimiter")),
        }
    };

    let values = parse_header(&document[header_start..header_end])?;
    Ok(EditedDocument {
        values,
        template: document[body_start..].to_string(),
    })
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches('\r') == FRONTMATTER_DELIMITER
}

fn parse_header(header: &str) -> Result<HashMap<String, String>> {
    if header.trim().is_empty() {
        return Ok(HashMap::new());
    }

    // Plain scalars are taken as typed (`1.10`, `0x10`, `01234`); only an
    // explicit null such as `KEY:` or `KEY: ~` becomes empty.
    let parsed: Option<HashMap<String, Option<String>>> =
        serde_yaml::from_str(header).map_err(|e| {
            ProomptError::malformed(format!("frontmatter must be NAME: value lines: {e}"))
        })?;

    Ok(parsed
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or_default()))
        .collect())
}

/// Iterator over lines yielding each line's start offset, with `offset`
/// tracking where the next line begins.
struct LineSpans<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> LineSpans<'a> {
    const fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
        }
    }
}

impl<'a> Iterator for LineSpans<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let start = self.offset;
        let rest = &self.text[start..];
        let (line, consumed) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], pos + 1),
            None => (rest, rest.len()),
        };
        self.offset += consumed;
        Some((start, line))
    }
}
