//! Placeholder parsing and substitution.
//!
//! A placeholder is `${NAME}` or `${NAME:-DEFAULT}`. `NAME` may not contain
//! `}` or `:`, `DEFAULT` may not contain `}`; nested placeholders inside a
//! default are therefore not supported. `$$` is a literal dollar sign and
//! never starts a placeholder; inside a default it collapses to `$` too.
//!
//! Both functions are total: text that does not match the grammar is left
//! alone.
//!
//! # Examples
//!
//! ```rust
//! use proompt::prompt::{parse_placeholders, substitute_placeholders};
//! use std::collections::HashMap;
//!
//! let placeholders = parse_placeholders("Hello ${NAME:-World}!");
//! assert_eq!(placeholders[0].name, "NAME");
//! assert_eq!(placeholders[0].default_value, "World");
//!
//! let mut values = HashMap::new();
//! values.insert("NAME".to_string(), "Bob".to_string());
//! assert_eq!(substitute_placeholders("Hello ${NAME:-World}!", &values), "Hello Bob!");
//! assert_eq!(substitute_placeholders("Price: $$100", &HashMap::new()), "Price: $100");
//! ```

use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// `$$` or a placeholder, matched in a single left-to-right scan so an
/// escaped dollar can never start a placeholder and a default may itself
/// contain `$$`.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$|\$\{([^}:]+)(:-([^}]*))?\}").expect("placeholder pattern is valid")
});

const ESCAPED_DOLLAR: &str = "$$";

/// A named substitution point extracted from prompt content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    /// Default text with `$$` already collapsed, empty when none was given
    pub default_value: String,
    /// `true` iff the `:-` form was used (even with an empty default)
    pub has_default: bool,
}

/// Extracts placeholders in order of first appearance.
///
/// A repeated name keeps its first occurrence, including that occurrence's
/// default; later occurrences are dropped even if their default differs.
#[must_use]
pub fn parse_placeholders(content: &str) -> Vec<Placeholder> {
    let mut seen = HashSet::new();
    let mut placeholders = Vec::new();

    for caps in TOKEN_RE.captures_iter(content) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if !seen.insert(name.to_string()) {
            continue;
        }
        placeholders.push(Placeholder {
            name: name.to_string(),
            default_value: default_of(&caps),
            has_default: caps.get(2).is_some(),
        });
    }

    placeholders
}

/// Replaces every placeholder occurrence and collapses `$$` to `$`.
///
/// A key present in `values` wins even when its value is empty; otherwise
/// the occurrence's own default (or the empty string) is used. Inserted
/// values are never rescanned.
#[must_use]
pub fn substitute_placeholders(content: &str, values: &HashMap<String, String>) -> String {
    TOKEN_RE
        .replace_all(content, |caps: &Captures<'_>| match caps.get(1) {
            None => "$".to_string(),
            Some(name) => match values.get(name.as_str()) {
                Some(value) => value.clone(),
                None => default_of(caps),
            },
        })
        .into_owned()
}

fn default_of(caps: &Captures<'_>) -> String {
    caps.get(3).map_or_else(String::new, |m| m.as_str().replace(ESCAPED_DOLLAR, "$"))
}
