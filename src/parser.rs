//! Declaration parser: raw CSS text in, ordered `property: value` pairs out
//!
//! Parsing is best effort. Only the first rule's body is read, comments are
//! dropped, and fragments without a `:` are skipped without complaint.

use crate::types::Declaration;
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/").unwrap());

/// Remove every `/* ... */` block (multiline, non-greedy) and trim the result.
pub fn strip_comments(text: &str) -> String {
    COMMENT_REGEX.replace_all(text, "").trim().to_string()
}

/// Pick the declaration body: between the first `{` and the last `}` when a
/// brace is present, otherwise the whole text.
fn declaration_body(cleaned: &str) -> &str {
    let Some(open) = cleaned.find('{') else {
        return cleaned;
    };
    let start = open + 1;
    match cleaned.rfind('}') {
        Some(close) if close >= start => &cleaned[start..close],
        // "} a {" style input: the closing brace sits before the opening one
        Some(_) => "",
        // unterminated block: take everything after the brace
        None => &cleaned[start..],
    }
}

/// Split one `property: value` fragment on its first colon.
fn parse_fragment(fragment: &str) -> Option<Declaration> {
    let (property, value) = fragment.split_once(':')?;
    Some(Declaration {
        property: property.trim().to_lowercase(),
        value: value.trim().to_string(),
    })
}

/// Parse CSS text into declarations, preserving source order.
pub fn parse(text: &str) -> Vec<Declaration> {
    let cleaned = strip_comments(text);
    let body = declaration_body(&cleaned);

    let mut declarations = Vec::new();
    let mut dropped = 0usize;

    for fragment in body.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        match parse_fragment(fragment) {
            Some(declaration) => declarations.push(declaration),
            None => {
                dropped += 1;
                log::trace!("Dropping fragment without ':' -> '{}'", fragment);
            }
        }
    }

    log::debug!(
        "Parsed {} declarations ({} fragments dropped)",
        declarations.len(),
        dropped
    );

    declarations
}
