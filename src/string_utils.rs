//! String manipulation helpers for common text transformations.
//!
//! Any run of characters outside `[A-Za-z0-9]` counts as a word separator.
//! Lengths are measured in characters, not bytes.

use regex::Regex;
use std::sync::OnceLock;

fn consecutive_caps() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap())
}

fn camel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap())
}

fn non_alnum() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap())
}

/// Convert to `snake_case`.
///
/// ```
/// use mailform::string_utils::to_snake_case;
///
/// assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
/// assert_eq!(to_snake_case("__already__snake__"), "already_snake");
/// ```
pub fn to_snake_case(text: &str) -> String {
    delimit(text, '_')
}

/// Convert to `kebab-case`.
pub fn to_kebab_case(text: &str) -> String {
    delimit(text, '-')
}

/// Convert to `camelCase`.
pub fn to_camel_case(text: &str) -> String {
    let mut words = split_words(text);
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut result = first.to_lowercase();
    for word in words {
        result.push_str(&capitalize(word));
    }
    result
}

/// Convert to `PascalCase`.
pub fn to_pascal_case(text: &str) -> String {
    split_words(text).map(capitalize).collect()
}

/// Truncate `text` to at most `max_length` characters, ending in `suffix`
/// when shortened.
///
/// Returns an empty string when `max_length` cannot hold at least one
/// character of text plus the suffix.
pub fn truncate_text(text: &str, max_length: usize, suffix: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let suffix_length = suffix.chars().count();
    if max_length < suffix_length + 1 {
        return String::new();
    }

    text.chars()
        .take(max_length - suffix_length)
        .chain(suffix.chars())
        .collect()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True when `text` has both uppercase and lowercase letters.
pub fn is_mixed_case(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && text.chars().any(char::is_lowercase)
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn remove_extra_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn delimit(text: &str, separator: char) -> String {
    if text.is_empty() {
        return String::new();
    }

    let boundary = format!("${{1}}{}${{2}}", separator);
    let sep = separator.to_string();

    let text = non_alnum().replace_all(text, sep.as_str());
    let text = consecutive_caps().replace_all(&text, boundary.as_str());
    let text = camel_boundary().replace_all(&text, boundary.as_str());
    let text = text.to_lowercase();

    text.split(separator)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep.as_str())
}

fn split_words(text: &str) -> impl Iterator<Item = &str> {
    non_alnum().split(text).filter(|word| !word.is_empty())
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
