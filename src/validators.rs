//! Email address format validation.
//!
//! Checks are purely syntactic: nothing here resolves domains, talks to mail
//! servers or decides whether an address is deliverable. Every function is
//! pure and safe to call on untrusted input. Error values never carry the
//! rejected input.
//!
//! Two failure channels exist on purpose:
//! - a candidate that is not text at all is a caller bug and yields
//!   [`ValidationError::NotText`] from [`validate`];
//! - text that is not a well-formed address is ordinary data and yields
//!   `Ok(false)`.
//!
//! The batch functions never fail. Non-text entries are simply reported as
//! invalid so one bad record cannot abort the rest.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Longest accepted address, local part + `@` + domain (RFC 5321).
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Shortest shape worth inspecting (`a@b`).
pub const MIN_EMAIL_LENGTH: usize = 3;
/// Longest accepted local part.
pub const MAX_LOCAL_LENGTH: usize = 64;
/// Longest accepted domain label.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Punctuation allowed in the local part besides ASCII letters and digits.
const LOCAL_PUNCTUATION: &[char] = &['.', '_', '%', '+', '-'];

/// Inputs below this size are validated on the calling thread.
const PARALLEL_THRESHOLD: usize = 256;

/// Verdict per distinct input, keyed by [`EmailCandidate::batch_key`].
///
/// The JSON string `"null"` and JSON `null` share the key `null` and collapse
/// into one entry; both are invalid, so the verdict is unaffected.
pub type BatchResult = HashMap<String, bool>;

/// Raised when a candidate handed to [`validate`] is not text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NotText,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotText => write!(f, "Email validation requires a string input"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A value offered for validation, which may or may not be text.
pub trait EmailCandidate {
    /// The candidate's text, or `None` when it is not text.
    fn as_text(&self) -> Option<&str>;

    /// Short name of the value's kind. Only ever written to debug logs.
    fn kind(&self) -> &'static str;

    /// Key under which the candidate is reported in a [`BatchResult`].
    ///
    /// Text is keyed by itself, untrimmed.
    fn batch_key(&self) -> String {
        match self.as_text() {
            Some(text) => text.to_string(),
            None => self.kind().to_string(),
        }
    }
}

impl EmailCandidate for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn kind(&self) -> &'static str {
        "string"
    }
}

impl EmailCandidate for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn kind(&self) -> &'static str {
        "string"
    }
}

impl<T: EmailCandidate + ?Sized> EmailCandidate for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn batch_key(&self) -> String {
        (**self).batch_key()
    }
}

impl<T: EmailCandidate> EmailCandidate for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|inner| inner.as_text())
    }

    fn kind(&self) -> &'static str {
        match self {
            Some(inner) => inner.kind(),
            None => "null",
        }
    }

    fn batch_key(&self) -> String {
        match self {
            Some(inner) => inner.batch_key(),
            None => "null".to_string(),
        }
    }
}

/// JSON values are text only when they are JSON strings. Anything else is
/// keyed by its compact JSON rendering (`null`, `123`, `[1,2]`, ...).
impl EmailCandidate for Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn batch_key(&self) -> String {
        match self {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// Validate a single candidate.
///
/// Returns `Err(ValidationError::NotText)` when the candidate is not text,
/// otherwise the verdict of [`validate_email_format`].
///
/// # Examples
///
/// ```
/// use mailform::validators::{validate, ValidationError};
///
/// assert_eq!(validate("user@example.com"), Ok(true));
/// assert_eq!(validate("user@domain"), Ok(false));
/// assert_eq!(validate(&None::<&str>), Err(ValidationError::NotText));
/// ```
pub fn validate<C: EmailCandidate + ?Sized>(candidate: &C) -> Result<bool, ValidationError> {
    match candidate.as_text() {
        Some(text) => Ok(validate_email_format(text)),
        None => {
            debug!(kind = candidate.kind(), "Rejected non-text email candidate");
            Err(ValidationError::NotText)
        }
    }
}

/// Check whether `email` is a syntactically valid address.
///
/// Leading and trailing whitespace is ignored. Rules:
/// - exactly one `@`
/// - local part: 1-64 of `A-Z a-z 0-9 . _ % + -`, no leading, trailing or
///   doubled dot
/// - domain: at least two dot-separated labels of 1-63 ASCII alphanumerics
///   or hyphens, no label starting or ending with a hyphen
/// - top-level label: alphabetic, at least 2 characters
/// - whole address at most 254 characters
///
/// Runs in linear time.
pub fn validate_email_format(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }

    let email = email.trim();

    let length = email.len();
    if !(MIN_EMAIL_LENGTH..=MAX_EMAIL_LENGTH).contains(&length) {
        debug!(length, "Email length outside valid range");
        return false;
    }

    let Some((local, domain)) = split_address(email) else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

/// Backward compatible alias for [`validate_email_format`].
#[deprecated(since = "0.2.0", note = "use `validate_email_format` instead")]
pub fn is_valid_email(email: &str) -> bool {
    validate_email_format(email)
}

/// Validate every candidate in `candidates`.
///
/// Non-text candidates map to `false`. A key seen twice is validated once.
///
/// ```
/// use mailform::validators::validate_batch;
///
/// let results = validate_batch(["a@b.com", "bad", ""]);
/// assert_eq!(results["a@b.com"], true);
/// assert_eq!(results["bad"], false);
/// assert_eq!(results[""], false);
/// ```
pub fn validate_batch<I>(candidates: I) -> BatchResult
where
    I: IntoIterator,
    I::Item: EmailCandidate,
{
    let mut results = BatchResult::new();

    for candidate in candidates {
        let key = candidate.batch_key();
        if results.contains_key(&key) {
            continue;
        }

        let verdict = validate(&candidate).unwrap_or_else(|_| {
            debug!(
                kind = candidate.kind(),
                "Non-text input in batch validation"
            );
            false
        });
        results.insert(key, verdict);
    }

    results
}

/// Validate plain strings. Same result as [`validate_batch`] for text input.
pub fn validate_email_batch<I, S>(emails: I) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    emails
        .into_iter()
        .map(|email| {
            let email = email.as_ref();
            (email.to_string(), validate_email_format(email))
        })
        .collect()
}

/// [`validate_batch`] split across up to `workers` threads.
///
/// Small inputs and `workers <= 1` run on the calling thread.
pub fn validate_batch_parallel<C>(candidates: &[C], workers: usize) -> BatchResult
where
    C: EmailCandidate + Sync,
{
    if workers <= 1 || candidates.len() < PARALLEL_THRESHOLD {
        return validate_batch(candidates);
    }

    let chunk_size = candidates.len().div_ceil(workers);
    debug!(
        total = candidates.len(),
        workers, chunk_size, "Validating batch in parallel"
    );

    std::thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || validate_batch(chunk)))
            .collect();

        let mut results = BatchResult::with_capacity(candidates.len());
        for handle in handles {
            match handle.join() {
                Ok(partial) => {
                    for (key, verdict) in partial {
                        results.entry(key).or_insert(verdict);
                    }
                }
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        results
    })
}

/// Split on the single `@`. Zero or several `@` is rejected.
fn split_address(email: &str) -> Option<(&str, &str)> {
    let at_count = email.bytes().filter(|b| *b == b'@').count();
    if at_count != 1 {
        debug!(at_count, "Invalid @ count");
        return None;
    }
    email.split_once('@')
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LENGTH {
        debug!(length = local.len(), "Local part length out of range");
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(&c))
}

fn is_valid_domain(domain: &str) -> bool {
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    domain.split('.').all(is_valid_label) && is_valid_tld(tld)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_tld(label: &str) -> bool {
    label.len() >= 2 && label.chars().all(|c| c.is_ascii_alphabetic())
}
