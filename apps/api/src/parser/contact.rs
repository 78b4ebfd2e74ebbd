//! Email, phone, and name extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::lines::TextLine;
use crate::parser::vocab::NAME_BLOCKLIST;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

// Loose international/US phone pattern.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid phone regex")
});

// Narrower phone shape used only to disqualify name candidates.
static PHONE_SHAPED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid phone-shape regex"));

static NAME_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s.'-]+$").expect("valid name charset regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// First email-shaped substring in the text, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped substring, with internal whitespace collapsed.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find(text)
        .map(|m| WHITESPACE_RE.replace_all(m.as_str(), " ").trim().to_string())
}

/// Scans the first 8 lines for one that plausibly is the candidate's name:
/// no "@", no phone-shaped digits, no resume/CV boilerplate words, length
/// strictly between 2 and 60, and only letters/spaces/periods/apostrophes/
/// hyphens. Callers must not assume a name is always recovered.
pub fn extract_name(lines: &[TextLine]) -> Option<String> {
    for line in lines.iter().take(8) {
        let text = &line.text;
        let lower = text.to_lowercase();

        if !text.contains('@')
            && !PHONE_SHAPED_RE.is_match(text)
            && !NAME_BLOCKLIST.iter().any(|w| lower.contains(w))
            && text.len() > 2
            && text.len() < 60
            && NAME_CHARSET_RE.is_match(text)
        {
            return Some(text.clone());
        }
    }
    None
}
