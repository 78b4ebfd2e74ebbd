//! Summary/objective extraction.

use crate::parser::lines::TextLine;
use crate::parser::vocab::{SUMMARY_KEYWORDS, SUMMARY_STOP_KEYWORDS};

const SUMMARY_HEADER_MAX_LEN: usize = 50;
const SUMMARY_WINDOW_LINES: usize = 8;
const SUMMARY_MAX_CHARS: usize = 600;
const SUMMARY_MIN_CHARS: usize = 20;

/// Finds a summary-like heading and accumulates up to the next 8 lines,
/// stopping early when the experience/education sections begin and skipping
/// any line that mentions another section. The result is truncated to 600
/// characters; anything at or under 20 characters is discarded as too thin
/// to be meaningful.
pub fn extract_summary(lines: &[TextLine]) -> Option<String> {
    let start = lines.iter().position(|line| {
        let lower = line.text.to_lowercase();
        line.text.len() < SUMMARY_HEADER_MAX_LEN
            && SUMMARY_KEYWORDS.iter().any(|k| lower.contains(k))
    })? + 1;

    let mut collected: Vec<&str> = Vec::new();
    let end = (start + SUMMARY_WINDOW_LINES).min(lines.len());

    for line in &lines[start..end] {
        let lower = line.text.to_lowercase();
        if !SUMMARY_STOP_KEYWORDS.iter().any(|k| lower.contains(k)) {
            collected.push(&line.text);
        } else if lower.contains("experience") || lower.contains("education") {
            break;
        }
    }

    let summary: String = collected.join(" ").chars().take(SUMMARY_MAX_CHARS).collect();
    if summary.len() > SUMMARY_MIN_CHARS {
        Some(summary)
    } else {
        None
    }
}
