//! Line segmentation and section boundary detection.
//!
//! All extractors work over the same representation: trimmed, non-empty lines
//! in source order. Heuristics are position-sensitive (section keywords,
//! look-ahead windows), so the ordinal of each line is carried along.

use std::ops::Range;

/// Lines containing a stop keyword only end a section when shorter than this.
/// A longer line is assumed to be prose that merely mentions the keyword.
const STOP_HEADER_MAX_LEN: usize = 30;

/// A trimmed, non-empty line of text with its position in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub ordinal: usize,
    pub text: String,
}

/// Splits raw text into trimmed, non-empty lines.
pub fn segment_lines(text: &str) -> Vec<TextLine> {
    text.lines()
        .enumerate()
        .filter_map(|(ordinal, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(TextLine {
                    ordinal,
                    text: trimmed.to_string(),
                })
            }
        })
        .collect()
}

/// Locates a section as a half-open index range into `lines`.
///
/// The section starts at the line immediately after the first line that
/// contains one of `start_keywords` (case-insensitively) and is shorter than
/// `max_header_len`; the length cap distinguishes headers from prose that
/// happens to mention the keyword. It ends at the first subsequent short line
/// containing one of `stop_keywords`, or at end of document.
///
/// Returns `None` when no start line is found; callers treat that as
/// "no data", never as an error.
pub fn find_section_bounds(
    lines: &[TextLine],
    start_keywords: &[&str],
    stop_keywords: &[&str],
    max_header_len: usize,
) -> Option<Range<usize>> {
    let mut start = None;

    for (i, line) in lines.iter().enumerate() {
        let lower = line.text.to_lowercase();

        if start.is_none() {
            if line.text.len() < max_header_len && start_keywords.iter().any(|k| lower.contains(k))
            {
                start = Some(i + 1);
            }
            continue;
        }

        if line.text.len() < STOP_HEADER_MAX_LEN && stop_keywords.iter().any(|k| lower.contains(k))
        {
            return start.map(|s| s..i);
        }
    }

    start.map(|s| s..lines.len())
}
