//! Employment history extraction.
//!
//! A single partially-filled record is carried through the section; each line
//! is classified into exactly one role by an ordered set of heuristics
//! (first match wins). Mis-classification is expected noise, not a bug.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ExperienceEntry;
use crate::parser::lines::{find_section_bounds, TextLine};
use crate::parser::vocab::{
    EXPERIENCE_HEADER_MAX_LEN, EXPERIENCE_START_KEYWORDS, EXPERIENCE_STOP_KEYWORDS, TITLE_KEYWORDS,
};

const MAX_EXPERIENCE_ENTRIES: usize = 10;

// Date patterns that signal an employment duration: a 4-digit year
// (optionally a range ending in a year/present/current) or "Month YYYY".
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2}|19\d{2})\b").expect("valid year regex"));
static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+\d{4}")
        .expect("valid month-year regex")
});

/// How a line is used, decided by ordered heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRole {
    /// Date-shaped: record boundary / duration.
    Duration,
    Position,
    Company,
    Description,
    Skip,
}

#[derive(Debug, Default)]
struct PartialExperience {
    company: Option<String>,
    position: Option<String>,
    duration: Option<String>,
    description: Option<String>,
}

impl PartialExperience {
    /// A record is only emitted with both company and position present.
    fn flush(&mut self, out: &mut Vec<ExperienceEntry>) {
        let current = std::mem::take(self);
        if let (Some(company), Some(position)) = (current.company, current.position) {
            out.push(ExperienceEntry {
                company,
                position,
                duration: current.duration.unwrap_or_default(),
                description: current.description.unwrap_or_default(),
            });
        }
    }
}

pub fn is_bulleted(line: &str) -> bool {
    line.starts_with('•') || line.starts_with('-') || line.starts_with('*')
}

fn starts_capitalized_word(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second)) if first.is_ascii_uppercase() && second.is_ascii_lowercase()
    )
}

fn classify(line: &str, current: &PartialExperience) -> LineRole {
    let lower = line.to_lowercase();

    if YEAR_RE.is_match(line) || MONTH_YEAR_RE.is_match(line) {
        return LineRole::Duration;
    }

    if line.len() < 100
        && current.position.is_none()
        && (TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) || starts_capitalized_word(line))
    {
        return LineRole::Position;
    }

    if line.len() < 80
        && line.len() > 2
        && current.company.is_none()
        && current.position.is_some()
        && !is_bulleted(line)
    {
        return LineRole::Company;
    }

    if current.position.is_some()
        && current.company.is_some()
        && (is_bulleted(line) || (current.description.is_none() && line.len() > 20))
    {
        return LineRole::Description;
    }

    LineRole::Skip
}

/// Extracts employment records from the experience section.
///
/// A date-shaped line starts a new record when the current one already carries
/// a duration; two consecutive date lines with no company/position in between
/// therefore discard the first. That loss of precision is accepted. The last
/// in-progress record is flushed at end of section.
pub fn extract_experience(lines: &[TextLine]) -> Vec<ExperienceEntry> {
    let Some(bounds) = find_section_bounds(
        lines,
        EXPERIENCE_START_KEYWORDS,
        EXPERIENCE_STOP_KEYWORDS,
        EXPERIENCE_HEADER_MAX_LEN,
    ) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut current = PartialExperience::default();

    for line in &lines[bounds] {
        let text = line.text.as_str();
        if text.len() < 2 {
            continue;
        }

        match classify(text, &current) {
            LineRole::Duration => {
                if current.duration.is_some() {
                    current.flush(&mut entries);
                }
                current.duration = Some(text.to_string());
            }
            LineRole::Position => current.position = Some(text.to_string()),
            LineRole::Company => current.company = Some(text.to_string()),
            LineRole::Description => match &mut current.description {
                Some(existing) => {
                    existing.push(' ');
                    existing.push_str(text);
                }
                None => current.description = Some(text.to_string()),
            },
            LineRole::Skip => {}
        }
    }

    current.flush(&mut entries);
    entries.truncate(MAX_EXPERIENCE_ENTRIES);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lines::segment_lines;

    fn parse(text: &str) -> Vec<ExperienceEntry> {
        extract_experience(&segment_lines(text))
    }

    #[test]
    fn test_two_date_delimited_blocks() {
        let entries = parse(
            "EXPERIENCE\n\
             Jan 2020 - Dec 2021\n\
             Senior Engineer\n\
             Acme Corp\n\
             • Built ingestion pipelines\n\
             Jan 2022 - Present\n\
             Staff Engineer\n\
             Beta Inc\n\
             • Led platform team",
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].duration, "Jan 2020 - Dec 2021");
        assert_eq!(entries[0].position, "Senior Engineer");
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].description, "• Built ingestion pipelines");
        assert_eq!(entries[1].duration, "Jan 2022 - Present");
        assert_eq!(entries[1].position, "Staff Engineer");
        assert_eq!(entries[1].company, "Beta Inc");
        assert_eq!(entries[1].description, "• Led platform team");
    }

    #[test]
    fn test_date_after_title_and_company_completes_record() {
        let entries = parse(
            "EXPERIENCE\nSenior Engineer\nAcme Corp\n2020-2023\n• Built systems",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, "Senior Engineer");
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].duration, "2020-2023");
        assert_eq!(entries[0].description, "• Built systems");
    }

    #[test]
    fn test_consecutive_date_lines_discard_first_record() {
        // Known precision limitation: a second date boundary before both
        // company and position are set discards the partial first record.
        let entries = parse(
            "EXPERIENCE\n2018-2019\n2020-2023\nSenior Engineer\nAcme Corp",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration, "2020-2023");
    }

    #[test]
    fn test_record_without_company_is_dropped() {
        let entries = parse("EXPERIENCE\n2020-2023\nSenior Engineer");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_bullets_accumulate_into_description() {
        let entries = parse(
            "EXPERIENCE\nSenior Engineer\nAcme Corp\n• First bullet\n• Second bullet",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "• First bullet • Second bullet");
    }

    #[test]
    fn test_capped_at_ten_entries() {
        let mut text = String::from("EXPERIENCE\n");
        for i in 0..12 {
            text.push_str(&format!(
                "Jan 2010 - Dec 201{}\nSenior Engineer\nCompany Number {i}\n",
                i % 10
            ));
        }
        let entries = parse(&text);
        assert_eq!(entries.len(), 10);
    }

    #[test]
    fn test_empty_text_yields_no_entries() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  ").is_empty());
    }

    #[test]
    fn test_no_experience_section_yields_no_entries() {
        assert!(parse("Jane Doe\njane@x.com\nEDUCATION\nMIT").is_empty());
    }
}
