//! Education history extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::EducationEntry;
use crate::parser::lines::{find_section_bounds, TextLine};
use crate::parser::vocab::{
    DEGREE_KEYWORDS, EDUCATION_HEADER_MAX_LEN, EDUCATION_START_KEYWORDS, EDUCATION_STOP_KEYWORDS,
};

const MAX_EDUCATION_ENTRIES: usize = 5;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2}|19\d{2})\b").expect("valid year regex"));
static GPA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid gpa regex"));

#[derive(Debug, Default)]
struct PartialEducation {
    degree: Option<String>,
    institution: Option<String>,
    year: Option<String>,
    gpa: Option<String>,
}

impl PartialEducation {
    /// Retained when at least a degree or an institution was recovered.
    fn flush(&mut self, out: &mut Vec<EducationEntry>) {
        let current = std::mem::take(self);
        if current.degree.is_some() || current.institution.is_some() {
            out.push(EducationEntry {
                degree: current.degree.unwrap_or_default(),
                institution: current.institution.unwrap_or_default(),
                year: current.year.unwrap_or_default(),
                gpa: current.gpa.unwrap_or_default(),
            });
        }
    }
}

/// Extracts education records. A degree-keyword line signals a new record
/// (flushing the previous one when a degree was already captured); year lines
/// set `year` and may double as the institution; "gpa"/"grade" lines with a
/// decimal number set `gpa`; anything else fills the institution once.
pub fn extract_education(lines: &[TextLine]) -> Vec<EducationEntry> {
    let Some(bounds) = find_section_bounds(
        lines,
        EDUCATION_START_KEYWORDS,
        EDUCATION_STOP_KEYWORDS,
        EDUCATION_HEADER_MAX_LEN,
    ) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut current = PartialEducation::default();

    for line in &lines[bounds] {
        let text = line.text.as_str();
        if text.len() < 3 {
            continue;
        }
        let lower = text.to_lowercase();

        if DEGREE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            if current.degree.is_some() {
                current.flush(&mut entries);
            }
            current.degree = Some(text.to_string());
        } else if let Some(year) = YEAR_RE.find(text) {
            let without_year = YEAR_RE.replace(text, "").trim().to_string();
            current.year = Some(year.as_str().to_string());
            if without_year.len() > 3 && current.institution.is_none() {
                current.institution = Some(without_year);
            }
        } else if lower.contains("gpa") || lower.contains("grade") {
            if let Some(gpa) = GPA_RE.find(text) {
                current.gpa = Some(gpa.as_str().to_string());
            }
        } else if current.institution.is_none() && text.len() > 5 && text.len() < 100 {
            current.institution = Some(text.to_string());
        }
    }

    current.flush(&mut entries);
    entries.truncate(MAX_EDUCATION_ENTRIES);
    entries
}
