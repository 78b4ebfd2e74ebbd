//! Project extraction.

use crate::models::resume::ProjectEntry;
use crate::parser::experience::is_bulleted;
use crate::parser::lines::{find_section_bounds, TextLine};
use crate::parser::vocab::{
    PROJECTS_HEADER_MAX_LEN, PROJECTS_START_KEYWORDS, PROJECTS_STOP_KEYWORDS, TECH_STACK_MARKERS,
};

/// Scan stops after this many records have been flushed; the trailing
/// in-progress record is still emitted (no post-hoc truncation).
const MAX_PROJECTS_DURING_SCAN: usize = 8;

const TITLE_MIN_LEN: usize = 5;
const TITLE_MAX_LEN: usize = 100;
const DESCRIPTION_MIN_LEN: usize = 10;

#[derive(Debug, Default)]
struct PartialProject {
    title: Option<String>,
    description: Option<String>,
    technologies: Option<String>,
}

impl PartialProject {
    /// Retained whenever a title was recovered.
    fn flush(&mut self, out: &mut Vec<ProjectEntry>) {
        let current = std::mem::take(self);
        if let Some(title) = current.title {
            out.push(ProjectEntry {
                title,
                description: current.description.unwrap_or_default(),
                technologies: current.technologies.unwrap_or_default(),
            });
        }
    }
}

fn looks_like_title(line: &str) -> bool {
    line.len() > TITLE_MIN_LEN && line.len() < TITLE_MAX_LEN && !is_bulleted(line)
}

fn mentions_tech_stack(lower: &str) -> bool {
    TECH_STACK_MARKERS.iter().any(|m| lower.contains(m))
}

/// Extracts project records. A non-bulleted line of moderate length starts a
/// record when no title is set, or starts the next one once the current record
/// has both title and description; the first following line of reasonable
/// length becomes the description, stack-indicator lines become
/// `technologies`, and further bullets extend the description.
pub fn extract_projects(lines: &[TextLine]) -> Vec<ProjectEntry> {
    let Some(bounds) = find_section_bounds(
        lines,
        PROJECTS_START_KEYWORDS,
        PROJECTS_STOP_KEYWORDS,
        PROJECTS_HEADER_MAX_LEN,
    ) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut current = PartialProject::default();

    for line in &lines[bounds] {
        let text = line.text.as_str();
        if text.len() < 3 {
            continue;
        }
        let lower = text.to_lowercase();

        if current.title.is_none() {
            if looks_like_title(text) {
                current.title = Some(text.to_string());
            }
        } else if current.description.is_none() {
            if text.len() > DESCRIPTION_MIN_LEN {
                current.description = Some(text.to_string());
            }
        } else if current.technologies.is_none() && mentions_tech_stack(&lower) {
            current.technologies = Some(text.to_string());
        } else if is_bulleted(text) && current.technologies.is_none() {
            if let Some(description) = &mut current.description {
                description.push(' ');
                description.push_str(text);
            }
        } else if looks_like_title(text) && !mentions_tech_stack(&lower) {
            // Title and description complete: this line starts the next record.
            current.flush(&mut entries);
            current.title = Some(text.to_string());
            if entries.len() >= MAX_PROJECTS_DURING_SCAN {
                break;
            }
        }
    }

    current.flush(&mut entries);
    entries
}
