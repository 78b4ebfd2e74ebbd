//! Heuristic resume-text parsing.
//!
//! Recovers structured fields from the unstructured plain text of an uploaded
//! document. Every extractor is best-effort and never fails: a heuristic that
//! finds nothing yields an absent or empty field.

pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod lines;
pub mod projects;
pub mod skills;
pub mod summary;
pub mod vocab;

use crate::models::resume::ParsedResume;

/// Runs all field extractors over the raw text and assembles the result.
/// Pure function of its input; running it twice yields the same resume.
pub fn parse_resume_text(text: &str) -> ParsedResume {
    let lines = lines::segment_lines(text);

    ParsedResume {
        name: contact::extract_name(&lines),
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        summary: summary::extract_summary(&lines),
        skills: skills::extract_skills(text, vocab::SKILL_VOCABULARY),
        experience: experience::extract_experience(&lines),
        education: education::extract_education(&lines),
        projects: projects::extract_projects(&lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_fixture() {
        let text = "Jane Doe\njane@x.com\nEXPERIENCE\nSenior Engineer\nAcme Corp\n2020-2023\n• Built systems";
        let parsed = parse_resume_text(text);

        assert_eq!(parsed.name.as_deref(), Some("Jane Doe"));
        assert_eq!(parsed.email.as_deref(), Some("jane@x.com"));
        assert_eq!(parsed.experience.len(), 1);
        let exp = &parsed.experience[0];
        assert_eq!(exp.position, "Senior Engineer");
        assert_eq!(exp.company, "Acme Corp");
        assert_eq!(exp.duration, "2020-2023");
        assert_eq!(exp.description, "• Built systems");
    }

    #[test]
    fn test_empty_text_every_field_absent() {
        for text in ["", "   \n \t \n  "] {
            let parsed = parse_resume_text(text);
            assert!(parsed.name.is_none());
            assert!(parsed.email.is_none());
            assert!(parsed.phone.is_none());
            assert!(parsed.summary.is_none());
            assert!(parsed.skills.is_empty());
            assert!(parsed.experience.is_empty());
            assert!(parsed.education.is_empty());
            assert!(parsed.projects.is_empty());
        }
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let text = "Jane Doe\njane@x.com\nSUMMARY\nBuilds reliable backend systems in Rust.\nEXPERIENCE\nSenior Engineer\nAcme Corp\n2020-2023\n• Built systems";
        let first = parse_resume_text(text);
        let second = parse_resume_text(text);
        assert_eq!(first, second);
    }
}
