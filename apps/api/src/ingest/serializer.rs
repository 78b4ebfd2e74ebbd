//! Resume serialization for embedding and index metadata.
//!
//! `serialize_resume` is the canonical input to the embedding capability:
//! its field order and separators are fixed so that embeddings stay
//! comparable between the write path and the chat context template.

use std::collections::HashMap;

use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord};

fn opt(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn experience_line(exp: &ExperienceEntry) -> String {
    format!(
        "{} at {} ({}): {}",
        exp.position, exp.company, exp.duration, exp.description
    )
}

fn education_line(edu: &EducationEntry) -> String {
    format!("{} at {} ({})", edu.degree, edu.institution, edu.year)
}

fn project_line(project: &ProjectEntry) -> String {
    format!("{}: {}", project.title, project.description)
}

/// Renders a resume into the flat labeled text block that gets embedded.
/// Deterministic and total: absent fields render as empty strings.
pub fn serialize_resume(resume: &ResumeRecord) -> String {
    let experience = resume
        .experience
        .iter()
        .map(experience_line)
        .collect::<Vec<_>>()
        .join("\n");
    let education = resume
        .education
        .iter()
        .map(education_line)
        .collect::<Vec<_>>()
        .join("\n");
    let projects = resume
        .projects
        .iter()
        .map(project_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Name: {}\nEmail: {}\nRole: {}\nSkills: {}\nExperience: {}\nEducation: {}\nProjects: {}",
        opt(&resume.name),
        opt(&resume.email),
        opt(&resume.role),
        resume.skills.to_list().join(", "),
        experience,
        education,
        projects,
    )
}

/// Flattens the resume into the string-valued metadata stored alongside its
/// vector; this is what top-K queries get back to ground chat answers.
pub fn flatten_metadata(resume: &ResumeRecord) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert("name".to_string(), opt(&resume.name).to_string());
    metadata.insert("role".to_string(), opt(&resume.role).to_string());
    metadata.insert("skills".to_string(), resume.skills.to_list().join(", "));
    metadata.insert(
        "experience".to_string(),
        resume
            .experience
            .iter()
            .map(experience_line)
            .collect::<Vec<_>>()
            .join(" | "),
    );
    metadata.insert(
        "education".to_string(),
        resume
            .education
            .iter()
            .map(|edu| format!("{} from {} ({})", edu.degree, edu.institution, edu.year))
            .collect::<Vec<_>>()
            .join(" | "),
    );
    metadata.insert(
        "projects".to_string(),
        resume
            .projects
            .iter()
            .map(project_line)
            .collect::<Vec<_>>()
            .join(" | "),
    );
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillsField;

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@x.com".to_string()),
            role: Some("Backend Engineer".to_string()),
            skills: SkillsField::List(vec!["rust".to_string(), "sql".to_string()]),
            experience: vec![ExperienceEntry {
                company: "Acme Corp".to_string(),
                position: "Senior Engineer".to_string(),
                duration: "2020-2023".to_string(),
                description: "Built systems".to_string(),
            }],
            education: vec![EducationEntry {
                degree: "B.S. Computer Science".to_string(),
                institution: "Stanford".to_string(),
                year: "2019".to_string(),
                gpa: "3.8".to_string(),
            }],
            projects: vec![ProjectEntry {
                title: "Tracker".to_string(),
                description: "Inventory dashboard".to_string(),
                technologies: "React".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let record = sample_record();
        assert_eq!(serialize_resume(&record), serialize_resume(&record));
    }

    #[test]
    fn test_field_order_and_separators() {
        let text = serialize_resume(&sample_record());
        assert_eq!(
            text,
            "Name: Jane Doe\n\
             Email: jane@x.com\n\
             Role: Backend Engineer\n\
             Skills: rust, sql\n\
             Experience: Senior Engineer at Acme Corp (2020-2023): Built systems\n\
             Education: B.S. Computer Science at Stanford (2019)\n\
             Projects: Tracker: Inventory dashboard"
        );
    }

    #[test]
    fn test_every_field_absent_renders_empty() {
        let text = serialize_resume(&ResumeRecord::default());
        assert_eq!(
            text,
            "Name: \nEmail: \nRole: \nSkills: \nExperience: \nEducation: \nProjects: "
        );
    }

    #[test]
    fn test_metadata_joins_entries_with_pipes() {
        let mut record = sample_record();
        record.experience.push(ExperienceEntry {
            company: "Beta Inc".to_string(),
            position: "Staff Engineer".to_string(),
            duration: "2023-Present".to_string(),
            description: "Led platform".to_string(),
        });

        let metadata = flatten_metadata(&record);
        assert_eq!(
            metadata["experience"],
            "Senior Engineer at Acme Corp (2020-2023): Built systems | \
             Staff Engineer at Beta Inc (2023-Present): Led platform"
        );
        assert_eq!(
            metadata["education"],
            "B.S. Computer Science from Stanford (2019)"
        );
        assert_eq!(metadata["name"], "Jane Doe");
    }
}
