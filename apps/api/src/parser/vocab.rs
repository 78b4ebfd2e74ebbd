//! Fixed vocabularies and section keyword sets used by the field extractors.
//!
//! Kept as constant data (not hard-coded branches) so tests can substitute
//! smaller tables.

/// Known technical skills, in the order they are reported.
/// Matching is case-insensitive containment, also tried with internal
/// spaces stripped (so "github actions" matches "githubactions").
pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "kotlin",
    "swift",
    "scala",
    "r",
    "matlab",
    "perl",
    "shell",
    "bash",
    "powershell",
    // Frontend
    "react",
    "angular",
    "vue",
    "svelte",
    "jquery",
    "bootstrap",
    "tailwind",
    "sass",
    "less",
    "html",
    "css",
    "html5",
    "css3",
    "responsive design",
    "webpack",
    "vite",
    "parcel",
    // Backend
    "nodejs",
    "express",
    "nestjs",
    "django",
    "flask",
    "fastapi",
    "spring",
    "laravel",
    "rails",
    ".net",
    "asp.net",
    "gin",
    "fiber",
    // Databases
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "sqlite",
    "oracle",
    "dynamodb",
    "cassandra",
    "neo4j",
    "firebase",
    // Cloud & DevOps
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "gitlab",
    "github actions",
    "terraform",
    "ansible",
    "chef",
    "puppet",
    "vagrant",
    "nginx",
    "apache",
    // Tools
    "git",
    "github",
    "bitbucket",
    "jira",
    "confluence",
    "slack",
    "figma",
    "adobe",
    "photoshop",
    "illustrator",
    "sketch",
    "xd",
    "invision",
    // Methodologies
    "agile",
    "scrum",
    "kanban",
    "devops",
    "ci/cd",
    "tdd",
    "bdd",
    "microservices",
    "rest api",
    "graphql",
    "soap",
    "grpc",
    // Data & AI
    "machine learning",
    "deep learning",
    "data science",
    "data analysis",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "keras",
    "opencv",
    "nltk",
    // Mobile
    "react native",
    "flutter",
    "ionic",
    "xamarin",
    "android",
    "ios",
];

/// Degree keywords that signal a new education record.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "associate",
    "diploma",
    "certificate",
    "b.s.",
    "b.a.",
    "m.s.",
    "m.a.",
    "mba",
    "ph.d.",
    "bs",
    "ba",
    "ms",
    "ma",
];

/// Job-title vocabulary used to recognize position lines.
pub const TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "specialist",
    "lead",
    "senior",
    "junior",
];

/// Phrases that mark a project line as listing its tech stack.
pub const TECH_STACK_MARKERS: &[&str] = &[
    "built with",
    "using",
    "technologies",
    "tech stack",
    "tools",
    "framework",
];

/// Heading keywords for the summary section, plus the lines that end it.
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "summary",
    "objective",
    "about",
    "profile",
    "overview",
    "professional summary",
    "career objective",
    "personal statement",
];

pub const SUMMARY_STOP_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "employment",
    "work history",
];

/// Words that disqualify a line from being the candidate's name.
pub const NAME_BLOCKLIST: &[&str] = &["resume", "cv", "curriculum", "profile", "summary"];

// Section boundary keyword sets. A section starts after the first short line
// containing a start keyword and ends at the first short line containing a
// stop keyword.

pub const EXPERIENCE_START_KEYWORDS: &[&str] = &["experience", "employment", "work history"];
pub const EXPERIENCE_STOP_KEYWORDS: &[&str] = &["education", "projects", "skills"];
pub const EXPERIENCE_HEADER_MAX_LEN: usize = 50;

pub const EDUCATION_START_KEYWORDS: &[&str] = &["education", "academic"];
pub const EDUCATION_STOP_KEYWORDS: &[&str] = &["experience", "projects", "skills"];
pub const EDUCATION_HEADER_MAX_LEN: usize = 40;

pub const PROJECTS_START_KEYWORDS: &[&str] = &["project", "portfolio"];
pub const PROJECTS_STOP_KEYWORDS: &[&str] = &["education", "experience"];
pub const PROJECTS_HEADER_MAX_LEN: usize = 40;
