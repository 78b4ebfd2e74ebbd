//! Skills extraction against a fixed vocabulary.

use std::collections::HashSet;

/// Returns the subset of `vocabulary` found in `text`, in vocabulary order
/// (not text order), de-duplicated case-insensitively.
///
/// Containment is tested case-insensitively, both verbatim and with the
/// skill's internal spaces stripped, so "github actions" also matches text
/// that spells it "githubactions".
pub fn extract_skills(text: &str, vocabulary: &[&str]) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut found = Vec::new();

    for skill in vocabulary {
        let needle = skill.to_lowercase();
        let compact: String = needle.chars().filter(|c| !c.is_whitespace()).collect();

        if (haystack.contains(&needle) || haystack.contains(&compact))
            && seen.insert(needle)
        {
            found.push(skill.to_string());
        }
    }

    found
}
