/// Fixed skill vocabulary checked against every résumé.
pub const SKILL_VOCABULARY: [&str; 8] = [
    "Python",
    "JavaScript",
    "Machine Learning",
    "AI",
    "Data Science",
    "React",
    "Django",
    "FastAPI",
];

/// Returns the vocabulary terms found anywhere in `text`, ignoring case.
///
/// Plain substring containment: "AI" also matches inside "maintained".
/// Results follow vocabulary order.
pub fn match_skills(text: &str) -> Vec<&'static str> {
    let haystack = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .collect()
}
