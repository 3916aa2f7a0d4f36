use serde::Serialize;

/// Sentinel reported in place of a contact field with no match.
pub const NOT_FOUND: &str = "Not found";

/// First email and phone match in document order, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Body of a successful `POST /analyze-resume`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResponse {
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub feedback: Vec<String>,
}

impl AnalysisResponse {
    pub fn assemble(contact: ContactInfo, skills: &[&str], feedback: Vec<String>) -> Self {
        Self {
            email: contact.email.unwrap_or_else(|| NOT_FOUND.to_string()),
            phone: contact.phone.unwrap_or_else(|| NOT_FOUND.to_string()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            feedback,
        }
    }
}
