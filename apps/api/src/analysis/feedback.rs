use crate::analysis::models::ContactInfo;

pub const MISSING_EMAIL: &str = "Consider adding an email.";
pub const MISSING_PHONE: &str = "Include a phone number.";
pub const FEW_SKILLS: &str = "Consider adding more technical skills.";

/// Below this many matched skills the résumé is flagged.
pub const MIN_SKILLS: usize = 3;

/// Applies the advisory rules in fixed order: email, phone, skill count.
pub fn generate_feedback(contact: &ContactInfo, skills: &[&str]) -> Vec<String> {
    let mut feedback = Vec::new();

    if contact.email.is_none() {
        feedback.push(MISSING_EMAIL.to_string());
    }
    if contact.phone.is_none() {
        feedback.push(MISSING_PHONE.to_string());
    }
    if skills.len() < MIN_SKILLS {
        feedback.push(FEW_SKILLS.to_string());
    }

    feedback
}
