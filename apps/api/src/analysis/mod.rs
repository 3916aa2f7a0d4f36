pub mod contact;
pub mod docx;
pub mod extractor;
pub mod feedback;
pub mod handlers;
pub mod models;
pub mod skills;

use crate::analysis::contact::extract_contact_info;
use crate::analysis::feedback::generate_feedback;
use crate::analysis::models::AnalysisResponse;
use crate::analysis::skills::match_skills;

/// Derives contact info, skills and feedback from extracted résumé text.
///
/// Never fails: text with no signals degrades to sentinels and empty lists.
pub fn analyze_text(text: &str) -> AnalysisResponse {
    let contact = extract_contact_info(text);
    let skills = match_skills(text);
    let feedback = generate_feedback(&contact, &skills);
    AnalysisResponse::assemble(contact, &skills, feedback)
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! In-memory DOCX and PDF documents for tests.

    use std::io::{Cursor, Write};

    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    pub fn zip_with_entry(name: &str, contents: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(name, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    /// A DOCX whose `w:body` holds the given raw WordprocessingML.
    pub fn docx_from_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        zip_with_entry("word/document.xml", &xml)
    }

    /// A DOCX with one single-run paragraph per entry.
    pub fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|text| {
                if text.is_empty() {
                    "<w:p></w:p>".to_string()
                } else {
                    format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
                }
            })
            .collect();
        docx_from_body(&body)
    }

    /// A valid PDF of `page_count` pages with empty content streams.
    pub fn blank_pdf(page_count: usize) -> Vec<u8> {
        text_pdf(&vec![""; page_count])
    }

    /// A PDF with one page per entry, each drawing its text in Courier.
    /// An empty entry produces a page with an empty content stream.
    pub fn text_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = if text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Resources" => resources_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages.len() as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::feedback::{FEW_SKILLS, MISSING_EMAIL, MISSING_PHONE};

    #[test]
    fn test_resume_with_two_skills() {
        let text = "Contact: jane@example.com\nPhone: 9876543210\nSkills: Python, React";
        let analysis = analyze_text(text);

        assert_eq!(analysis.email, "jane@example.com");
        assert_eq!(analysis.phone, "9876543210");
        assert!(analysis.skills.contains(&"Python".to_string()));
        assert!(analysis.skills.contains(&"React".to_string()));
        assert_eq!(analysis.feedback, vec![FEW_SKILLS]);
    }

    #[test]
    fn test_empty_text_degrades_gracefully() {
        let analysis = analyze_text("");
        assert_eq!(analysis.email, "Not found");
        assert_eq!(analysis.phone, "Not found");
        assert!(analysis.skills.is_empty());
        assert_eq!(analysis.feedback, vec![MISSING_EMAIL, MISSING_PHONE, FEW_SKILLS]);
    }

    #[test]
    fn test_strong_resume_has_no_feedback() {
        let text = "dev@corp.io +447911123456\nDjango, FastAPI and JavaScript";
        let analysis = analyze_text(text);
        assert_eq!(analysis.skills, vec!["JavaScript", "Django", "FastAPI"]);
        assert!(analysis.feedback.is_empty());
    }
}
