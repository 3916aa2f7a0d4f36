//! DOCX body text: `word/document.xml` streamed out of the zip package.
//!
//! A paragraph's text is the concatenation of its `w:t` runs, with `w:tab`
//! rendered as `\t`, `w:br`/`w:cr` as `\n` and `w:noBreakHyphen` as `-`. Only
//! direct body paragraphs count; paragraphs inside tables, text boxes and
//! content controls are skipped. Empty paragraphs are kept so the joined text
//! preserves blank lines.

use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::Reader;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts body paragraphs from DOCX bytes, joined with `\n`.
pub fn extract_docx_text(data: &[u8]) -> Result<String> {
    let xml = read_document_part(data)?;
    Ok(read_paragraphs(&xml)?.join("\n"))
}

fn read_document_part(data: &[u8]) -> Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(data)).context("Not a zip-packaged DOCX document")?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("DOCX package has no {DOCUMENT_PART}"))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .with_context(|| format!("Failed to read {DOCUMENT_PART}"))?;
    Ok(xml)
}

/// Body paragraph texts of a WordprocessingML document, in document order.
pub fn read_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut body = BodyCursor::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" | b"w:sdt" => body.nested += 1,
                b"w:p" if body.nested == 0 => body.current = Some(String::new()),
                b"w:pPr" => body.in_properties = true,
                b"w:t" => body.in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if body.nested == 0 => paragraphs.push(String::new()),
                b"w:tab" => body.push_markup("\t"),
                b"w:br" | b"w:cr" => body.push_markup("\n"),
                b"w:noBreakHyphen" => body.push_markup("-"),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" | b"w:sdt" => {
                    body.nested = body.nested.saturating_sub(1)
                }
                b"w:p" if body.nested == 0 => {
                    if let Some(text) = body.current.take() {
                        paragraphs.push(text);
                    }
                }
                b"w:pPr" => body.in_properties = false,
                b"w:t" => body.in_text = false,
                _ => {}
            },
            Event::Text(e) if body.in_text => body.push_text(&e.xml_content()?),
            Event::GeneralRef(e) if body.in_text => {
                let resolved = match e.resolve_char_ref()? {
                    Some(ch) => ch.to_string(),
                    None => {
                        let name = e.decode()?;
                        resolve_predefined_entity(&name)
                            .unwrap_or_default()
                            .to_string()
                    }
                };
                body.push_text(&resolved);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Where the reader currently sits relative to body paragraphs.
#[derive(Default)]
struct BodyCursor {
    /// Text of the open body paragraph, `None` outside one.
    current: Option<String>,
    /// Depth inside tables, text boxes and content controls.
    nested: usize,
    in_properties: bool,
    in_text: bool,
}

impl BodyCursor {
    fn push_text(&mut self, text: &str) {
        if self.nested > 0 {
            return;
        }
        if let Some(paragraph) = self.current.as_mut() {
            paragraph.push_str(text);
        }
    }

    /// Tab and break elements; inside `w:pPr` a `w:tab` is a tab stop, not a character.
    fn push_markup(&mut self, text: &str) {
        if !self.in_properties {
            self.push_text(text);
        }
    }
}
