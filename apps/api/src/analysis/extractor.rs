//! Text extraction dispatch. The document kind is resolved once from the upload's
//! filename and each supported kind is bound to its own extraction function.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::analysis::docx::extract_docx_text;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    /// Resolves the kind from the filename suffix. Matching is case-sensitive.
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if file_name.ends_with(".docx") {
            DocumentKind::Docx
        } else {
            DocumentKind::Unsupported
        }
    }

    pub fn extension(self) -> Option<&'static str> {
        match self {
            DocumentKind::Pdf => Some("pdf"),
            DocumentKind::Docx => Some("docx"),
            DocumentKind::Unsupported => None,
        }
    }
}

/// Extracts plain text from the document at `path`.
///
/// Parsing runs on the blocking pool. A panic inside a parser library is
/// reported as an extraction failure, the same as a parse error.
pub async fn extract_text(kind: DocumentKind, path: PathBuf) -> Result<String, AppError> {
    if kind == DocumentKind::Unsupported {
        return Err(AppError::UnsupportedFileType);
    }

    match tokio::task::spawn_blocking(move || extract_text_blocking(kind, &path)).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => Err(AppError::Extraction(format!(
            "{kind:?} parser panicked"
        ))),
        Err(e) => Err(AppError::Internal(
            anyhow::Error::new(e).context("Extraction task failed"),
        )),
    }
}

fn extract_text_blocking(kind: DocumentKind, path: &Path) -> Result<String, AppError> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read staged upload '{}'", path.display()))?;
    debug!("Extracting {kind:?} text from {} bytes", data.len());

    match kind {
        DocumentKind::Pdf => extract_pdf_text(&data),
        DocumentKind::Docx => {
            extract_docx_text(&data).map_err(|e| AppError::Extraction(format!("DOCX: {e:#}")))
        }
        DocumentKind::Unsupported => Err(AppError::UnsupportedFileType),
    }
}

fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| AppError::Extraction(format!("PDF: {e}")))?;
    Ok(join_pages(pages))
}

/// Joins page texts with `\n`, dropping pages that carry no text at all.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages
        .into_iter()
        .map(|page| page.trim().to_string())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
