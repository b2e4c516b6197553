//! Text extraction for uploaded files

use crate::error::{Error, Result};
use crate::types::source::FileType;

/// Extract plain text from uploaded bytes, dispatching on the file name's
/// extension. Unreadable or unsupported content surfaces as a parse error.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String> {
    let file_type = FileType::from_filename(filename);

    let content = match file_type {
        FileType::Pdf => extract_pdf(filename, data)?,
        FileType::Docx => extract_docx(filename, data)?,
        FileType::Txt => String::from_utf8_lossy(data).to_string(),
        FileType::Unknown => {
            return Err(Error::UnsupportedFileType(filename.to_string()));
        }
    };

    if content.trim().is_empty() {
        return Err(Error::file_parse(filename, "no extractable text"));
    }

    Ok(content)
}

/// Extract PDF text
fn extract_pdf(filename: &str, data: &[u8]) -> Result<String> {
    let content = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| Error::file_parse(filename, e.to_string()))?;

    // Strip null characters and font-artifact whitespace
    let content = content
        .replace('\0', "")
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(content)
}

/// Extract DOCX text, one line per paragraph
fn extract_docx(filename: &str, data: &[u8]) -> Result<String> {
    let doc = docx_rs::read_docx(data).map_err(|e| Error::file_parse(filename, e.to_string()))?;

    let mut content = String::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            for child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            content.push_str(&t.text);
                        }
                    }
                }
            }
            content.push('\n');
        }
    }

    Ok(content)
}
