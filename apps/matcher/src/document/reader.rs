//! Text Reader: turns a `.txt`, `.pdf` or `.docx` document into a raw string.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

/// Source format of a document, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Text,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a file name to its format. Unknown extensions fail with `UnsupportedFormat`.
    pub fn from_file_name(file_name: &str) -> Result<Self, AppError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(DocumentFormat::Text),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "" => Err(AppError::UnsupportedFormat("(no extension)".to_string())),
            other => Err(AppError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

/// A document's extracted text plus the format it came from.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub format: DocumentFormat,
}

/// Reads a document from disk. A missing path fails with `FileNotFound`.
pub fn read_document(path: &Path) -> Result<Document, AppError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let format = DocumentFormat::from_file_name(file_name)?;

    let data = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::FileNotFound(path.to_path_buf()),
        _ => AppError::Io(e),
    })?;

    let text = extract_text(format, &data)?;
    debug!(path = %path.display(), ?format, chars = text.len(), "Document read");
    Ok(Document { text, format })
}

/// Reads an in-memory upload, choosing the decoder from `file_name`'s extension.
pub fn read_document_bytes(file_name: &str, data: &[u8]) -> Result<Document, AppError> {
    let format = DocumentFormat::from_file_name(file_name)?;
    let text = extract_text(format, data)?;
    debug!(file_name, ?format, chars = text.len(), "Upload read");
    Ok(Document { text, format })
}

fn extract_text(format: DocumentFormat, data: &[u8]) -> Result<String, AppError> {
    match format {
        DocumentFormat::Text => Ok(String::from_utf8_lossy(data).into_owned()),
        // Text layer only: scanned PDFs come back empty.
        DocumentFormat::Pdf => {
            pdf_extract::extract_text_from_mem(data).map_err(|e| AppError::Pdf(e.to_string()))
        }
        DocumentFormat::Docx => extract_docx_text(data).map_err(|e| AppError::Docx(e.to_string())),
    }
}

/// Pulls paragraph text out of `word/document.xml`, one line per paragraph.
fn extract_docx_text(data: &[u8]) -> anyhow::Result<String> {
    let cursor = Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut document_file = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document_file.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);

    let mut buf = Vec::new();
    let mut current = String::new();
    let mut lines = Vec::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if !current.trim().is_empty() {
                        lines.push(current.trim().to_string());
                    }
                    current.clear();
                }
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => current.push(' '),
                b"w:br" => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_run {
                    current.push_str(&e.xml_content()?);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_text_run {
                    if let Some(ch) = e.resolve_char_ref()? {
                        current.push(ch);
                    } else {
                        let name = e.decode()?;
                        current.push_str(match name.as_ref() {
                            "amp" => "&",
                            "lt" => "<",
                            "gt" => ">",
                            "quot" => "\"",
                            "apos" => "'",
                            _ => "",
                        });
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {}
        }

        buf.clear();
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(
            "word/document.xml",
            zip::write::SimpleFileOptions::default(),
        )
        .unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_format_from_extension_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_file_name("cv.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_file_name("cv.docx").unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_file_name("cv.txt").unwrap(), DocumentFormat::Text);
    }

    #[test]
    fn test_rtf_is_unsupported_and_named() {
        let err = DocumentFormat::from_file_name("resume.rtf").unwrap_err();
        match err {
            AppError::UnsupportedFormat(ext) => assert_eq!(ext, ".rtf"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        assert!(matches!(
            DocumentFormat::from_file_name("resume"),
            Err(AppError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_plain_text_bytes() {
        let doc = read_document_bytes("cv.txt", b"Python and Docker").unwrap();
        assert_eq!(doc.text, "Python and Docker");
        assert_eq!(doc.format, DocumentFormat::Text);
    }

    #[test]
    fn test_read_text_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Rust developer").unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.text, "Rust developer");
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(read_document(&path), Err(AppError::FileNotFound(p)) if p == path));
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Python</w:t></w:r><w:r><w:t xml:space="preserve"> developer</w:t></w:r></w:p>
    <w:p><w:r><w:t>AWS &amp; Docker</w:t></w:r></w:p>
  </w:body>
</w:document>"#;
        let doc = read_document_bytes("cv.docx", &build_docx(xml)).unwrap();
        assert_eq!(doc.format, DocumentFormat::Docx);
        assert_eq!(doc.text, "Python developer\nAWS & Docker");
    }

    #[test]
    fn test_corrupt_pdf_is_pdf_error() {
        let err = read_document_bytes("cv.pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Pdf(_)));
        assert!(err.to_string().starts_with("PDF extraction failed"));
    }

    #[test]
    fn test_corrupt_docx_is_docx_error() {
        let err = read_document_bytes("cv.docx", b"not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::Docx(_)));
    }
}
