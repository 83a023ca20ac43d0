//! Text extraction for uploaded documents.

use std::panic::{self, AssertUnwindSafe};

use notewise_core::{Error, Result};
use tracing::debug;

/// Upload kinds accepted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Pdf,
    /// A form part with no filename; carries nothing to extract.
    Skip,
    Unsupported,
}

impl FileType {
    /// Detect file type from the uploaded filename, falling back to the
    /// declared content type for text.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Self::Pdf
        } else if lower.ends_with(".txt") || content_type == Some("text/plain") {
            Self::PlainText
        } else if lower.is_empty() {
            Self::Skip
        } else {
            Self::Unsupported
        }
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!("Input is not UTF-8, decoding {} bytes as Latin-1", bytes.len());
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

/// Extract the text of every page of a PDF, in document order.
pub fn extract_pdf_text(filename: &str, bytes: &[u8]) -> Result<String> {
    // pdf-extract panics on some malformed inputs.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(Error::Pdf {
            filename: filename.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Err(Error::Pdf {
            filename: filename.to_string(),
            reason: "document could not be parsed".to_string(),
        }),
    }
}

/// Extract text from one uploaded file.
///
/// Returns `Ok(None)` for parts that carry no file.
pub fn extract_text(
    filename: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<Option<String>> {
    match FileType::detect(filename, content_type) {
        FileType::Pdf => extract_pdf_text(filename, bytes).map(Some),
        FileType::PlainText => Ok(Some(decode_text(bytes))),
        FileType::Skip => Ok(None),
        FileType::Unsupported => Err(Error::UnsupportedFileType(filename.to_string())),
    }
}
