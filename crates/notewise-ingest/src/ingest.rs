//! Request ingestion: free text + uploaded files → one text blob → analysis.

use notewise_core::{Error, Result};
use rand::Rng;
use tracing::{debug, info};

use crate::file;
use crate::normalize::normalize;
use crate::pipeline::{Analysis, Pipeline};

/// Text collected from one request, in submission order.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    parts: Vec<String>,
    files: usize,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the free-text field. Blank input is ignored.
    pub fn push_text(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.parts.push(text.to_string());
        }
    }

    /// Add an uploaded file, rejecting unsupported types.
    pub fn push_file(
        &mut self,
        filename: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<()> {
        if let Some(text) = file::extract_text(filename, content_type, bytes)? {
            debug!("Extracted {} chars from {}", text.len(), filename);
            self.files += 1;
            if !text.is_empty() {
                self.parts.push(text);
            }
        }
        Ok(())
    }

    /// Number of files that contributed text.
    pub fn file_count(&self) -> usize {
        self.files
    }

    /// Newline-joined concatenation of all parts.
    pub fn into_text(self) -> String {
        self.parts.join("\n")
    }
}

/// Run the pipeline over a submission.
///
/// Fails with [`Error::NoContent`] when nothing is left after normalization.
pub fn analyze_submission<R: Rng + ?Sized>(
    pipeline: &Pipeline,
    submission: Submission,
    rng: &mut R,
) -> Result<Analysis> {
    let files = submission.file_count();
    let normalized = normalize(&submission.into_text());
    if normalized.is_empty() {
        return Err(Error::NoContent);
    }

    let analysis = pipeline.run_normalized(&normalized, rng);
    info!(
        "Analyzed {} chars from {} files: {} tags, {} questions",
        normalized.len(),
        files,
        analysis.tags.len(),
        analysis.questions.len()
    );
    Ok(analysis)
}
