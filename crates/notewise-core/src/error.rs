//! Error types for Notewise.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported file type for '{0}'. Use PDF or TXT.")]
    UnsupportedFileType(String),

    #[error("Failed to read PDF '{filename}': {reason}")]
    Pdf { filename: String, reason: String },

    #[error("No text found in request. Provide 'text' or upload PDF/TXT files[]")]
    NoContent,

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether the error was caused by the request rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFileType(_)
                | Self::Pdf { .. }
                | Self::NoContent
                | Self::Multipart(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
