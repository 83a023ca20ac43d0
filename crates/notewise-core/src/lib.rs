//! Notewise Core — configuration, pipeline constants, stopwords, errors.

pub mod config;
pub mod error;
pub mod stopwords;

pub use config::{NotewiseConfig, PipelineConfig, BLANK_MARKER};
pub use error::{Error, Result};
pub use stopwords::{StopwordSet, DEFAULT_STOPWORDS};
