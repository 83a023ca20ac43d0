//! Notewise Ingest — document text extraction and the summary / tags / quiz
//! analysis pipeline.

pub mod file;
pub mod frequency;
pub mod ingest;
pub mod keyphrases;
pub mod normalize;
pub mod pipeline;
pub mod quiz;
pub mod sentences;
pub mod summarize;

pub use frequency::{tokenize, FrequencyTable, TermStats};
pub use ingest::{analyze_submission, Submission};
pub use normalize::normalize;
pub use pipeline::{Analysis, Pipeline};
pub use quiz::{QuizGenerator, QuizQuestion};
pub use sentences::{split_sentences, Sentence};
pub use summarize::summarize;
