//! Pipeline constants and service configuration.

use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::stopwords::StopwordSet;

/// Literal substituted for the tested phrase in a question stem.
pub const BLANK_MARKER: &str = "_____";

/// Tunable constants of the analysis pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineConfig {
    /// Words excluded from frequency scoring.
    pub stopwords: StopwordSet,
    /// Shortest token (in chars) counted as a term.
    pub min_token_len: usize,
    /// Shortest trimmed sentence (in chars) kept by the segmenter.
    pub min_sentence_len: usize,
    /// Smoothing added to the token count when scoring sentences.
    pub epsilon: f64,
    /// Upper bound on sentences in the summary.
    pub summary_sentences: usize,
    /// Ranked phrases considered when generating questions.
    pub keyphrase_pool: usize,
    /// Ranked phrases returned as tags.
    pub tag_limit: usize,
    /// Questions generated per call.
    pub question_count: usize,
    pub max_distractors: usize,
    pub max_options: usize,
    pub blank_marker: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stopwords: StopwordSet::default(),
            min_token_len: 3,
            min_sentence_len: 3,
            epsilon: 1e-6,
            summary_sentences: 5,
            keyphrase_pool: 24,
            tag_limit: 6,
            question_count: 6,
            max_distractors: 8,
            max_options: 4,
            blank_marker: BLANK_MARKER.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Defaults, overridden by `NOTEWISE_*` environment variables when set.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Defaults, overridden by whatever `lookup` returns for each
    /// `NOTEWISE_*` name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let stopwords = match lookup("NOTEWISE_STOPWORDS") {
            Some(list) => StopwordSet::from_words(list.split(',')),
            None => defaults.stopwords.clone(),
        };

        Self {
            stopwords,
            summary_sentences: lookup_or(
                &lookup,
                "NOTEWISE_SUMMARY_SENTENCES",
                defaults.summary_sentences,
            ),
            keyphrase_pool: lookup_or(&lookup, "NOTEWISE_KEYPHRASE_POOL", defaults.keyphrase_pool),
            tag_limit: lookup_or(&lookup, "NOTEWISE_TAG_LIMIT", defaults.tag_limit),
            question_count: lookup_or(&lookup, "NOTEWISE_QUESTION_COUNT", defaults.question_count),
            ..defaults
        }
    }
}

/// Top-level Notewise configuration.
#[derive(Debug, Clone, Serialize)]
pub struct NotewiseConfig {
    /// HTTP server port.
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
    pub pipeline: PipelineConfig,
}

impl NotewiseConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup_or(&lookup, "PORT", 5000u16);
        let max_upload_mb = lookup_or(&lookup, "NOTEWISE_MAX_UPLOAD_MB", 16usize);

        Self {
            port,
            max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024),
            pipeline: PipelineConfig::from_lookup(lookup),
        }
    }
}

impl Default for NotewiseConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            max_upload_bytes: 16 * 1024 * 1024,
            pipeline: PipelineConfig::default(),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn lookup_or<T, F>(lookup: &F, name: &str, default: T) -> T
where
    T: FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => parse_or(name, &raw, default),
        None => default,
    }
}

fn parse_or<T: FromStr + Copy>(name: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("Ignoring invalid value {:?} for {}", raw, name);
            default
        }
    }
}
