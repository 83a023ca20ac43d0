//! End-to-end analysis: normalize → segment → count → rank → summarize → quiz.

use notewise_core::PipelineConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::frequency::FrequencyTable;
use crate::keyphrases;
use crate::normalize::normalize;
use crate::quiz::{QuizGenerator, QuizQuestion};
use crate::sentences::split_sentences;
use crate::summarize::summarize;

/// Everything derived from one block of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: String,
    pub questions: Vec<QuizQuestion>,
    pub tags: Vec<String>,
}

/// The analysis pipeline. Stateless between calls and safe to share across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Analyze raw text. `rng` only affects the order of quiz options.
    pub fn run<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Analysis {
        self.run_normalized(&normalize(text), rng)
    }

    /// Analyze text that has already been through [`normalize`].
    pub fn run_normalized<R: Rng + ?Sized>(&self, normalized: &str, rng: &mut R) -> Analysis {
        let config = &self.config;
        if normalized.is_empty() {
            return Analysis::default();
        }

        let sentences = split_sentences(normalized, config.min_sentence_len);
        let table = FrequencyTable::build(normalized, &config.stopwords, config.min_token_len);
        debug!(
            "Segmented {} sentences, {} distinct terms",
            sentences.len(),
            table.len()
        );

        let ranked = keyphrases::rank(&table);
        let tags = head(&ranked, config.tag_limit);
        let pool = head(&ranked, config.keyphrase_pool);

        let summary = summarize(
            &sentences,
            &table,
            config.summary_sentences,
            config.epsilon,
        );
        let questions = QuizGenerator::from_config(config).generate(
            &sentences,
            pool,
            config.question_count,
            rng,
        );

        Analysis {
            summary,
            questions,
            tags: tags.to_vec(),
        }
    }
}

fn head(ranked: &[String], limit: usize) -> &[String] {
    &ranked[..limit.min(ranked.len())]
}
