//! Fill-in-the-blank question synthesis from ranked key phrases.

use std::collections::HashSet;

use notewise_core::{PipelineConfig, BLANK_MARKER};
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{NoExpand, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sentences::Sentence;

/// A multiple-choice question whose answer is one of its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// `q<n>` in generation order.
    pub id: String,
    #[serde(rename = "question")]
    pub stem: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Question generator. Holds only read-only settings; each call to
/// [`QuizGenerator::generate`] keeps its own state.
#[derive(Debug, Clone)]
pub struct QuizGenerator<'a> {
    pub max_distractors: usize,
    pub max_options: usize,
    pub blank_marker: &'a str,
}

impl Default for QuizGenerator<'static> {
    fn default() -> Self {
        Self {
            max_distractors: 8,
            max_options: 4,
            blank_marker: BLANK_MARKER,
        }
    }
}

impl<'a> QuizGenerator<'a> {
    pub fn from_config(config: &'a PipelineConfig) -> Self {
        Self {
            max_distractors: config.max_distractors,
            max_options: config.max_options,
            blank_marker: &config.blank_marker,
        }
    }

    /// Generate up to `num_questions` questions, walking `pool` in rank order.
    ///
    /// `rng` only decides the order of each question's options.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        sentences: &[Sentence],
        pool: &[String],
        num_questions: usize,
        rng: &mut R,
    ) -> Vec<QuizQuestion> {
        let mut used: HashSet<&str> = HashSet::new();
        let mut questions = Vec::new();

        // Lowercase once; matching is repeated for every phrase.
        let lowered: Vec<String> = sentences.iter().map(|s| s.text.to_lowercase()).collect();

        for phrase in pool {
            if questions.len() >= num_questions {
                break;
            }
            if phrase.is_empty() || !used.insert(phrase.as_str()) {
                continue;
            }

            let source = lowered
                .iter()
                .position(|lower| lower.contains(phrase.as_str()))
                .map(|i| &sentences[i]);
            let stem = match source {
                Some(sentence) => self.blank_out(&sentence.text, phrase),
                None => format!("What best describes: {}?", phrase),
            };

            let mut options = self.options_for(phrase, pool);
            options.shuffle(rng);

            questions.push(QuizQuestion {
                id: format!("q{}", questions.len() + 1),
                stem,
                options,
                answer: phrase.clone(),
            });
        }

        debug!(
            "Generated {} questions from {} phrases",
            questions.len(),
            pool.len()
        );
        questions
    }

    /// Replace every case-insensitive occurrence of `phrase` with the blank marker.
    pub fn blank_out(&self, text: &str, phrase: &str) -> String {
        match RegexBuilder::new(&regex::escape(phrase))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re.replace_all(text, NoExpand(self.blank_marker)).into_owned(),
            Err(_) => text.to_string(),
        }
    }

    /// The answer followed by distractors in rank order, capped at `max_options`.
    fn options_for(&self, phrase: &str, pool: &[String]) -> Vec<String> {
        let mut options = vec![phrase.to_string()];
        let distractors = pool
            .iter()
            .filter(|p| p.as_str() != phrase)
            .take(self.max_distractors);

        for candidate in distractors {
            if options.len() >= self.max_options {
                break;
            }
            if !options.contains(candidate) {
                options.push(candidate.clone());
            }
        }
        options.truncate(self.max_options.max(1));
        options
    }
}
