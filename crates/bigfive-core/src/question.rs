//! Question records and the read-only question store.
//!
//! Questions are loaded once from a JSON array at process start and
//! shared immutably by every session. The canonical question ordering
//! used for feature vectorization is defined by the trained model's
//! input schema, not by the file order, and lives here as a constant.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of questionnaire items the model expects.
pub const FEATURE_COUNT: usize = 50;

/// Canonical question-id ordering matching the trained model's input
/// schema. Feature vectors are always built in exactly this order.
pub const CANONICAL_QUESTION_ORDER: [&str; FEATURE_COUNT] = [
    "EXT1", "EXT2", "EXT3", "EXT4", "EXT5", "EXT6", "EXT7", "EXT8", "EXT9", "EXT10",
    "EST1", "EST2", "EST3", "EST4", "EST5", "EST6", "EST7", "EST8", "EST9", "EST10",
    "AGR1", "AGR2", "AGR3", "AGR4", "AGR5", "AGR6", "AGR7", "AGR8", "AGR9", "AGR10",
    "CSN1", "CSN2", "CSN3", "CSN4", "CSN5", "CSN6", "CSN7", "CSN8", "CSN9", "CSN10",
    "OPN1", "OPN2", "OPN3", "OPN4", "OPN5", "OPN6", "OPN7", "OPN8", "OPN9", "OPN10",
];

/// Question ids that were reverse-keyed in the original instrument.
/// Reverse scoring is applied only when explicitly enabled in the
/// vectorizer configuration.
pub const REVERSE_SCORED_IDS: [&str; 24] = [
    "EXT2", "EXT4", "EXT6", "EXT8", "EXT10",
    "EST1", "EST3", "EST5", "EST6", "EST7", "EST8", "EST9", "EST10",
    "AGR1", "AGR3", "AGR5", "AGR7",
    "CSN2", "CSN4", "CSN6", "CSN8",
    "OPN2", "OPN4", "OPN6",
];

/// Likert response scale bounds for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseScale {
    pub min: u8,
    pub max: u8,
}

impl Default for ResponseScale {
    fn default() -> Self {
        Self { min: 1, max: 5 }
    }
}

impl ResponseScale {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,

    #[serde(default)]
    pub scale: ResponseScale,
}

/// Ordered, immutable collection of questionnaire items.
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Load questions from a JSON array file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::QuestionLoad(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_json(&raw)
    }

    /// Parse questions from a JSON array string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let questions: Vec<Question> =
            serde_json::from_str(raw).map_err(|e| Error::QuestionLoad(e.to_string()))?;
        Ok(Self { questions })
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Number of pages when paginating `per_page` items at a time.
    pub fn page_count(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        (self.questions.len() + per_page - 1) / per_page
    }

    /// Questions on 1-based page `page`, or None when out of range.
    pub fn page(&self, page: usize, per_page: usize) -> Option<&[Question]> {
        if page < 1 || page > self.page_count(per_page) {
            return None;
        }
        let start = (page - 1) * per_page;
        let end = (page * per_page).min(self.questions.len());
        Some(&self.questions[start..end])
    }
}
