//! Answer-map to feature-vector transformation.
//!
//! The vectorizer walks the canonical question order and pulls one
//! response per id. A missing id fails the whole transformation with
//! [`Error::MissingAnswer`]; no partial vector is ever produced, and
//! the caller surfaces the failure as a retake-required condition.

use bigfive_core::{
    AnswerMap, Error, Result, CANONICAL_QUESTION_ORDER, FEATURE_COUNT, REVERSE_SCORED_IDS,
};

/// Reverse-key a Likert response: 1 <-> 5, 2 <-> 4, 3 stays.
pub fn reverse_score(value: u8) -> u8 {
    6 - value
}

/// Vectorizer configuration.
///
/// Reverse scoring was part of the original instrument design but is
/// disabled in the deployed model; it stays off unless explicitly
/// enabled here.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorizerConfig {
    pub reverse_scoring: bool,
}

/// Maps a complete [`AnswerMap`] into the model's fixed input order.
#[derive(Debug, Clone, Default)]
pub struct FeatureVectorizer {
    config: VectorizerConfig,
}

impl FeatureVectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    /// Produce the 50-element feature vector in canonical order.
    pub fn vectorize(&self, answers: &AnswerMap) -> Result<Vec<f32>> {
        let mut features = Vec::with_capacity(FEATURE_COUNT);
        for id in CANONICAL_QUESTION_ORDER {
            let value = *answers.get(id).ok_or_else(|| Error::MissingAnswer {
                question_id: id.to_string(),
            })?;
            let value = if self.config.reverse_scoring && REVERSE_SCORED_IDS.contains(&id) {
                reverse_score(value)
            } else {
                value
            };
            features.push(f32::from(value));
        }
        Ok(features)
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_answers(value: u8) -> AnswerMap {
        CANONICAL_QUESTION_ORDER
            .iter()
            .map(|id| (id.to_string(), value))
            .collect()
    }

    #[test]
    fn test_all_mid_scale_answers() {
        let vectorizer = FeatureVectorizer::default();
        let features = vectorizer.vectorize(&complete_answers(3)).unwrap();
        assert_eq!(features.len(), FEATURE_COUNT);
        assert!(features.iter().all(|&f| f == 3.0));
    }

    #[test]
    fn test_order_matches_canonical() {
        let mut answers = complete_answers(1);
        answers.insert("OPN10".to_string(), 5);
        answers.insert("EXT1".to_string(), 2);

        let vectorizer = FeatureVectorizer::default();
        let features = vectorizer.vectorize(&answers).unwrap();
        assert_eq!(features[0], 2.0); // EXT1 is first
        assert_eq!(features[FEATURE_COUNT - 1], 5.0); // OPN10 is last
    }

    #[test]
    fn test_missing_answer_names_the_id() {
        let mut answers = complete_answers(3);
        answers.remove("AGR7");

        let vectorizer = FeatureVectorizer::default();
        match vectorizer.vectorize(&answers) {
            Err(Error::MissingAnswer { question_id }) => assert_eq!(question_id, "AGR7"),
            other => panic!("expected MissingAnswer, got {other:?}"),
        }
    }

    #[test]
    fn test_reverse_score_function() {
        assert_eq!(reverse_score(1), 5);
        assert_eq!(reverse_score(2), 4);
        assert_eq!(reverse_score(3), 3);
        assert_eq!(reverse_score(5), 1);
    }

    #[test]
    fn test_reverse_scoring_disabled_by_default() {
        let vectorizer = FeatureVectorizer::default();
        let features = vectorizer.vectorize(&complete_answers(5)).unwrap();
        assert!(features.iter().all(|&f| f == 5.0));
    }

    #[test]
    fn test_reverse_scoring_enabled() {
        let vectorizer = FeatureVectorizer::new(VectorizerConfig {
            reverse_scoring: true,
        });
        let features = vectorizer.vectorize(&complete_answers(5)).unwrap();

        // EXT1 is forward-keyed, EXT2 is reverse-keyed.
        assert_eq!(features[0], 5.0);
        assert_eq!(features[1], 1.0);

        let reversed = features.iter().filter(|&&f| f == 1.0).count();
        assert_eq!(reversed, REVERSE_SCORED_IDS.len());
    }
}
