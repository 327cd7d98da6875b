//! Shared application state.
//!
//! Built once at startup and injected into every handler. The question
//! store and the loaded artifact are immutable for the process
//! lifetime; either load failure is recorded here instead of crashing,
//! putting the process into a degraded mode (routes gate on the
//! question store, predictions fail fast without a model).

use std::sync::Arc;
use std::time::Duration;

use bigfive_core::QuestionStore;
use bigfive_model::{FeatureVectorizer, TraitPredictor, VectorizerConfig};

use crate::config::AppConfig;
use crate::sessions::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    pub questions: QuestionStore,
    pub question_load_error: Option<String>,
    pub predictor: Option<TraitPredictor>,
    pub vectorizer: FeatureVectorizer,
    pub sessions: SessionStore,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Load both startup artifacts, recording failures rather than
    /// propagating them. No reloads are attempted afterwards.
    pub fn initialize(config: AppConfig) -> SharedState {
        let (questions, question_load_error) =
            match QuestionStore::load(&config.artifacts.questions_path) {
                Ok(store) => {
                    tracing::info!(count = store.len(), "question list loaded");
                    (store, None)
                }
                Err(e) => {
                    tracing::error!(error = %e, "question list failed to load");
                    (QuestionStore::empty(), Some(e.to_string()))
                }
            };

        let predictor = match TraitPredictor::load(&config.artifacts.model_path) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::error!(error = %e, "regression artifact failed to load");
                None
            }
        };

        Arc::new(Self::from_parts(
            config,
            questions,
            question_load_error,
            predictor,
        ))
    }

    /// Assemble state from already-loaded parts.
    pub fn from_parts(
        config: AppConfig,
        questions: QuestionStore,
        question_load_error: Option<String>,
        predictor: Option<TraitPredictor>,
    ) -> Self {
        let vectorizer = FeatureVectorizer::new(VectorizerConfig {
            reverse_scoring: config.quiz.reverse_scoring,
        });

        let sessions = SessionStore::with_ttl(Duration::from_secs(config.sessions.ttl_secs));

        Self {
            config,
            questions,
            question_load_error,
            predictor,
            vectorizer,
            sessions,
        }
    }

    pub fn questions_loaded(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        self.questions.page_count(self.config.quiz.questions_per_page)
    }
}
