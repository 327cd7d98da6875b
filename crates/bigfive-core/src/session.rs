//! Per-visitor session state.
//!
//! A session accumulates answers across paginated submissions and
//! caches computed trait scores for downstream pages. It is keyed by
//! an opaque [`SessionId`] carried in a cookie; the transport is an
//! API-layer concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::question::QuestionStore;
use crate::traits::TraitScores;

/// Opaque per-visitor session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Question id to integer response (1-5).
pub type AnswerMap = BTreeMap<String, u8>;

/// State carried by one visitor across the quiz lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Answers collected so far, grows monotonically across pages.
    pub answers: AnswerMap,

    /// Trait scores cached after the first successful prediction.
    pub results: Option<TraitScores>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one response, rejecting values outside the 1-5 scale.
    pub fn record_answer(&mut self, question_id: &str, value: i64) -> Result<()> {
        if !(1..=5).contains(&value) {
            return Err(Error::InvalidResponse {
                question_id: question_id.to_string(),
                value,
            });
        }
        self.answers.insert(question_id.to_string(), value as u8);
        Ok(())
    }

    /// True once every question in the store has a recorded answer.
    pub fn is_complete(&self, store: &QuestionStore) -> bool {
        !store.is_empty() && store.ids().all(|id| self.answers.contains_key(id))
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}
