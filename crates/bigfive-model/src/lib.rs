//! # Bigfive-Model
//!
//! Answer-to-feature transformation and trait prediction for the
//! Big Five questionnaire service. The vectorizer maps a complete
//! answer map into the model's fixed input order; the predictor runs
//! the pre-trained regression artifact and converts raw scores to
//! percentages.

pub mod predictor;
pub mod vectorizer;

pub use predictor::*;
pub use vectorizer::*;
