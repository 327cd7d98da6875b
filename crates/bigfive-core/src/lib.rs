//! # Bigfive-Core
//!
//! Core types for the Big Five questionnaire service: the trait
//! enumeration and ordered score set, question records and the
//! read-only question store, per-visitor session state, and the
//! shared error taxonomy.

pub mod error;
pub mod question;
pub mod session;
pub mod traits;

pub use error::{Error, Result};
pub use question::*;
pub use session::*;
pub use traits::*;
