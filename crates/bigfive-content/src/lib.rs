//! # Bigfive-Content
//!
//! Static narrative content for the questionnaire service: career
//! personas keyed by the dominant trait and growth tips keyed by
//! (trait, score band). Pure lookups over fixed tables, no I/O.

pub mod growth;
pub mod persona;

pub use growth::*;
pub use persona::*;
