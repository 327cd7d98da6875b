//! # Bigfive-API
//!
//! HTTP surface for the Big Five questionnaire service.
//!
//! ## Endpoints
//!
//! - `GET /` - Landing page payload
//! - `GET /about` - About page payload
//! - `GET /how-it-works` - Methodology page payload
//! - `GET /test/start` - Reset the visitor session, redirect to page 1
//! - `GET /test/{page}` - One page of questions with progress
//! - `POST /test/{page}` - Store that page's answers and advance
//! - `GET /result` - Predict and cache trait percentages
//! - `GET /career-suggestions` - Persona for the dominant trait
//! - `GET /personal-growth` - Per-trait growth plan
//! - `GET /load-error` - Startup failure page (status 500)
//! - `GET /healthz` - Liveness and artifact status
//!
//! While the question list is unavailable, every business route
//! redirects to `/load-error` instead of erroring.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod sessions;
pub mod state;

pub use config::*;
pub use routes::*;
pub use server::*;
pub use state::*;
