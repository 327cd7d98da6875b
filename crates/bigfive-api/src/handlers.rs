//! Request handlers.
//!
//! Thin orchestration over the core components: pagination, redirects
//! to canonical safe states when prerequisite session data is missing,
//! and error fallbacks. Templating is not a concern here; handlers
//! return JSON payloads.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Serialize;

use bigfive_content::{growth_plan, resolve_persona};
use bigfive_core::{Error, Question, SessionId, TraitScores};

use crate::sessions::{session_cookie_value, session_id_from_headers};
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct PageContent {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub page: usize,
    pub total_pages: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct ScorePair {
    pub trait_name: &'static str,
    pub percentage: f64,
}

impl ScorePair {
    fn all(scores: &TraitScores) -> Vec<ScorePair> {
        scores
            .pairs()
            .into_iter()
            .map(|(t, percentage)| ScorePair {
                trait_name: t.name(),
                percentage,
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ResultPayload {
    pub results: Vec<ScorePair>,
    pub dominant: ScorePair,
}

#[derive(Debug, Serialize)]
pub struct PersonaPayload {
    pub title: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
    pub scores: Vec<ScorePair>,
}

#[derive(Debug, Serialize)]
pub struct GrowthItem {
    pub trait_name: &'static str,
    pub score: f64,
    pub level: &'static str,
    pub level_key: &'static str,
    pub tip: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GrowthPayload {
    pub entries: Vec<GrowthItem>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub questions_loaded: bool,
    pub question_count: usize,
    pub model_loaded: bool,
}

fn server_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { error: message }),
    )
        .into_response()
}

/// Session id from the cookie, only when the store still knows it.
fn live_session_id(state: &SharedState, headers: &HeaderMap) -> Option<SessionId> {
    session_id_from_headers(headers).filter(|id| state.sessions.contains(*id))
}

// --- Static page routes ---

pub async fn index() -> Json<PageContent> {
    Json(PageContent {
        title: "Big Five Personality Test",
        body: "Answer 50 short questions and get a data-driven read on your five \
               personality dimensions, plus career suggestions and growth tips.",
    })
}

pub async fn about() -> Json<PageContent> {
    Json(PageContent {
        title: "About",
        body: "This assessment is built on the Big Five model, the most widely \
               validated framework in personality psychology.",
    })
}

pub async fn how_it_works() -> Json<PageContent> {
    Json(PageContent {
        title: "How It Works",
        body: "Your answers are encoded into a fixed-order feature vector and scored \
               by a regression model trained on a large public Big Five dataset. \
               Percentages reflect where the model places you on each dimension.",
    })
}

// --- Test-taking routes ---

pub async fn start_test(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let id = match live_session_id(&state, &headers) {
        Some(id) => {
            state.sessions.reset(id);
            id
        }
        None => state.sessions.create(),
    };
    tracing::debug!(session = %id, "test started");

    let mut response = Redirect::to("/test/1").into_response();
    if let Ok(cookie) = HeaderValue::from_str(&session_cookie_value(id)) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

pub async fn test_page(State(state): State<SharedState>, Path(page): Path<usize>) -> Response {
    let per_page = state.config.quiz.questions_per_page;
    match state.questions.page(page, per_page) {
        Some(questions) => Json(QuestionPage {
            page,
            total_pages: state.total_pages(),
            questions: questions.to_vec(),
        })
        .into_response(),
        None => Redirect::to("/test/start").into_response(),
    }
}

pub async fn submit_page(
    State(state): State<SharedState>,
    Path(page): Path<usize>,
    headers: HeaderMap,
    Form(form): Form<BTreeMap<String, String>>,
) -> Response {
    let per_page = state.config.quiz.questions_per_page;
    let total_pages = state.total_pages();

    let Some(questions) = state.questions.page(page, per_page) else {
        return Redirect::to("/test/start").into_response();
    };
    let Some(id) = live_session_id(&state, &headers) else {
        return Redirect::to("/test/start").into_response();
    };

    // Only answers for this page's questions are accepted; anything
    // else in the form is ignored. Values are validated here, so the
    // session stores them directly.
    let mut parsed: Vec<(String, u8)> = Vec::new();
    for question in questions {
        if let Some(raw) = form.get(&question.id) {
            match raw.trim().parse::<i64>() {
                Ok(value) if (1..=5).contains(&value) => {
                    parsed.push((question.id.clone(), value as u8))
                }
                _ => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorBody {
                            error: format!(
                                "invalid response '{raw}' for question {}",
                                question.id
                            ),
                        }),
                    )
                        .into_response();
                }
            }
        }
    }

    state.sessions.update(id, |session| {
        for (question_id, value) in parsed {
            session.answers.insert(question_id, value);
        }
    });

    if page < total_pages {
        Redirect::to(&format!("/test/{}", page + 1)).into_response()
    } else {
        Redirect::to("/result").into_response()
    }
}

// --- Result routes ---

pub async fn show_result(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let Some(id) = live_session_id(&state, &headers) else {
        return Redirect::to("/test/start").into_response();
    };
    let Some(session) = state.sessions.get(id) else {
        return Redirect::to("/test/start").into_response();
    };

    if !session.is_complete(&state.questions) {
        tracing::debug!(
            answers = session.answer_count(),
            required = state.questions.len(),
            "incomplete session at /result"
        );
        return Redirect::to("/test/start").into_response();
    }

    // Scores are computed once per completed session and reused.
    if let Some(scores) = session.results {
        return result_payload(&scores);
    }

    let Some(predictor) = state.predictor.as_ref() else {
        tracing::error!("prediction requested but the model is not loaded");
        return server_error(Error::ModelUnavailable.to_string());
    };

    let features = match state.vectorizer.vectorize(&session.answers) {
        Ok(features) => features,
        Err(e @ Error::MissingAnswer { .. }) => {
            return server_error(format!("{e}. Please retake the test."));
        }
        Err(e) => return server_error(e.to_string()),
    };

    // A failed inference leaves the session untouched so the visitor
    // can simply retry.
    let scores = match predictor.predict(&features) {
        Ok(scores) => scores,
        Err(e) => {
            tracing::error!(error = %e, "prediction failed");
            return server_error(e.to_string());
        }
    };

    state.sessions.update(id, |session| {
        session.results = Some(scores);
    });

    result_payload(&scores)
}

fn result_payload(scores: &TraitScores) -> Response {
    let (dominant, dominant_score) = scores.dominant();
    Json(ResultPayload {
        results: ScorePair::all(scores),
        dominant: ScorePair {
            trait_name: dominant.name(),
            percentage: dominant_score,
        },
    })
    .into_response()
}

/// Cached trait scores for the visitor, or None before `/result`.
fn cached_results(state: &SharedState, headers: &HeaderMap) -> Option<TraitScores> {
    let id = live_session_id(state, headers)?;
    state.sessions.get(id)?.results
}

pub async fn career_suggestions(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Response {
    let Some(scores) = cached_results(&state, &headers) else {
        return Redirect::to("/").into_response();
    };

    let persona = resolve_persona(&scores);
    Json(PersonaPayload {
        title: persona.title,
        description: persona.description,
        careers: persona.careers,
        scores: ScorePair::all(&scores),
    })
    .into_response()
}

pub async fn personal_growth(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let Some(scores) = cached_results(&state, &headers) else {
        return Redirect::to("/").into_response();
    };

    let entries = growth_plan(&scores)
        .into_iter()
        .map(|entry| GrowthItem {
            trait_name: entry.trait_name.name(),
            score: entry.score,
            level: entry.band.label(),
            level_key: entry.band.key(),
            tip: entry.tip,
        })
        .collect();

    Json(GrowthPayload { entries }).into_response()
}

// --- Error and health routes ---

pub async fn load_error(State(state): State<SharedState>) -> Response {
    let message = state
        .question_load_error
        .clone()
        .unwrap_or_else(|| "the question list could not be loaded".to_string());
    server_error(message)
}

pub async fn healthz(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        questions_loaded: state.questions_loaded(),
        question_count: state.questions.len(),
        model_loaded: state.predictor.is_some(),
    })
}
