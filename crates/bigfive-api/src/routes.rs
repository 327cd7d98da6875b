//! Route table, the question-store gate, and the request timeout.

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};

use crate::handlers::{self, ErrorBody};
use crate::state::SharedState;

/// Redirects every business route to the error page while the
/// question list is unavailable. `/load-error` and `/healthz` are
/// registered outside this gate.
pub async fn require_questions(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.questions_loaded() {
        return Redirect::to("/load-error").into_response();
    }
    next.run(request).await
}

/// Build the complete application router.
pub fn build_router(state: SharedState) -> Router {
    let timeout = Duration::from_secs(state.config.http.timeout_secs);
    let gated = Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/how-it-works", get(handlers::how_it_works))
        .route("/test/start", get(handlers::start_test))
        .route(
            "/test/:page",
            get(handlers::test_page).post(handlers::submit_page),
        )
        .route("/result", get(handlers::show_result))
        .route("/career-suggestions", get(handlers::career_suggestions))
        .route("/personal-growth", get(handlers::personal_growth))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_questions,
        ));

    let router = Router::new()
        .merge(gated)
        .route("/load-error", get(handlers::load_error))
        .route("/healthz", get(handlers::healthz))
        .with_state(state);

    with_timeout(router, timeout)
}

/// Bound every request by the configured timeout. The timeout service
/// is fallible, so its error is mapped back to a JSON response here.
fn with_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorBody {
                error: "request timed out".to_string(),
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response()
    }
}
