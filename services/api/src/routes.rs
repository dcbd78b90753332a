use crate::infra::AppState;
use crate::render;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Json, Router};
use eoi_calculator::scoring::{AnswerDraft, ScoreCalculator};
use serde_json::json;
use tracing::{debug, info};

/// Calculator form plus operational endpoints.
///
/// `/ready` and `/metrics` expect an `Extension<AppState>` layered on by the server.
pub fn build_router(calculator: ScoreCalculator) -> Router {
    Router::new()
        .route("/", get(form_page).post(submit_form))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(calculator)
}

pub(crate) async fn form_page() -> Html<String> {
    Html(render::form_page(&AnswerDraft::default(), None, None))
}

pub(crate) async fn submit_form(
    State(calculator): State<ScoreCalculator>,
    Form(draft): Form<AnswerDraft>,
) -> Response {
    match calculator.assess(&draft) {
        Ok(assessment) => {
            info!(
                total = assessment.total(),
                tier = assessment.tier.label(),
                "form submission scored"
            );
            Html(render::form_page(&draft, Some(&assessment), None)).into_response()
        }
        Err(error) => {
            debug!(question = error.question().key(), %error, "form submission rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::form_page(&draft, None, Some(&error))),
            )
                .into_response()
        }
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
