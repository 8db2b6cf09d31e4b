use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::accounts::{AuthOutcome, LOGIN_FAILURE_MESSAGE};
use crate::advisor::StyleAdvisor;
use crate::catalog::{InvalidInput, MatchOutcome, OutfitRecord, PreferenceForm, SUPPORTED_THEMES};
use crate::error::AppError;

/// Router builder exposing sign-in and recommendation endpoints.
pub fn style_router(advisor: Arc<StyleAdvisor>) -> Router {
    Router::new()
        .route("/api/v1/signin", post(signin_handler))
        .route("/api/v1/recommendations", post(recommendations_handler))
        .route("/api/v1/themes", get(themes_handler))
        .with_state(advisor)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub outfits: Vec<OutfitRecord>,
}

impl From<MatchOutcome> for RecommendationResponse {
    fn from(outcome: MatchOutcome) -> Self {
        Self {
            status: outcome.label(),
            error: outcome.condition(),
            outfits: outcome.into_records(),
        }
    }
}

/// Table reads are blocking file IO; keep them off the async workers.
async fn off_runtime<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await?)
}

pub(crate) async fn signin_handler(
    State(advisor): State<Arc<StyleAdvisor>>,
    request: Result<Json<SignInRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            info!(error = %rejection.body_text(), "sign-in request rejected");
            let payload = json!({
                "authenticated": false,
                "message": LOGIN_FAILURE_MESSAGE,
                "error": rejection.body_text(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let outcome =
        match off_runtime(move || advisor.sign_in(&request.username, &request.password)).await {
            Ok(outcome) => outcome,
            Err(err) => return err.into_response(),
        };
    let message = outcome.message();

    match outcome {
        AuthOutcome::Authenticated { username } => {
            let payload = json!({
                "authenticated": true,
                "username": username,
                "message": message,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        AuthOutcome::Rejected => {
            let payload = json!({
                "authenticated": false,
                "message": message,
            });
            (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
        }
        AuthOutcome::DataUnavailable(err) => {
            let payload = json!({
                "authenticated": false,
                "message": message,
                "error": err.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn recommendations_handler(
    State(advisor): State<Arc<StyleAdvisor>>,
    form: Result<Json<PreferenceForm>, JsonRejection>,
) -> Response {
    let outcome = match form {
        Ok(Json(form)) => match off_runtime(move || advisor.recommend(&form)).await {
            Ok(outcome) => outcome,
            Err(err) => return err.into_response(),
        },
        Err(rejection) => {
            info!(error = %rejection.body_text(), "outfit query rejected");
            MatchOutcome::InvalidInput(InvalidInput::MalformedBody(rejection.body_text()))
        }
    };

    let status = match &outcome {
        MatchOutcome::Matched(_) | MatchOutcome::NoMatch => StatusCode::OK,
        MatchOutcome::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        MatchOutcome::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(RecommendationResponse::from(outcome))).into_response()
}

pub(crate) async fn themes_handler() -> Json<serde_json::Value> {
    Json(json!({ "themes": SUPPORTED_THEMES }))
}
