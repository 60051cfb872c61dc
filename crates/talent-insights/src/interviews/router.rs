use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use uuid::Uuid;

use super::commands::{CommandError, InterviewCreateCommand};
use super::domain::InterviewId;
use super::repository::{InterviewRepository, RepositoryError};
use super::service::{InterviewService, InterviewServiceError};

/// Header naming the caller recorded in audit fields.
pub const ACTOR_HEADER: &str = "x-actor";

/// Router builder exposing HTTP endpoints for interview intake.
pub fn interview_router<R>(service: Arc<InterviewService<R>>) -> Router
where
    R: InterviewRepository + 'static,
{
    Router::new()
        .route("/api/v1/interviews", post(create_handler::<R>))
        .route("/api/v1/interviews/:interview_id", get(fetch_handler::<R>))
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    headers: HeaderMap,
    axum::Json(command): axum::Json<InterviewCreateCommand>,
) -> Response
where
    R: InterviewRepository + 'static,
{
    let actor = headers
        .get(ACTOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .unwrap_or("system");

    match service.create(command, actor) {
        Ok(interview) => (StatusCode::CREATED, axum::Json(interview)).into_response(),
        Err(InterviewServiceError::Command(error)) => {
            let mut payload = json!({ "error": error.to_string() });
            if let CommandError::InvalidArgument {
                argument, actual, ..
            } = &error
            {
                payload["argument"] = json!(argument);
                payload["actual"] = json!(actual);
            }
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(InterviewServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "interview already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(interview_id): Path<Uuid>,
) -> Response
where
    R: InterviewRepository + 'static,
{
    let id = InterviewId(interview_id);
    match service.get(&id) {
        Ok(interview) => (StatusCode::OK, axum::Json(interview)).into_response(),
        Err(InterviewServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "interview_id": id.to_string(),
                "error": "interview not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
