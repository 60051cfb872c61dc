use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::client::CareHttpClient;
use super::error::CareClientError;
use super::query::{DistributionQuery, ProgressionQuery};
use super::transport::HttpTransport;
use crate::config::SystemConfiguration;

/// Router exposing the CaRe queries to API consumers.
pub fn insight_router<S, T>(client: Arc<CareHttpClient<S, T>>) -> Router
where
    S: SystemConfiguration + 'static,
    T: HttpTransport + 'static,
{
    Router::new()
        .route(
            "/api/v1/insights/distribution",
            post(distribution_handler::<S, T>),
        )
        .route(
            "/api/v1/insights/progression",
            post(progression_handler::<S, T>),
        )
        .with_state(client)
}

pub(crate) async fn distribution_handler<S, T>(
    State(client): State<Arc<CareHttpClient<S, T>>>,
    Json(query): Json<DistributionQuery>,
) -> Response
where
    S: SystemConfiguration + 'static,
    T: HttpTransport + 'static,
{
    match client.get_stats(&query).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn progression_handler<S, T>(
    State(client): State<Arc<CareHttpClient<S, T>>>,
    Json(criteria): Json<ProgressionQuery>,
) -> Response
where
    S: SystemConfiguration + 'static,
    T: HttpTransport + 'static,
{
    match client.get_progression(&criteria).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => err.into_response(),
    }
}

impl CareClientError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CareClientError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CareClientError::NotFound { .. } => StatusCode::NOT_FOUND,
            CareClientError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            CareClientError::Decode { .. } => StatusCode::BAD_GATEWAY,
            CareClientError::Configuration { .. } | CareClientError::Encode { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CareClientError {
    fn into_response(self) -> Response {
        let mut payload = json!({ "error": self.to_string() });
        if let CareClientError::Validation { field, .. } = &self {
            payload["field"] = json!(field);
        }
        (self.status_code(), Json(payload)).into_response()
    }
}
