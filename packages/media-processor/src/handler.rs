use std::collections::HashMap;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::AppState;
use crate::outcome::{Failure, TransformOutcome};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// `GET /resize`
///
/// クエリが空の場合は「クエリなし」として扱う
pub async fn resize(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> TransformOutcome {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::error!(error = %rejection, "failed to parse query string");
            return Failure::internal().into();
        }
    };

    let params = (!params.is_empty()).then_some(&params);
    state.orchestrator.respond(params).await
}
