//! The remedy endpoint: validate the query term, run it through the
//! completion provider, and relay the model's JSON answer.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::prompt::build_remedy_prompt;
use crate::startup::AppState;

/// Query params for the remedy endpoint.
#[derive(Debug, Deserialize)]
pub struct RemedyQuery {
    pub diagnosis: Option<String>,
}

/// Handle a remedy lookup.
///
/// The success body is whatever JSON document the model produced; the only
/// structural check performed here is that it parses.
pub async fn remedy(
    State(state): State<AppState>,
    Query(query): Query<RemedyQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let diagnosis = query
        .diagnosis
        .as_deref()
        .filter(|term| !term.is_empty())
        .ok_or(AppError::BadRequest)?;

    let prompt = build_remedy_prompt(diagnosis);

    tracing::info!(diagnosis = %diagnosis, "Requesting remedies from completion provider");

    let completion = state.provider.complete(&prompt).await?;

    let content = completion.first_content().ok_or(AppError::EmptyCompletion)?;
    let body: serde_json::Value = serde_json::from_str(content)?;

    Ok(Json(body))
}
