use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::ParsedIntent;
use crate::services::parser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub text: String,
}

// POST /api/llm/parse
pub async fn parse_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParsedIntent>, AppError> {
    let Json(payload) = payload?;

    parser::parse_booking_intent(state.llm.as_ref(), state.catalog.as_ref(), &payload.text)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "parse error");
            AppError::ParseFailed
        })
}
