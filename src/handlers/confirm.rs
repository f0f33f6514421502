use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::event::event_names;
use crate::models::UNKNOWN_EVENT;
use crate::services::matching::find_closest_event;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ConfirmRequest {
    pub event: String,
    pub tickets: Option<i64>,
}

#[derive(Serialize)]
pub struct ConfirmResponse {
    success: bool,
    event: String,
    tickets: u32,
    message: String,
}

// POST /api/llm/confirm
pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConfirmRequest>, JsonRejection>,
) -> Result<Json<ConfirmResponse>, AppError> {
    let Json(payload) = payload?;

    let tickets = match payload.tickets {
        None => 1,
        Some(n) if n >= 1 => u32::try_from(n)
            .map_err(|_| AppError::BadRequest(format!("too many tickets: {n}")))?,
        Some(n) => {
            return Err(AppError::BadRequest(format!(
                "tickets must be at least 1, got {n}"
            )))
        }
    };

    let events = state.catalog.list_events().await.map_err(|e| {
        tracing::error!(error = %e, "failed to load event catalog");
        AppError::Upstream("events service unavailable".to_string())
    })?;

    let names = event_names(&events);
    let resolved = if names.contains(&payload.event) {
        payload.event.clone()
    } else {
        find_closest_event(&payload.event, &names)
    };

    if resolved == UNKNOWN_EVENT {
        return Err(AppError::BadRequest(format!(
            "unknown event: {}",
            payload.event
        )));
    }

    let event_id = events
        .iter()
        .find(|e| e.name == resolved)
        .and_then(|e| e.id)
        .ok_or_else(|| AppError::BadRequest(format!("event has no id: {resolved}")))?;

    state
        .catalog
        .purchase(event_id, tickets)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, event_id, tickets, "purchase failed");
            AppError::Upstream("failed to complete purchase".to_string())
        })?;

    tracing::info!(event = %resolved, tickets, "booking confirmed");

    Ok(Json(ConfirmResponse {
        success: true,
        message: format!("Booked {tickets} ticket(s) for {resolved}."),
        event: resolved,
        tickets,
    }))
}
