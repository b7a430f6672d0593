use super::super::ApiState;
use super::{ApiResponse, HandlerResult};
use crate::error::SignalsError;
use crate::types::*;
use axum::extract::{Path, State};

// 告警相关handlers
pub async fn list_alerts(State(state): State<ApiState>) -> HandlerResult {
    Ok(ApiResponse::success(state.repository.list_alerts()))
}

pub async fn get_alert(Path(id): Path<String>, State(state): State<ApiState>) -> HandlerResult {
    let alert = state
        .repository
        .get_alert(&id)
        .ok_or_else(|| SignalsError::NotFound(format!("alert {}", id)))?;
    Ok(ApiResponse::success(alert))
}

pub async fn list_watchlist(State(state): State<ApiState>) -> HandlerResult {
    let rows: Vec<WatchlistRow> = state
        .repository
        .list_watchlist()
        .iter()
        .map(WatchlistRow::from)
        .collect();
    Ok(ApiResponse::success(rows))
}

pub async fn list_trending(State(state): State<ApiState>) -> HandlerResult {
    Ok(ApiResponse::success(state.repository.list_trending()))
}

pub async fn get_trader(
    Path(username): Path<String>,
    State(state): State<ApiState>,
) -> HandlerResult {
    let summary = state
        .repository
        .trader_summary(&username)
        .ok_or_else(|| SignalsError::NotFound(format!("trader {}", username)))?;
    Ok(ApiResponse::success(summary))
}
