use super::super::ApiState;
use super::{ApiResponse, HandlerResult};
use crate::types::*;
use axum::{extract::State, Json};

pub async fn confirm_trade(
    State(state): State<ApiState>,
    Json(request): Json<TradeRequest>,
) -> HandlerResult {
    request.validate()?;
    let result = state.service.submit_trade(&request).await;
    Ok(ApiResponse::success(result))
}
