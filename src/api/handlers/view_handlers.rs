use super::super::ApiState;
use super::{ApiResponse, HandlerResult};
use crate::error::SignalsError;
use crate::types::*;
use crate::view::{CoinDetailView, DetailTab, TradeDialog, ViewHandle, ViewSnapshot};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct OpenCoinDetailRequest {
    pub symbol: String,
    #[serde(default)]
    pub show_trade_point: bool,
}

#[derive(Debug, Deserialize)]
pub struct OpenTradeRequest {
    pub token_symbol: String,
    pub action: TradeAction,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: DetailTab,
}

#[derive(Debug, Deserialize)]
pub struct TimeframeRequest {
    pub timeframe: Timeframe,
}

#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub id: Uuid,
    pub view: ViewSnapshot,
}

async fn respond(id: Uuid, view: &ViewHandle) -> HandlerResult {
    Ok(ApiResponse::success(ViewResponse {
        id,
        view: view.snapshot().await,
    }))
}

async fn lookup(state: &ApiState, id: &str) -> Result<(Uuid, Arc<ViewHandle>), SignalsError> {
    let id = Uuid::parse_str(id)
        .map_err(|_| SignalsError::InvalidInput(format!("invalid view id '{}'", id)))?;
    let view = state.views.get(&id).await?;
    Ok((id, view))
}

// 弹窗相关handlers
pub async fn open_coin_detail(
    State(state): State<ApiState>,
    Json(request): Json<OpenCoinDetailRequest>,
) -> HandlerResult {
    if request.symbol.trim().is_empty() {
        return Err(SignalsError::InvalidInput("symbol is required".to_string()));
    }
    let view = CoinDetailView::open(
        Arc::clone(&state.service),
        &request.symbol,
        request.show_trade_point,
    );
    let id = state.views.insert(ViewHandle::CoinDetail(view)).await?;
    let view = state.views.get(&id).await?;
    respond(id, &view).await
}

pub async fn open_trade_dialog(
    State(state): State<ApiState>,
    Json(request): Json<OpenTradeRequest>,
) -> HandlerResult {
    if request.token_symbol.trim().is_empty() {
        return Err(SignalsError::InvalidInput("token symbol is required".to_string()));
    }
    let dialog = TradeDialog::open(
        Arc::clone(&state.service),
        &request.token_symbol,
        request.action,
    );
    let id = state.views.insert(ViewHandle::Trade(dialog)).await?;
    let view = state.views.get(&id).await?;
    respond(id, &view).await
}

pub async fn get_view(Path(id): Path<String>, State(state): State<ApiState>) -> HandlerResult {
    let (id, view) = lookup(&state, &id).await?;
    respond(id, &view).await
}

pub async fn close_view(Path(id): Path<String>, State(state): State<ApiState>) -> HandlerResult {
    let (id, _) = lookup(&state, &id).await?;
    let snapshot = state.views.remove(&id).await?;
    Ok(ApiResponse::success(ViewResponse { id, view: snapshot }))
}

pub async fn select_view_tab(
    Path(id): Path<String>,
    State(state): State<ApiState>,
    Json(request): Json<TabRequest>,
) -> HandlerResult {
    let (id, view) = lookup(&state, &id).await?;
    view.as_coin_detail()?.select_tab(request.tab).await?;
    respond(id, &view).await
}

pub async fn set_view_timeframe(
    Path(id): Path<String>,
    State(state): State<ApiState>,
    Json(request): Json<TimeframeRequest>,
) -> HandlerResult {
    let (id, view) = lookup(&state, &id).await?;
    view.as_coin_detail()?.set_timeframe(request.timeframe).await?;
    respond(id, &view).await
}

pub async fn retry_view(Path(id): Path<String>, State(state): State<ApiState>) -> HandlerResult {
    let (id, view) = lookup(&state, &id).await?;
    view.as_coin_detail()?.retry().await?;
    respond(id, &view).await
}

pub async fn dismiss_view(Path(id): Path<String>, State(state): State<ApiState>) -> HandlerResult {
    let (id, view) = lookup(&state, &id).await?;
    view.as_coin_detail()?.dismiss().await?;
    // 出错后关闭的弹窗不再保留
    let snapshot = state.views.remove(&id).await?;
    Ok(ApiResponse::success(ViewResponse { id, view: snapshot }))
}

pub async fn set_trade_amount(
    Path(id): Path<String>,
    State(state): State<ApiState>,
    Json(request): Json<AmountRequest>,
) -> HandlerResult {
    let (id, view) = lookup(&state, &id).await?;
    view.as_trade()?.set_amount(&request.amount).await?;
    respond(id, &view).await
}

pub async fn submit_trade_dialog(
    Path(id): Path<String>,
    State(state): State<ApiState>,
) -> HandlerResult {
    let (id, view) = lookup(&state, &id).await?;
    view.as_trade()?.submit().await?;
    respond(id, &view).await
}
