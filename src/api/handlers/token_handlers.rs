use super::super::ApiState;
use super::{ApiResponse, HandlerResult};
use crate::types::format::{format_change, format_currency, format_price};
use crate::types::*;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TokenSearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub timeframe: Option<Timeframe>, // 1h / 24h / 7d，也接受 short / medium / long
}

/// 资料加上展示用字段
#[derive(Debug, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: TokenProfile,
    pub direction: ChangeDirection,
    pub price_display: String,
    pub change_24h_display: String,
    pub volume_display: String,
    pub liquidity_display: String,
    pub fdv_display: String,
}

impl From<TokenProfile> for ProfileView {
    fn from(profile: TokenProfile) -> Self {
        Self {
            direction: profile.direction_24h(),
            price_display: format!("${}", format_price(profile.price)),
            change_24h_display: format_change(profile.price_change.h24),
            volume_display: format_currency(profile.volume),
            liquidity_display: format_currency(profile.liquidity),
            fdv_display: format_currency(profile.fdv),
            profile,
        }
    }
}

// Token相关handlers
pub async fn search_tokens(
    Query(params): Query<TokenSearchQuery>,
    State(state): State<ApiState>,
) -> HandlerResult {
    Ok(ApiResponse::success(state.service.search_tokens(&params.q).await))
}

pub async fn get_token_profile(
    Path(symbol): Path<String>,
    State(state): State<ApiState>,
) -> HandlerResult {
    let profile = state.service.resolve_profile(&symbol).await?;
    Ok(ApiResponse::success(ProfileView::from(profile)))
}

pub async fn get_token_chart(
    Path(symbol): Path<String>,
    Query(params): Query<ChartQuery>,
    State(state): State<ApiState>,
) -> HandlerResult {
    let timeframe = params.timeframe.unwrap_or_default();
    let points = state.service.chart_for_symbol(&symbol, timeframe).await?;
    Ok(ApiResponse::success(points))
}

pub async fn get_pair_chart(
    Path(pair_address): Path<String>,
    Query(params): Query<ChartQuery>,
    State(state): State<ApiState>,
) -> HandlerResult {
    let timeframe = params.timeframe.unwrap_or_default();
    Ok(ApiResponse::success(
        state.service.chart_series(&pair_address, timeframe).await,
    ))
}

pub async fn get_pair_trades(
    Path(pair_address): Path<String>,
    State(state): State<ApiState>,
) -> HandlerResult {
    Ok(ApiResponse::success(
        state.service.recent_trades(&pair_address).await,
    ))
}
