use super::super::ApiState;
use super::{ApiResponse, HandlerResult};
use axum::extract::State;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub version: &'static str,
    pub live_market_data: bool,
    pub wallet_connected: bool,
    pub open_views: usize,
    pub alert_count: usize,
    pub subscribers: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

pub async fn get_status(State(state): State<ApiState>) -> HandlerResult {
    Ok(ApiResponse::success(ServiceStatus {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        live_market_data: state.service.live_market_data(),
        wallet_connected: state.wallet.read().await.is_some(),
        open_views: state.views.len().await,
        alert_count: state.repository.list_alerts().len(),
        subscribers: state.event_sender.receiver_count(),
        timestamp: chrono::Utc::now(),
    }))
}
