use super::super::{websocket::publish, ApiState};
use super::{ApiResponse, HandlerResult};
use crate::error::SignalsError;
use crate::types::FeedEvent;
use axum::extract::State;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WalletStatus {
    pub connected: bool,
    pub provider_available: bool,
    pub session: Option<crate::wallet::WalletSession>,
}

// 钱包相关handlers
pub async fn get_wallet(State(state): State<ApiState>) -> HandlerResult {
    let session = state.wallet.read().await.clone();
    Ok(ApiResponse::success(WalletStatus {
        connected: session.is_some(),
        provider_available: state.wallet_connector.has_provider(),
        session,
    }))
}

pub async fn connect_wallet(State(state): State<ApiState>) -> HandlerResult {
    // 整个连接过程持有写锁，并发请求只会连接一次
    let mut wallet = state.wallet.write().await;
    if let Some(session) = wallet.as_ref() {
        return Ok(ApiResponse::success(session.clone()));
    }

    let session = state.wallet_connector.connect().await?;
    *wallet = Some(session.clone());
    drop(wallet);

    publish(
        &state.event_sender,
        FeedEvent::WalletConnected {
            address: session.address.clone(),
        },
    );
    Ok(ApiResponse::success(session))
}

pub async fn disconnect_wallet(State(state): State<ApiState>) -> HandlerResult {
    let session = state
        .wallet
        .write()
        .await
        .take()
        .ok_or_else(|| SignalsError::NotFound("no wallet connected".to_string()))?;

    let address = session.disconnect();
    publish(
        &state.event_sender,
        FeedEvent::WalletDisconnected {
            address: address.clone(),
        },
    );
    Ok(ApiResponse::success(serde_json::json!({ "address": address })))
}
