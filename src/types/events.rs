use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TradeAlert, TradeConfirmationResult};

/// WebSocket 推送的事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum FeedEvent {
    NewAlert(TradeAlert),
    TradeConfirmed(TradeConfirmationResult),
    WalletConnected { address: String },
    WalletDisconnected { address: String },
}

impl FeedEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            FeedEvent::NewAlert(_) => "new_alert",
            FeedEvent::TradeConfirmed(_) => "trade_confirmed",
            FeedEvent::WalletConnected { .. } => "wallet_connected",
            FeedEvent::WalletDisconnected { .. } => "wallet_disconnected",
        }
    }

    pub fn token_symbol(&self) -> Option<&str> {
        match self {
            FeedEvent::NewAlert(alert) => Some(&alert.token_symbol),
            FeedEvent::TradeConfirmed(result) => Some(&result.token_symbol),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEnvelope {
    #[serde(flatten)]
    pub event: FeedEvent,
    pub timestamp: DateTime<Utc>,
}

impl FeedEnvelope {
    pub fn new(event: FeedEvent) -> Self {
        Self {
            event,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let envelope = FeedEnvelope::new(FeedEvent::WalletConnected {
            address: "0xabc".to_string(),
        });
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["type"], "wallet_connected");
        assert_eq!(value["data"]["address"], "0xabc");
        assert!(value.get("timestamp").is_some());
    }
}
