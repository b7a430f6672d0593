use super::ApiState;
use crate::types::{FeedEnvelope, FeedEvent};
use axum::extract::ws::{Message, WebSocket};
use axum::{
    extract::{Query, State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const VALID_CHANNELS: [&str; 4] = ["alerts", "trades", "wallet", "all"];

#[derive(Debug, Deserialize)]
pub struct WebSocketQuery {
    pub channels: Option<String>, // 逗号分隔，例如 alerts:PEPE,trades
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WebSocketMessage {
    pub r#type: String,
    pub data: serde_json::Value,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscribeMessage {
    pub action: String, // "subscribe" or "unsubscribe"
    pub subscriptions: Vec<SubscriptionChannel>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionChannel {
    pub channel: String,              // "alerts", "trades", "wallet", "all"
    pub token_symbol: Option<String>, // 为空表示该频道下所有代币
}

/// 序列化并广播一条事件，返回收到的订阅者数量
pub fn publish(sender: &broadcast::Sender<String>, event: FeedEvent) -> usize {
    let event_type = event.event_type();
    match serde_json::to_string(&FeedEnvelope::new(event)) {
        Ok(message) => sender.send(message).unwrap_or(0),
        Err(e) => {
            warn!("事件序列化失败 {}: {}", event_type, e);
            0
        }
    }
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<WebSocketQuery>,
    State(state): State<ApiState>,
) -> impl IntoResponse {
    let initial_subscriptions = parse_initial_channels(params.channels);

    ws.on_upgrade(move |socket| handle_websocket(socket, state, initial_subscriptions))
}

async fn handle_websocket(
    socket: WebSocket,
    state: ApiState,
    initial_subscriptions: Vec<SubscriptionChannel>,
) {
    let (mut sender, mut receiver) = socket.split();
    let mut event_receiver = state.event_sender.subscribe();

    let subscriptions = Arc::new(Mutex::new(
        initial_subscriptions.into_iter().collect::<HashSet<_>>(),
    ));

    let welcome_msg = WebSocketMessage {
        r#type: "connected".to_string(),
        data: serde_json::json!({
            "message": "WebSocket connected successfully",
            "subscriptions": subscriptions.lock().await.iter().cloned().collect::<Vec<_>>()
        }),
        timestamp: chrono::Utc::now(),
    };

    if let Ok(msg) = serde_json::to_string(&welcome_msg) {
        let _ = sender.send(Message::Text(msg)).await;
    }

    let sender_subscriptions = Arc::clone(&subscriptions);
    let sender_task = tokio::spawn(async move {
        loop {
            let event = match event_receiver.recv().await {
                Ok(event) => event,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("WebSocket 客户端落后，跳过 {} 条事件", skipped);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            };

            let Ok(event_data) = serde_json::from_str::<serde_json::Value>(&event) else {
                continue;
            };
            let Some(event_type) = event_data.get("type").and_then(|t| t.as_str()) else {
                continue;
            };

            let token_symbol = event_data
                .get("data")
                .and_then(|d| d.get("token_symbol"))
                .and_then(|s| s.as_str());

            let should_send = sender_subscriptions
                .lock()
                .await
                .iter()
                .any(|subscription| matches_subscription(subscription, event_type, token_symbol));

            if should_send && sender.send(Message::Text(event)).await.is_err() {
                break;
            }
        }
    });

    let receiver_subscriptions = Arc::clone(&subscriptions);
    let receiver_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    let Ok(subscribe_msg) = serde_json::from_str::<SubscribeMessage>(&text) else {
                        debug!("忽略无法解析的 WebSocket 消息");
                        continue;
                    };
                    let mut subs = receiver_subscriptions.lock().await;

                    match subscribe_msg.action.as_str() {
                        "subscribe" => {
                            for subscription in subscribe_msg.subscriptions {
                                let subscription = normalize(subscription);
                                if is_valid_subscription(&subscription) {
                                    subs.insert(subscription);
                                }
                            }
                        }
                        "unsubscribe" => {
                            for subscription in subscribe_msg.subscriptions {
                                subs.remove(&normalize(subscription));
                            }
                        }
                        other => debug!("未知的订阅动作: {}", other),
                    }
                }
                Ok(Message::Close(_)) => break,
                Err(_) => break,
                _ => {}
            }
        }
    });

    join_first(sender_task, receiver_task).await;
    debug!("WebSocket 连接结束");
}

// 任一方向结束就中止另一个任务，释放它持有的广播订阅
async fn join_first(mut sender_task: JoinHandle<()>, mut receiver_task: JoinHandle<()>) {
    tokio::select! {
        _ = &mut sender_task => receiver_task.abort(),
        _ = &mut receiver_task => sender_task.abort(),
    }
}

fn normalize(subscription: SubscriptionChannel) -> SubscriptionChannel {
    SubscriptionChannel {
        channel: subscription.channel.trim().to_lowercase(),
        token_symbol: subscription
            .token_symbol
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty()),
    }
}

// 格式：channel[:SYMBOL]，例如 alerts:PEPE,trades；不传时订阅全部
fn parse_initial_channels(channels: Option<String>) -> Vec<SubscriptionChannel> {
    let Some(channels_str) = channels else {
        return vec![SubscriptionChannel {
            channel: "all".to_string(),
            token_symbol: None,
        }];
    };

    channels_str
        .split(',')
        .filter_map(|channel| {
            let mut parts = channel.trim().splitn(2, ':');
            let name = parts.next()?.to_string();
            let token_symbol = parts.next().map(|s| s.to_string());
            let subscription = normalize(SubscriptionChannel {
                channel: name,
                token_symbol,
            });
            is_valid_subscription(&subscription).then_some(subscription)
        })
        .collect()
}

fn matches_subscription(
    subscription: &SubscriptionChannel,
    event_type: &str,
    token_symbol: Option<&str>,
) -> bool {
    let event_category = get_event_category(event_type);
    if subscription.channel != event_category && subscription.channel != "all" {
        return false;
    }

    match (&subscription.token_symbol, token_symbol) {
        (Some(sub_symbol), Some(event_symbol)) => sub_symbol.eq_ignore_ascii_case(event_symbol),
        (None, _) => true,
        // 钱包事件没有代币
        (Some(_), None) => false,
    }
}

fn get_event_category(event_type: &str) -> &'static str {
    match event_type {
        "new_alert" => "alerts",
        "trade_confirmed" => "trades",
        "wallet_connected" | "wallet_disconnected" => "wallet",
        _ => "general",
    }
}

fn is_valid_subscription(subscription: &SubscriptionChannel) -> bool {
    if !VALID_CHANNELS.contains(&subscription.channel.as_str()) {
        return false;
    }

    if let Some(ref symbol) = subscription.token_symbol {
        if symbol.len() > 16 || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return false;
        }
    }

    true
}
