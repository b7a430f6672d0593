use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::TradeAlert;

/// 交易员主页汇总
#[derive(Debug, Clone, Serialize)]
pub struct TraderSummary {
    pub username: String,
    pub avatar_url: String,
    pub trades: Vec<TradeAlert>,
    pub bought_count: usize,
    pub sold_count: usize,
    pub minted_count: usize,
    pub most_recent_token: Option<String>,
    pub last_active: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendProfile {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub followers: u64,
    pub is_following: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFrequency {
    #[default]
    Instant,
    Hourly,
    Daily,
}

impl FromStr for NotificationFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instant" => Ok(NotificationFrequency::Instant),
            "hourly" => Ok(NotificationFrequency::Hourly),
            "daily" => Ok(NotificationFrequency::Daily),
            other => Err(format!("unknown notification frequency '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowedUser {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub enabled: bool,
}

// large_trades_only 和 frequency 只做保存和回显，目前没有任何过滤逻辑使用它们
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub trade_alerts: bool,
    pub large_trades_only: bool,
    pub frequency: NotificationFrequency,
    pub followed_users: Vec<FollowedUser>,
}
