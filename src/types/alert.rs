use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertAction {
    Bought,
    Sold,
    Minted,
}

impl AlertAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertAction::Bought => "Bought",
            AlertAction::Sold => "Sold",
            AlertAction::Minted => "Minted",
        }
    }
}

/// 涨跌方向，所有带涨跌幅的数据统一用这一个判断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeDirection {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            ChangeDirection::Up
        } else {
            ChangeDirection::Down
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAlert {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
    pub action: AlertAction,
    pub token_symbol: String,
    pub token_logo: String,
    pub amount: String,
    pub value: String,
    pub tx_hash: String,
    pub timestamp: String,
    pub dex_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistToken {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub logo: String,
    pub price: String,
    pub change_24h: f64,
    pub volume: String,
}

impl WatchlistToken {
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::from_change(self.change_24h)
    }
}

/// 列表接口返回的行：原始数据加上方向
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistRow {
    #[serde(flatten)]
    pub token: WatchlistToken,
    pub direction: ChangeDirection,
}

impl From<&WatchlistToken> for WatchlistRow {
    fn from(token: &WatchlistToken) -> Self {
        Self {
            token: token.clone(),
            direction: token.direction(),
        }
    }
}
