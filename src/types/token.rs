use serde::{Deserialize, Serialize};

use super::ChangeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub h1: f64,
    pub h6: f64,
    pub h24: f64,
}

impl PriceChange {
    pub fn is_finite(&self) -> bool {
        self.h1.is_finite() && self.h6.is_finite() && self.h24.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenProfile {
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub chain_id: String,
    pub decimals: u8,
    pub logo_url: Option<String>,
    pub price: f64,
    pub price_change: PriceChange,
    pub volume: f64,
    pub liquidity: f64,
    pub fdv: f64,
    pub pair_address: String,
}

impl TokenProfile {
    pub fn direction_24h(&self) -> ChangeDirection {
        ChangeDirection::from_change(self.price_change.h24)
    }

    /// price > 0 且涨跌幅都是有限值
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price > 0.0 && self.price_change.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// 代币详情页里的最近成交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTrade {
    pub side: TradeSide,
    pub amount: String,
    pub amount_in_usd: String,
    pub timestamp: String,
    pub tx_hash: String,
    pub wallet_address: String,
}

/// 热门代币
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingToken {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub logo: String,
    pub price: String,
    pub change_24h: f64,
    pub volume: String,
}
