use crate::error::SignalsError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRequest {
    pub token_symbol: String,
    pub amount: String,
    pub action: TradeAction,
}

impl TradeRequest {
    /// 数量必须是正数，代币符号不能为空
    pub fn validate(&self) -> Result<(), SignalsError> {
        if self.token_symbol.trim().is_empty() {
            return Err(SignalsError::InvalidInput("token symbol is required".to_string()));
        }

        let amount = self.amount.trim();
        let value = Decimal::from_str(amount)
            .map_err(|_| SignalsError::InvalidInput(format!("invalid amount '{}'", amount)))?;
        if value <= Decimal::ZERO {
            return Err(SignalsError::InvalidInput(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// 模拟成交结果，tx_hash 是随机生成的，不对应任何真实交易
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeConfirmationResult {
    pub token_symbol: String,
    pub amount: String,
    pub action: TradeAction,
    pub success: bool,
    pub tx_hash: String,
    pub short_hash: String,
    pub explorer_url: String,
    pub confirmed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(symbol: &str, amount: &str) -> TradeRequest {
        TradeRequest {
            token_symbol: symbol.to_string(),
            amount: amount.to_string(),
            action: TradeAction::Buy,
        }
    }

    #[test]
    fn test_validate() {
        assert!(request("MONA", "100").validate().is_ok());
        assert!(request("MONA", " 0.5 ").validate().is_ok());
        assert!(request("MONA", "").validate().is_err());
        assert!(request("MONA", "0").validate().is_err());
        assert!(request("MONA", "ten").validate().is_err());
        assert!(request(" ", "1").validate().is_err());
    }

    #[test]
    fn test_action_serde() {
        let action: TradeAction = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(action, TradeAction::Sell);
        assert_eq!(action.as_str(), "sell");
    }
}
