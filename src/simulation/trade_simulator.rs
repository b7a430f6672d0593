use crate::types::format::short_address;
use crate::types::{TradeConfirmationResult, TradeRequest};
use chrono::Utc;
use rand::Rng;

const EXPLORER_TX_URL: &str = "https://monadscan.xyz/tx/";

/// 模拟下单确认，没有失败路径，也不会发生真实转账
pub struct TradeSimulator;

impl TradeSimulator {
    pub fn confirm(request: &TradeRequest) -> TradeConfirmationResult {
        Self::confirm_with(&mut rand::thread_rng(), request)
    }

    pub fn confirm_with<R: Rng>(rng: &mut R, request: &TradeRequest) -> TradeConfirmationResult {
        let tx_hash = Self::generate_tx_hash(rng);

        TradeConfirmationResult {
            token_symbol: request.token_symbol.trim().to_uppercase(),
            amount: request.amount.trim().to_string(),
            action: request.action,
            success: true,
            short_hash: short_address(&tx_hash),
            explorer_url: format!("{}{}", EXPLORER_TX_URL, tx_hash),
            tx_hash,
            confirmed_at: Utc::now(),
        }
    }

    /// 0x + 64 位十六进制
    pub fn generate_tx_hash<R: Rng>(rng: &mut R) -> String {
        let bytes: [u8; 32] = rng.gen();
        format!("0x{}", hex::encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TradeAction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(amount: &str) -> TradeRequest {
        TradeRequest {
            token_symbol: "mona".to_string(),
            amount: amount.to_string(),
            action: TradeAction::Buy,
        }
    }

    #[test]
    fn test_confirm_always_succeeds() {
        let result = TradeSimulator::confirm(&request(" 100 "));
        assert!(result.success);
        assert_eq!(result.amount, "100");
        assert_eq!(result.token_symbol, "MONA");
        assert_eq!(result.action, TradeAction::Buy);
        assert!(result.explorer_url.ends_with(&result.tx_hash));
    }

    #[test]
    fn test_tx_hash_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let hash = TradeSimulator::generate_tx_hash(&mut rng);
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));

        let result = TradeSimulator::confirm_with(&mut rng, &request("1"));
        assert_eq!(result.short_hash.len(), "0x1234...abcd".len());
    }

    #[test]
    fn test_consecutive_hashes_differ() {
        let first = TradeSimulator::confirm(&request("100"));
        let second = TradeSimulator::confirm(&request("100"));
        assert_ne!(first.tx_hash, second.tx_hash);
    }
}
