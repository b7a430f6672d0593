use super::chart_simulator::KNOWN_PAIRS;
use crate::repository::mock_data::{LOGO_A, LOGO_B, LOGO_C};
use crate::types::{PriceChange, TokenProfile};

pub const UNKNOWN_TOKEN_NAME: &str = "Unknown Token";
pub const FALLBACK_PRICE: f64 = 0.1;
pub const DEFAULT_CHAIN_ID: &str = "monad";
const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

struct ProfileEntry {
    symbol: &'static str,
    name: &'static str,
    logo: &'static str,
    price: f64,
    change: PriceChange,
    volume: f64,
    liquidity: f64,
    fdv: f64,
}

const PROFILES: [ProfileEntry; 4] = [
    ProfileEntry {
        symbol: "MONA",
        name: "Monad",
        logo: LOGO_A,
        price: 0.234,
        change: PriceChange { h1: 0.5, h6: 3.2, h24: 12.5 },
        volume: 2_100_000.0,
        liquidity: 1_500_000.0,
        fdv: 25_000_000.0,
    },
    ProfileEntry {
        symbol: "DEGEN",
        name: "Degen",
        logo: LOGO_B,
        price: 0.025,
        change: PriceChange { h1: -0.2, h6: -2.1, h24: -5.2 },
        volume: 890_000.0,
        liquidity: 750_000.0,
        fdv: 12_000_000.0,
    },
    ProfileEntry {
        symbol: "WOJAK",
        name: "Wojak",
        logo: LOGO_A,
        price: 0.00356,
        change: PriceChange { h1: 1.2, h6: 8.5, h24: 24.8 },
        volume: 1_500_000.0,
        liquidity: 950_000.0,
        fdv: 8_000_000.0,
    },
    ProfileEntry {
        symbol: "PEPE",
        name: "Pepe",
        logo: LOGO_C,
        price: 0.0000042,
        change: PriceChange { h1: -0.8, h6: -3.5, h24: -8.1 },
        volume: 5_200_000.0,
        liquidity: 2_800_000.0,
        fdv: 42_000_000.0,
    },
];

/// 代币资料查找：固定表 + 兜底资料，永远不会失败
pub struct ProfileResolver;

impl ProfileResolver {
    pub fn resolve(symbol: &str) -> TokenProfile {
        let symbol = symbol.trim().to_uppercase();
        match PROFILES.iter().find(|entry| entry.symbol == symbol) {
            Some(entry) => Self::build(entry),
            None => Self::fallback(&symbol),
        }
    }

    pub fn is_known(symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        PROFILES.iter().any(|entry| entry.symbol == symbol)
    }

    pub fn known_profiles() -> Vec<TokenProfile> {
        PROFILES.iter().map(Self::build).collect()
    }

    /// 名称或代码包含查询串（不区分大小写）；空查询返回全部
    pub fn search(query: &str) -> Vec<TokenProfile> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Self::known_profiles();
        }
        PROFILES
            .iter()
            .filter(|entry| {
                entry.name.to_lowercase().contains(&query)
                    || entry.symbol.to_lowercase().contains(&query)
            })
            .map(Self::build)
            .collect()
    }

    pub fn fallback(symbol: &str) -> TokenProfile {
        TokenProfile {
            symbol: symbol.to_string(),
            name: UNKNOWN_TOKEN_NAME.to_string(),
            address: ZERO_ADDRESS.to_string(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            decimals: 18,
            logo_url: None,
            price: FALLBACK_PRICE,
            price_change: PriceChange { h1: 0.5, h6: 3.2, h24: 0.0 },
            volume: 1_000_000.0,
            liquidity: 1_500_000.0,
            fdv: 25_000_000.0,
            pair_address: ZERO_ADDRESS.to_string(),
        }
    }

    fn build(entry: &ProfileEntry) -> TokenProfile {
        // 演示数据里代币地址和交易对地址相同
        let pair_address = KNOWN_PAIRS
            .iter()
            .find(|pair| pair.symbol == entry.symbol)
            .map(|pair| pair.pair_address)
            .unwrap_or(ZERO_ADDRESS);

        TokenProfile {
            symbol: entry.symbol.to_string(),
            name: entry.name.to_string(),
            address: pair_address.to_string(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            decimals: 18,
            logo_url: Some(entry.logo.to_string()),
            price: entry.price,
            price_change: entry.change,
            volume: entry.volume,
            liquidity: entry.liquidity,
            fdv: entry.fdv,
            pair_address: pair_address.to_string(),
        }
    }
}
