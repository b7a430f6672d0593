//! 价格走势模拟
//!
//! 根据交易对地址确定基准价，再按时间窗口生成固定数量的点，
//! 每个点在基准价上叠加独立的随机扰动。

use crate::types::{ChartPoint, Timeframe};
use rand::Rng;

/// 未匹配到任何已知交易对时的基准价
pub const DEFAULT_BASE_PRICE: f64 = 0.1;

/// 模拟价格的下限，防止扰动把价格推到 0 或负数
pub const PRICE_FLOOR: f64 = 1e-12;

/// 长周期每往前一天压低的幅度（相对基准价）
const LONG_TREND_FACTOR: f64 = 0.1;

pub struct KnownPair {
    pub symbol: &'static str,
    pub pair_address: &'static str,
    pub marker: &'static str,
    pub base_price: f64,
}

/// 顺序即匹配优先级
pub const KNOWN_PAIRS: [KnownPair; 4] = [
    KnownPair {
        symbol: "MONA",
        pair_address: "0x1234567890abcdef1234567890abcdef12345678",
        marker: "1234567890abcdef1234",
        base_price: 0.234,
    },
    KnownPair {
        symbol: "DEGEN",
        pair_address: "0xabcdef1234567890abcdef1234567890abcdef12",
        marker: "abcdef1234567890ab",
        base_price: 0.025,
    },
    KnownPair {
        symbol: "WOJAK",
        pair_address: "0x7890abcdef1234567890abcdef1234567890abcd",
        marker: "7890abcdef12345678",
        base_price: 0.00356,
    },
    KnownPair {
        symbol: "PEPE",
        pair_address: "0xef1234567890abcdef1234567890abcdef123456",
        marker: "ef1234567890abcdef",
        base_price: 0.0000042,
    },
];

pub struct ChartSimulator;

impl ChartSimulator {
    /// 基准价查找
    ///
    /// 已知地址互相包含对方的标记串，所以先做完整地址匹配，
    /// 再按固定顺序做子串匹配，最后回落到默认值。
    pub fn base_price(pair_address: &str) -> f64 {
        let address = pair_address.trim().to_lowercase();

        if let Some(pair) = KNOWN_PAIRS.iter().find(|p| p.pair_address == address) {
            return pair.base_price;
        }

        KNOWN_PAIRS
            .iter()
            .find(|p| address.contains(p.marker))
            .map(|p| p.base_price)
            .unwrap_or(DEFAULT_BASE_PRICE)
    }

    pub fn generate_series(pair_address: &str, timeframe: Timeframe) -> Vec<ChartPoint> {
        Self::generate_series_with(&mut rand::thread_rng(), pair_address, timeframe)
    }

    pub fn generate_series_with<R: Rng>(
        rng: &mut R,
        pair_address: &str,
        timeframe: Timeframe,
    ) -> Vec<ChartPoint> {
        let base_price = Self::base_price(pair_address);
        let count = timeframe.point_count();
        let amplitude = timeframe.amplitude();

        (0..count)
            .map(|i| {
                let variation = rng.gen_range(-0.5f64..0.5) * amplitude * base_price;
                let trend = Self::trend_offset(timeframe, i, count, base_price);
                ChartPoint {
                    time: Self::time_label(timeframe, i, count),
                    price: (base_price - trend + variation).max(PRICE_FLOOR),
                }
            })
            .collect()
    }

    fn time_label(timeframe: Timeframe, index: usize, count: usize) -> String {
        match timeframe {
            Timeframe::Short => {
                let minute = index * 5;
                format!("{}:{:02}", minute / 60, minute % 60)
            }
            Timeframe::Medium => format!("{:02}:00", index * 4),
            Timeframe::Long => match count - 1 - index {
                0 => "Today".to_string(),
                days_ago => format!("{}d ago", days_ago),
            },
        }
    }

    /// 只有 7d 带趋势：越旧的点压得越低，最新一天不压
    fn trend_offset(timeframe: Timeframe, index: usize, count: usize, base_price: f64) -> f64 {
        match timeframe {
            Timeframe::Long => {
                let days_ago = (count - 1 - index) as f64;
                days_ago / count as f64 * LONG_TREND_FACTOR * base_price
            }
            _ => 0.0,
        }
    }
}
