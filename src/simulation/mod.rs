//! 模拟数据生成
//!
//! 这里的函数都是纯函数（加一个随机源），不做任何 IO；
//! 模拟延迟由 services::TokenService 负责。

pub mod chart_simulator;
pub mod profile_resolver;
pub mod trade_simulator;

pub use chart_simulator::{ChartSimulator, KnownPair, DEFAULT_BASE_PRICE, KNOWN_PAIRS};
pub use profile_resolver::{ProfileResolver, UNKNOWN_TOKEN_NAME};
pub use trade_simulator::TradeSimulator;
