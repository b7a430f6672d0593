use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub simulation: SimulationConfig,
    pub market_data: MarketDataConfig,
    pub wallet: WalletConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 模拟网络延迟（毫秒），只影响体验，不影响结果
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub profile_delay_ms: u64,
    pub chart_delay_ms: u64,
    pub trades_delay_ms: u64,
    pub search_delay_ms: u64,
    pub trade_confirm_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketDataConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: u64,
    pub chain_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProviderKind {
    Mock,
    None,
}

impl std::str::FromStr for WalletProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(WalletProviderKind::Mock),
            "none" | "" => Ok(WalletProviderKind::None),
            other => Err(format!("unknown wallet provider '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalletConfig {
    pub provider: WalletProviderKind,
    pub mock_address: String,
    pub auto_approve: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    pub enabled: bool,
    pub interval_secs: u64,
    pub channel_capacity: usize,
}

impl SimulationConfig {
    pub fn without_delays() -> Self {
        Self::with_delay(0)
    }

    /// 所有模拟调用使用同一个延迟
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            profile_delay_ms: delay_ms,
            chart_delay_ms: delay_ms,
            trades_delay_ms: delay_ms,
            search_delay_ms: delay_ms,
            trade_confirm_delay_ms: delay_ms,
        }
    }

    pub fn profile_delay(&self) -> Duration {
        Duration::from_millis(self.profile_delay_ms)
    }

    pub fn chart_delay(&self) -> Duration {
        Duration::from_millis(self.chart_delay_ms)
    }

    pub fn trades_delay(&self) -> Duration {
        Duration::from_millis(self.trades_delay_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn trade_confirm_delay(&self) -> Duration {
        Duration::from_millis(self.trade_confirm_delay_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            profile_delay_ms: 1000,
            chart_delay_ms: 800,
            trades_delay_ms: 1000,
            search_delay_ms: 800,
            trade_confirm_delay_ms: 1500,
        }
    }
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.dexscreener.com".to_string(),
            timeout_secs: 30,
            chain_id: "monad".to_string(),
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            provider: WalletProviderKind::Mock,
            mock_address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
            auto_approve: true,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 15,
            channel_capacity: 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            simulation: SimulationConfig::default(),
            market_data: MarketDataConfig::default(),
            wallet: WalletConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv().ok();

        Self::load().map_err(|e| {
            Self::print_config_help();
            e
        })
    }

    fn load() -> anyhow::Result<Self> {
        let defaults = Config::default();

        let simulation = SimulationConfig {
            profile_delay_ms: env_var_or_default("PROFILE_DELAY_MS", defaults.simulation.profile_delay_ms)?,
            chart_delay_ms: env_var_or_default("CHART_DELAY_MS", defaults.simulation.chart_delay_ms)?,
            trades_delay_ms: env_var_or_default("TRADES_DELAY_MS", defaults.simulation.trades_delay_ms)?,
            search_delay_ms: env_var_or_default("SEARCH_DELAY_MS", defaults.simulation.search_delay_ms)?,
            trade_confirm_delay_ms: env_var_or_default(
                "TRADE_CONFIRM_DELAY_MS",
                defaults.simulation.trade_confirm_delay_ms,
            )?,
        };

        let market_data = MarketDataConfig {
            enabled: env_var_or_default("MARKET_DATA_ENABLED", defaults.market_data.enabled)?,
            base_url: env_var_or_default("MARKET_DATA_BASE_URL", defaults.market_data.base_url)?,
            timeout_secs: env_var_or_default("MARKET_DATA_TIMEOUT_SECS", defaults.market_data.timeout_secs)?,
            chain_id: env_var_or_default("CHAIN_ID", defaults.market_data.chain_id)?,
        };

        let wallet = WalletConfig {
            provider: env_var_or_default("WALLET_PROVIDER", defaults.wallet.provider)?,
            mock_address: env_var_or_default("MOCK_WALLET_ADDRESS", defaults.wallet.mock_address)?,
            auto_approve: env_var_or_default("WALLET_AUTO_APPROVE", defaults.wallet.auto_approve)?,
        };

        let feed = FeedConfig {
            enabled: env_var_or_default("FEED_ENABLED", defaults.feed.enabled)?,
            interval_secs: env_var_or_default("FEED_INTERVAL_SECS", defaults.feed.interval_secs)?,
            channel_capacity: env_var_or_default("EVENT_CHANNEL_CAPACITY", defaults.feed.channel_capacity)?,
        };

        if feed.interval_secs == 0 {
            return Err(anyhow::anyhow!("FEED_INTERVAL_SECS 必须大于 0"));
        }
        if feed.channel_capacity == 0 {
            return Err(anyhow::anyhow!("EVENT_CHANNEL_CAPACITY 必须大于 0"));
        }

        Ok(Config {
            server: ServerConfig {
                host: env_var_or_default("SERVER_HOST", defaults.server.host)?,
                port: env_var_or_default("SERVER_PORT", defaults.server.port)?,
            },
            simulation,
            market_data,
            wallet,
            feed,
        })
    }

    fn print_config_help() {
        println!("\n🔧 配置指南");
        println!("{}", "=".repeat(50));
        println!("所有配置都是可选的:\n");

        println!("[服务]");
        println!("SERVER_HOST=0.0.0.0");
        println!("SERVER_PORT=3000\n");

        println!("[模拟延迟 (ms)]");
        println!("PROFILE_DELAY_MS=1000");
        println!("CHART_DELAY_MS=800");
        println!("TRADES_DELAY_MS=1000");
        println!("SEARCH_DELAY_MS=800");
        println!("TRADE_CONFIRM_DELAY_MS=1500\n");

        println!("[行情接口]");
        println!("MARKET_DATA_ENABLED=false");
        println!("MARKET_DATA_BASE_URL=https://api.dexscreener.com");
        println!("MARKET_DATA_TIMEOUT_SECS=30");
        println!("CHAIN_ID=monad\n");

        println!("[钱包]");
        println!("WALLET_PROVIDER=mock|none");
        println!("MOCK_WALLET_ADDRESS=0x...");
        println!("WALLET_AUTO_APPROVE=true\n");

        println!("[实时推送]");
        println!("FEED_ENABLED=true");
        println!("FEED_INTERVAL_SECS=15");
        println!("EVENT_CHANNEL_CAPACITY=1000\n");

        println!("{}", "=".repeat(50));
    }
}

fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val.parse().map_err(|e| anyhow::anyhow!("配置 {} 解析失败: {}", key, e)),
        Err(_) => Ok(default),
    }
}
