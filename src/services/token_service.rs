use crate::config::{Config, SimulationConfig};
use crate::error::Result;
use crate::repository::AlertRepository;
use crate::services::market_data::DexScreenerClient;
use crate::simulation::{ChartSimulator, ProfileResolver, TradeSimulator};
use crate::types::*;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing::{info, warn};

/// 把纯模拟函数包上模拟延迟，并在需要时走真实行情接口
pub struct TokenService {
    simulation: SimulationConfig,
    repository: Arc<AlertRepository>,
    market_data: Option<DexScreenerClient>,
    chain_id: String,
    event_sender: broadcast::Sender<String>,
}

impl TokenService {
    pub fn new(
        simulation: SimulationConfig,
        repository: Arc<AlertRepository>,
        event_sender: broadcast::Sender<String>,
    ) -> Self {
        Self {
            simulation,
            repository,
            market_data: None,
            chain_id: crate::simulation::profile_resolver::DEFAULT_CHAIN_ID.to_string(),
            event_sender,
        }
    }

    pub fn from_config(
        config: &Config,
        repository: Arc<AlertRepository>,
        event_sender: broadcast::Sender<String>,
    ) -> Result<Self> {
        let mut service = Self::new(config.simulation.clone(), repository, event_sender);
        service.chain_id = config.market_data.chain_id.clone();
        if config.market_data.enabled {
            info!("📡 启用实时行情接口: {}", config.market_data.base_url);
            service.market_data = Some(DexScreenerClient::new(&config.market_data)?);
        }
        Ok(service)
    }

    pub fn with_market_data(mut self, client: DexScreenerClient) -> Self {
        self.market_data = Some(client);
        self
    }

    pub fn repository(&self) -> &Arc<AlertRepository> {
        &self.repository
    }

    pub fn event_sender(&self) -> &broadcast::Sender<String> {
        &self.event_sender
    }

    pub fn live_market_data(&self) -> bool {
        self.market_data.is_some()
    }

    /// 模拟数据永远成功；启用实时行情时，接口失败会返回 DataFetch
    pub async fn resolve_profile(&self, symbol: &str) -> Result<TokenProfile> {
        sleep(self.simulation.profile_delay()).await;

        let fallback = ProfileResolver::resolve(symbol);
        let Some(client) = &self.market_data else {
            return Ok(fallback);
        };

        match client.fetch_token_profile(&fallback.address, &self.chain_id).await? {
            Some(profile) => Ok(profile),
            None => {
                warn!("行情接口没有 {} 的交易对，使用模拟数据", fallback.symbol);
                Ok(fallback)
            }
        }
    }

    pub async fn chart_series(&self, pair_address: &str, timeframe: Timeframe) -> Vec<ChartPoint> {
        sleep(self.simulation.chart_delay()).await;
        ChartSimulator::generate_series(pair_address, timeframe)
    }

    pub async fn chart_for_symbol(&self, symbol: &str, timeframe: Timeframe) -> Result<Vec<ChartPoint>> {
        let profile = self.resolve_profile(symbol).await?;
        Ok(self.chart_series(&profile.pair_address, timeframe).await)
    }

    pub async fn recent_trades(&self, _pair_address: &str) -> Vec<TokenTrade> {
        sleep(self.simulation.trades_delay()).await;
        self.repository.recent_trades().to_vec()
    }

    pub async fn search_tokens(&self, query: &str) -> Vec<TokenProfile> {
        sleep(self.simulation.search_delay()).await;
        ProfileResolver::search(query)
    }

    pub async fn submit_trade(&self, request: &TradeRequest) -> TradeConfirmationResult {
        sleep(self.simulation.trade_confirm_delay()).await;
        let result = TradeSimulator::confirm(request);
        info!(
            "✅ 模拟成交: {} {} {} -> {}",
            result.action.as_str(),
            result.amount,
            result.token_symbol,
            result.short_hash
        );
        crate::api::websocket::publish(&self.event_sender, FeedEvent::TradeConfirmed(result.clone()));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use tokio_test::assert_ok;

    fn service(delay_ms: u64) -> (TokenService, broadcast::Receiver<String>) {
        let (sender, receiver) = broadcast::channel(16);
        let service = TokenService::new(
            SimulationConfig::with_delay(delay_ms),
            Arc::new(AlertRepository::new()),
            sender,
        );
        (service, receiver)
    }

    #[tokio::test]
    async fn test_pepe_short_chart_end_to_end() {
        let (service, _rx) = service(0);
        let points = assert_ok!(service.chart_for_symbol("PEPE", Timeframe::Short).await);
        assert_eq!(points.len(), 12);
        for point in points {
            assert!(point.price > 0.0);
            assert!((point.price - 0.0000042).abs() <= 0.0000042 * 0.01);
        }
    }

    #[tokio::test]
    async fn test_unknown_symbol_never_fails() {
        let (service, _rx) = service(0);
        let profile = assert_ok!(service.resolve_profile("NOT_A_TOKEN").await);
        assert_eq!(profile.name, "Unknown Token");
    }

    #[tokio::test]
    async fn test_submit_trade_within_delay() {
        let (service, mut rx) = service(50);
        let request = TradeRequest {
            token_symbol: "MONA".to_string(),
            amount: "100".to_string(),
            action: TradeAction::Buy,
        };

        let started = Instant::now();
        let first = service.submit_trade(&request).await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(1000));
        assert!(first.success);
        assert!(!first.tx_hash.is_empty());

        let second = service.submit_trade(&request).await;
        assert_ne!(first.tx_hash, second.tx_hash);

        let event = rx.recv().await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&event).unwrap();
        assert_eq!(value["type"], "trade_confirmed");
        assert_eq!(value["data"]["tx_hash"], first.tx_hash);
    }

    #[tokio::test]
    async fn test_search_and_trades() {
        let (service, _rx) = service(0);
        assert_eq!(service.search_tokens("").await.len(), 4);
        assert_eq!(service.search_tokens("wojak").await[0].symbol, "WOJAK");
        assert_eq!(service.recent_trades("0xpair").await.len(), 5);
    }
}
