use crate::error::{Result, SignalsError};
use crate::services::TokenService;
use crate::types::*;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogPhase {
    Closed,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    Overview,
    Chart,
    Trades,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartPanel {
    pub loading: bool,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoinDetailState {
    pub symbol: String,
    pub phase: DialogPhase,
    pub tab: DetailTab,
    pub timeframe: Timeframe,
    pub profile: Option<TokenProfile>,
    pub chart: ChartPanel,
    pub trades: Vec<TokenTrade>,
    pub error: Option<String>,
    #[serde(skip)]
    generation: u64,
    #[serde(skip)]
    chart_generation: u64,
}

impl CoinDetailState {
    fn accepts(&self, generation: u64) -> bool {
        self.generation == generation && self.phase != DialogPhase::Closed
    }
}

/// 代币详情弹窗
///
/// 资料、图表、最近成交都在后台任务里加载。每次加载带上当时的
/// generation，写回前核对；关闭或 drop 时取消 token 并递增 generation，
/// 迟到的结果直接丢弃。
pub struct CoinDetailView {
    service: Arc<TokenService>,
    state: Arc<Mutex<CoinDetailState>>,
    cancel: CancellationToken,
}

impl CoinDetailView {
    pub fn open(service: Arc<TokenService>, symbol: &str, show_trade_point: bool) -> Self {
        let tab = if show_trade_point {
            DetailTab::Chart
        } else {
            DetailTab::Overview
        };

        let state = CoinDetailState {
            symbol: symbol.trim().to_uppercase(),
            phase: DialogPhase::Loading,
            tab,
            timeframe: Timeframe::default(),
            profile: None,
            chart: ChartPanel {
                loading: true,
                points: Vec::new(),
            },
            trades: Vec::new(),
            error: None,
            generation: 0,
            chart_generation: 0,
        };

        info!("📊 打开代币详情: {}", state.symbol);
        let view = Self {
            service,
            state: Arc::new(Mutex::new(state)),
            cancel: CancellationToken::new(),
        };
        view.spawn_load(0);
        view
    }

    pub async fn snapshot(&self) -> CoinDetailState {
        self.state.lock().await.clone()
    }

    pub async fn select_tab(&self, tab: DetailTab) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.phase != DialogPhase::Ready {
            return Err(SignalsError::InvalidInput(format!(
                "cannot switch tab while {:?}",
                state.phase
            )));
        }
        state.tab = tab;
        Ok(())
    }

    /// 切换时间窗口；Ready 状态下重新生成图表
    pub async fn set_timeframe(&self, timeframe: Timeframe) -> Result<()> {
        let mut state = self.state.lock().await;
        match state.phase {
            DialogPhase::Closed => Err(SignalsError::InvalidInput("view is closed".to_string())),
            DialogPhase::Ready => {
                let Some(pair_address) = state.profile.as_ref().map(|p| p.pair_address.clone())
                else {
                    return Err(SignalsError::InvalidInput("profile not loaded".to_string()));
                };
                state.timeframe = timeframe;
                state.chart.loading = true;
                state.chart_generation += 1;
                let generation = state.generation;
                let chart_generation = state.chart_generation;
                drop(state);

                spawn_chart_reload(
                    self.task_handles(),
                    generation,
                    chart_generation,
                    pair_address,
                    timeframe,
                );
                Ok(())
            }
            // 加载中：进行中的加载写回时发现窗口变了，会按新窗口重新生成图表
            // 出错：下一次 retry 会用新窗口
            DialogPhase::Loading | DialogPhase::Error => {
                state.timeframe = timeframe;
                state.chart_generation += 1;
                Ok(())
            }
        }
    }

    pub async fn retry(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.phase != DialogPhase::Error {
            return Err(SignalsError::InvalidInput(format!(
                "retry is only available after an error, current phase {:?}",
                state.phase
            )));
        }
        state.phase = DialogPhase::Loading;
        state.error = None;
        state.chart.loading = true;
        state.generation += 1;
        let generation = state.generation;
        drop(state);

        debug!("重试加载代币详情 (generation {})", generation);
        self.spawn_load(generation);
        Ok(())
    }

    pub async fn dismiss(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.phase != DialogPhase::Error {
            return Err(SignalsError::InvalidInput(format!(
                "nothing to dismiss in phase {:?}",
                state.phase
            )));
        }
        self.shut(&mut state);
        Ok(())
    }

    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        self.shut(&mut state);
    }

    fn shut(&self, state: &mut CoinDetailState) {
        self.cancel.cancel();
        state.phase = DialogPhase::Closed;
        state.generation += 1;
        state.chart.loading = false;
        debug!("代币详情已关闭: {}", state.symbol);
    }

    fn task_handles(&self) -> TaskHandles {
        TaskHandles {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
            cancel: self.cancel.clone(),
        }
    }

    fn spawn_load(&self, generation: u64) {
        let handles = self.task_handles();

        tokio::spawn(async move {
            let (symbol, timeframe, chart_generation) = {
                let state = handles.state.lock().await;
                (state.symbol.clone(), state.timeframe, state.chart_generation)
            };

            let loaded = tokio::select! {
                _ = handles.cancel.cancelled() => return,
                loaded = load_details(&handles.service, &symbol, timeframe) => loaded,
            };

            let mut state = handles.state.lock().await;
            if !state.accepts(generation) {
                debug!("丢弃过期的详情结果: {} (generation {})", symbol, generation);
                return;
            }

            match loaded {
                Ok((profile, points, trades)) => {
                    let pair_address = profile.pair_address.clone();
                    state.profile = Some(profile);
                    state.trades = trades;
                    state.phase = DialogPhase::Ready;

                    if state.chart_generation == chart_generation {
                        state.chart.points = points;
                        state.chart.loading = false;
                        return;
                    }

                    // 加载期间切换过时间窗口，图表按当前窗口重新生成
                    let current = state.timeframe;
                    let current_chart_generation = state.chart_generation;
                    drop(state);
                    debug!("时间窗口已变为 {}，重新加载图表: {}", current, symbol);
                    spawn_chart_reload(
                        handles,
                        generation,
                        current_chart_generation,
                        pair_address,
                        current,
                    );
                }
                Err(e) => {
                    warn!("加载 {} 详情失败: {}", symbol, e);
                    state.chart.loading = false;
                    state.error = Some(e.to_string());
                    state.phase = DialogPhase::Error;
                }
            }
        });
    }
}

struct TaskHandles {
    service: Arc<TokenService>,
    state: Arc<Mutex<CoinDetailState>>,
    cancel: CancellationToken,
}

fn spawn_chart_reload(
    handles: TaskHandles,
    generation: u64,
    chart_generation: u64,
    pair_address: String,
    timeframe: Timeframe,
) {
    tokio::spawn(async move {
        let points = tokio::select! {
            _ = handles.cancel.cancelled() => return,
            points = handles.service.chart_series(&pair_address, timeframe) => points,
        };

        let mut state = handles.state.lock().await;
        if !state.accepts(generation) || state.chart_generation != chart_generation {
            debug!("丢弃过期的图表: {} {}", pair_address, timeframe);
            return;
        }
        state.chart.points = points;
        state.chart.loading = false;
    });
}

impl Drop for CoinDetailView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn load_details(
    service: &TokenService,
    symbol: &str,
    timeframe: Timeframe,
) -> Result<(TokenProfile, Vec<ChartPoint>, Vec<TokenTrade>)> {
    let profile = service.resolve_profile(symbol).await?;
    let (points, trades) = tokio::join!(
        service.chart_series(&profile.pair_address, timeframe),
        service.recent_trades(&profile.pair_address),
    );
    Ok((profile, points, trades))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MarketDataConfig, SimulationConfig};
    use crate::repository::AlertRepository;
    use crate::services::market_data::DexScreenerClient;
    use std::time::Duration;
    use tokio::sync::broadcast;
    use tokio_test::{assert_err, assert_ok};

    fn service(delay_ms: u64) -> Arc<TokenService> {
        let (sender, _) = broadcast::channel(16);
        Arc::new(TokenService::new(
            SimulationConfig::with_delay(delay_ms),
            Arc::new(AlertRepository::new()),
            sender,
        ))
    }

    fn failing_service() -> Arc<TokenService> {
        let (sender, _) = broadcast::channel(16);
        let config = MarketDataConfig {
            enabled: true,
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
            ..MarketDataConfig::default()
        };
        let client = DexScreenerClient::new(&config).unwrap();
        Arc::new(
            TokenService::new(
                SimulationConfig::without_delays(),
                Arc::new(AlertRepository::new()),
                sender,
            )
            .with_market_data(client),
        )
    }

    async fn wait_until<F>(view: &CoinDetailView, done: F) -> CoinDetailState
    where
        F: Fn(&CoinDetailState) -> bool,
    {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let state = view.snapshot().await;
                if done(&state) {
                    return state;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("view did not settle")
    }

    #[tokio::test]
    async fn test_open_loads_profile_chart_and_trades() {
        let view = CoinDetailView::open(service(0), "pepe", false);
        let state = wait_until(&view, |s| s.phase == DialogPhase::Ready).await;

        assert_eq!(state.symbol, "PEPE");
        assert_eq!(state.tab, DetailTab::Overview);
        assert_eq!(state.timeframe, Timeframe::Medium);
        assert_eq!(state.profile.unwrap().name, "Pepe");
        assert_eq!(state.chart.points.len(), 7);
        assert!(!state.chart.loading);
        assert_eq!(state.trades.len(), 5);
    }

    #[tokio::test]
    async fn test_trade_point_opens_chart_tab() {
        let view = CoinDetailView::open(service(0), "MONA", true);
        assert_eq!(view.snapshot().await.tab, DetailTab::Chart);
    }

    #[tokio::test]
    async fn test_close_discards_late_result() {
        let view = CoinDetailView::open(service(50), "MONA", false);
        assert_eq!(view.snapshot().await.phase, DialogPhase::Loading);

        view.close().await;
        tokio::time::sleep(Duration::from_millis(200)).await;

        let state = view.snapshot().await;
        assert_eq!(state.phase, DialogPhase::Closed);
        assert!(state.profile.is_none());
        assert!(state.chart.points.is_empty());
        assert!(state.trades.is_empty());
    }

    #[tokio::test]
    async fn test_set_timeframe_reloads_chart() {
        let view = CoinDetailView::open(service(0), "DEGEN", false);
        wait_until(&view, |s| s.phase == DialogPhase::Ready).await;

        assert_ok!(view.set_timeframe(Timeframe::Short).await);
        let state = wait_until(&view, |s| !s.chart.loading).await;
        assert_eq!(state.timeframe, Timeframe::Short);
        assert_eq!(state.chart.points.len(), 12);
    }

    #[tokio::test]
    async fn test_timeframe_change_while_loading_regenerates_chart() {
        let view = CoinDetailView::open(service(50), "MONA", false);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(view.snapshot().await.phase, DialogPhase::Loading);

        assert_ok!(view.set_timeframe(Timeframe::Short).await);
        let state = wait_until(&view, |s| s.phase == DialogPhase::Ready && !s.chart.loading).await;

        assert_eq!(state.timeframe, Timeframe::Short);
        assert_eq!(state.chart.points.len(), Timeframe::Short.point_count());
        assert_eq!(state.chart.points[0].time, "0:00");
        assert_eq!(state.chart.points[11].time, "0:55");
        assert!(state.profile.is_some());
        assert_eq!(state.trades.len(), 5);
    }

    #[tokio::test]
    async fn test_only_latest_timeframe_reload_writes() {
        let view = CoinDetailView::open(service(30), "PEPE", false);
        wait_until(&view, |s| s.phase == DialogPhase::Ready && !s.chart.loading).await;

        assert_ok!(view.set_timeframe(Timeframe::Short).await);
        assert_ok!(view.set_timeframe(Timeframe::Long).await);

        // 第一次 reload 先完成，但已过期，loading 要一直保持到第二次写回
        let state = wait_until(&view, |s| !s.chart.loading).await;
        assert_eq!(state.timeframe, Timeframe::Long);
        assert_eq!(state.chart.points.len(), Timeframe::Long.point_count());
        assert_eq!(state.chart.points[6].time, "Today");

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(view.snapshot().await.chart.points.len(), Timeframe::Long.point_count());
    }

    #[tokio::test]
    async fn test_timeframe_change_in_error_is_kept_for_retry() {
        let view = CoinDetailView::open(failing_service(), "MONA", false);
        wait_until(&view, |s| s.phase == DialogPhase::Error).await;

        assert_ok!(view.set_timeframe(Timeframe::Long).await);
        let state = view.snapshot().await;
        assert_eq!(state.phase, DialogPhase::Error);
        assert_eq!(state.timeframe, Timeframe::Long);
        assert!(!state.chart.loading);

        assert_ok!(view.retry().await);
        let state = wait_until(&view, |s| s.phase == DialogPhase::Error).await;
        assert_eq!(state.timeframe, Timeframe::Long);
    }

    #[tokio::test]
    async fn test_set_timeframe_rejected_when_closed() {
        let view = CoinDetailView::open(service(0), "MONA", false);
        view.close().await;
        assert_err!(view.set_timeframe(Timeframe::Short).await);
    }

    #[tokio::test]
    async fn test_tab_switch_requires_ready() {
        let view = CoinDetailView::open(service(50), "MONA", false);
        assert_err!(view.select_tab(DetailTab::Trades).await);

        wait_until(&view, |s| s.phase == DialogPhase::Ready).await;
        assert_ok!(view.select_tab(DetailTab::Trades).await);
        assert_eq!(view.snapshot().await.tab, DetailTab::Trades);
    }

    #[tokio::test]
    async fn test_error_retry_and_dismiss() {
        let view = CoinDetailView::open(failing_service(), "MONA", false);
        let state = wait_until(&view, |s| s.phase == DialogPhase::Error).await;
        assert!(state.error.is_some());
        assert_err!(view.select_tab(DetailTab::Chart).await);

        assert_ok!(view.retry().await);
        assert_eq!(view.snapshot().await.phase, DialogPhase::Loading);
        wait_until(&view, |s| s.phase == DialogPhase::Error).await;

        assert_ok!(view.dismiss().await);
        assert_eq!(view.snapshot().await.phase, DialogPhase::Closed);
        assert_err!(view.retry().await);
    }

    #[tokio::test]
    async fn test_retry_and_dismiss_rejected_when_ready() {
        let view = CoinDetailView::open(service(0), "WOJAK", false);
        wait_until(&view, |s| s.phase == DialogPhase::Ready).await;
        assert_err!(view.retry().await);
        assert_err!(view.dismiss().await);
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_load() {
        let view = CoinDetailView::open(service(50), "MONA", false);
        let state = Arc::clone(&view.state);
        drop(view);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(state.lock().await.phase, DialogPhase::Loading);
        assert!(state.lock().await.profile.is_none());
    }
}
