//! 只读的告警/关注列表仓库
//!
//! 数据在进程启动时加载一次，之后不再修改；所有读取都返回同样顺序的数据。

pub mod mock_data;
pub mod social;

pub use social::SocialDirectory;

use crate::types::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct AlertRepository {
    alerts: Vec<TradeAlert>,
    watchlist: Vec<WatchlistToken>,
    trending: Vec<TrendingToken>,
    trades: Vec<TokenTrade>,
}

impl AlertRepository {
    pub fn new() -> Self {
        Self::from_parts(
            mock_data::trade_alerts(),
            mock_data::watchlist(),
            mock_data::trending_tokens(),
            mock_data::token_trades(),
        )
    }

    pub fn from_parts(
        alerts: Vec<TradeAlert>,
        watchlist: Vec<WatchlistToken>,
        trending: Vec<TrendingToken>,
        trades: Vec<TokenTrade>,
    ) -> Self {
        let mut seen = HashSet::new();
        let alerts: Vec<TradeAlert> = alerts
            .into_iter()
            .filter(|alert| {
                let fresh = seen.insert(alert.id.clone());
                if !fresh {
                    tracing::warn!("丢弃重复的告警 id: {}", alert.id);
                }
                fresh
            })
            .collect();

        Self {
            alerts,
            watchlist,
            trending,
            trades,
        }
    }

    pub fn list_alerts(&self) -> &[TradeAlert] {
        &self.alerts
    }

    pub fn list_watchlist(&self) -> &[WatchlistToken] {
        &self.watchlist
    }

    pub fn list_trending(&self) -> &[TrendingToken] {
        &self.trending
    }

    pub fn recent_trades(&self) -> &[TokenTrade] {
        &self.trades
    }

    pub fn get_alert(&self, id: &str) -> Option<&TradeAlert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    pub fn alerts_by_user(&self, username: &str) -> Vec<TradeAlert> {
        self.alerts
            .iter()
            .filter(|alert| alert.username.eq_ignore_ascii_case(username))
            .cloned()
            .collect()
    }

    /// 交易员主页：按仓库顺序，第一条即最近一条
    pub fn trader_summary(&self, username: &str) -> Option<TraderSummary> {
        let trades = self.alerts_by_user(username);
        let first = trades.first()?.clone();

        let count = |action: AlertAction| trades.iter().filter(|t| t.action == action).count();

        Some(TraderSummary {
            username: first.username,
            avatar_url: first.avatar_url,
            bought_count: count(AlertAction::Bought),
            sold_count: count(AlertAction::Sold),
            minted_count: count(AlertAction::Minted),
            most_recent_token: Some(first.token_symbol),
            last_active: Some(first.timestamp),
            trades,
        })
    }
}

impl Default for AlertRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_is_stable() {
        let repo = AlertRepository::new();
        let first: Vec<TradeAlert> = repo.list_alerts().to_vec();
        let second: Vec<TradeAlert> = repo.list_alerts().to_vec();
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].username, "vitalik.eth");

        let watch_a = repo.list_watchlist().to_vec();
        let watch_b = repo.list_watchlist().to_vec();
        assert_eq!(watch_a, watch_b);
        assert_eq!(watch_a.len(), 5);
    }

    #[test]
    fn test_alert_ids_unique() {
        let repo = AlertRepository::new();
        let ids: HashSet<&str> = repo.list_alerts().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), repo.list_alerts().len());
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let mut alerts = mock_data::trade_alerts();
        let mut dup = alerts[0].clone();
        dup.username = "impostor".to_string();
        alerts.push(dup);

        let repo = AlertRepository::from_parts(alerts, vec![], vec![], vec![]);
        assert_eq!(repo.list_alerts().len(), 10);
        assert_eq!(repo.get_alert("1").map(|a| a.username.as_str()), Some("vitalik.eth"));
    }

    #[test]
    fn test_watchlist_direction_matches_sign() {
        let repo = AlertRepository::new();
        for token in repo.list_watchlist() {
            let expected = if token.change_24h >= 0.0 {
                ChangeDirection::Up
            } else {
                ChangeDirection::Down
            };
            assert_eq!(token.direction(), expected, "{}", token.symbol);
        }
    }

    #[test]
    fn test_trader_summary() {
        let repo = AlertRepository::new();
        let summary = repo.trader_summary("degen_chad").unwrap();
        assert_eq!(summary.trades.len(), 1);
        assert_eq!(summary.sold_count, 1);
        assert_eq!(summary.bought_count, 0);
        assert_eq!(summary.most_recent_token.as_deref(), Some("PEPE"));
        assert_eq!(summary.last_active.as_deref(), Some("12m ago"));

        assert!(repo.trader_summary("nobody").is_none());
    }

    #[test]
    fn test_recent_trades_and_trending() {
        let repo = AlertRepository::new();
        assert_eq!(repo.recent_trades().len(), 5);
        assert_eq!(repo.recent_trades()[0].side, TradeSide::Buy);
        assert_eq!(repo.list_trending()[0].symbol, "HYPE");
    }
}
