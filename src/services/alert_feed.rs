use crate::api::websocket::publish;
use crate::repository::AlertRepository;
use crate::types::FeedEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time;
use tracing::{debug, info};

/// 按固定间隔循环推送仓库里的告警，模拟实时告警流
pub struct AlertFeedService {
    repository: Arc<AlertRepository>,
    event_sender: broadcast::Sender<String>,
    interval: Duration,
}

impl AlertFeedService {
    pub fn new(
        repository: Arc<AlertRepository>,
        event_sender: broadcast::Sender<String>,
        interval: Duration,
    ) -> Self {
        Self {
            repository,
            event_sender,
            interval,
        }
    }

    pub async fn start(&self) -> anyhow::Result<()> {
        let alerts = self.repository.list_alerts();
        if alerts.is_empty() {
            info!("告警仓库为空，实时推送不启动");
            return Ok(());
        }

        info!("🚀 启动告警推送，间隔: {:?}", self.interval);
        let mut interval = time::interval(self.interval);

        for alert in alerts.iter().cycle() {
            interval.tick().await;
            let delivered = publish(&self.event_sender, FeedEvent::NewAlert(alert.clone()));
            debug!("推送告警 {} ({} 个订阅者)", alert.id, delivered);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_feed_replays_in_order() {
        let repository = Arc::new(AlertRepository::new());
        let (sender, mut receiver) = broadcast::channel(16);
        let feed = AlertFeedService::new(Arc::clone(&repository), sender, Duration::from_millis(5));

        let handle = tokio::spawn(async move { feed.start().await });

        for expected in repository.list_alerts().iter().take(3) {
            let message = receiver.recv().await.unwrap();
            let value: serde_json::Value = serde_json::from_str(&message).unwrap();
            assert_eq!(value["type"], "new_alert");
            assert_eq!(value["data"]["id"], expected.id.as_str());
        }

        handle.abort();
    }
}
