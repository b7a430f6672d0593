use anyhow::Result;
use social_signals::{
    api::ApiState,
    services::{AlertFeedService, ApiService, TokenService},
    wallet::WalletConnector,
    AlertRepository, Config,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🔧 启动 Social Signals 模拟服务 (告警推送 + API)...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    let repository = Arc::new(AlertRepository::new());
    let (event_sender, _) = broadcast::channel(config.feed.channel_capacity);

    let service = Arc::new(TokenService::from_config(
        &config,
        Arc::clone(&repository),
        event_sender.clone(),
    )?);
    let state = ApiState::new(service, WalletConnector::from_config(&config.wallet));

    let feed_handle = if config.feed.enabled {
        let feed = AlertFeedService::new(
            Arc::clone(&repository),
            event_sender,
            Duration::from_secs(config.feed.interval_secs),
        );
        tokio::spawn(async move {
            if let Err(e) = feed.start().await {
                tracing::error!("Alert feed error: {}", e);
            }
        })
    } else {
        info!("告警推送已关闭");
        tokio::spawn(async {})
    };

    let api_service = ApiService::new(config, state);
    let api_handle = tokio::spawn(async move {
        if let Err(e) = api_service.start().await {
            tracing::error!("API service error: {}", e);
        }
    });

    tokio::try_join!(feed_handle, api_handle)?;

    Ok(())
}
