use crate::api::{create_router, ApiState};
use crate::config::Config;
use anyhow::Result;
use tracing::info;

pub struct ApiService {
    config: Config,
    state: ApiState,
}

impl ApiService {
    pub fn new(config: Config, state: ApiState) -> Self {
        Self { config, state }
    }

    pub async fn start(&self) -> Result<()> {
        info!("🚀 启动API服务...");

        self.state.restore_wallet().await;

        let app = create_router(self.state.clone());
        let address = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = tokio::net::TcpListener::bind(&address).await?;

        info!("API Server starting on {}", address);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
