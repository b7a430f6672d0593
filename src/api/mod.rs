pub mod handlers;
pub mod routes;
pub mod websocket;

pub use routes::create_router;

use crate::repository::{AlertRepository, SocialDirectory};
use crate::services::TokenService;
use crate::view::ViewRegistry;
use crate::wallet::{WalletConnector, WalletSession};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<TokenService>,
    pub repository: Arc<AlertRepository>,
    pub event_sender: broadcast::Sender<String>,
    pub wallet_connector: Arc<WalletConnector>,
    /// 当前钱包会话，断开时被取走
    pub wallet: Arc<RwLock<Option<WalletSession>>>,
    pub views: Arc<ViewRegistry>,
    pub social: Arc<SocialDirectory>,
}

impl ApiState {
    pub fn new(service: Arc<TokenService>, wallet_connector: WalletConnector) -> Self {
        Self {
            repository: Arc::clone(service.repository()),
            event_sender: service.event_sender().clone(),
            service,
            wallet_connector: Arc::new(wallet_connector),
            wallet: Arc::new(RwLock::new(None)),
            views: Arc::new(ViewRegistry::new()),
            social: Arc::new(SocialDirectory::new()),
        }
    }

    /// 启动时恢复已授权的钱包
    pub async fn restore_wallet(&self) {
        if let Some(session) = self.wallet_connector.restore().await {
            *self.wallet.write().await = Some(session);
        }
    }
}
