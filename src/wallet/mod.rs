//! 钱包连接
//!
//! 不实现真实 provider，只消费它返回的地址。连接成功后得到一个
//! 显式持有的 `WalletSession`，断开时把它交回去。

pub mod provider;

pub use provider::{MockWalletProvider, WalletProvider};

use crate::config::{WalletConfig, WalletProviderKind};
use crate::error::{Result, SignalsError};
use crate::types::format::short_address;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletSession {
    pub address: String,
    pub display_address: String,
    pub connected_at: DateTime<Utc>,
}

impl WalletSession {
    fn new(address: String) -> Self {
        Self {
            display_address: short_address(&address),
            address,
            connected_at: Utc::now(),
        }
    }

    /// 断开连接，返回断开的地址
    pub fn disconnect(self) -> String {
        info!("🔌 钱包断开: {}", self.display_address);
        self.address
    }
}

pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl WalletConnector {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &WalletConfig) -> Self {
        match config.provider {
            WalletProviderKind::Mock => {
                let provider = MockWalletProvider::new(
                    vec![config.mock_address.clone()],
                    config.auto_approve,
                );
                Self::new(Some(Arc::new(provider)))
            }
            WalletProviderKind::None => Self::new(None),
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// 启动时静默检查已有授权；出错只记日志
    pub async fn restore(&self) -> Option<WalletSession> {
        let provider = self.provider.as_ref()?;
        match provider.list_accounts().await {
            Ok(accounts) => accounts.into_iter().next().map(WalletSession::new),
            Err(e) => {
                error!("检查钱包连接失败: {}", e);
                None
            }
        }
    }

    pub async fn connect(&self) -> Result<WalletSession> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            SignalsError::Configuration(
                "Wallet provider not installed! Please install a wallet to continue.".to_string(),
            )
        })?;

        let accounts = provider.request_accounts().await?;
        let address = accounts
            .into_iter()
            .next()
            .ok_or_else(|| SignalsError::PermissionDenied("No accounts found".to_string()))?;

        let session = WalletSession::new(address);
        info!("👛 钱包已连接: {}", session.display_address);
        Ok(session)
    }
}
