use crate::error::{Result, SignalsError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;

/// 钱包 provider 接口（浏览器钱包在服务端的替身）
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// 已授权的账户，不弹授权
    async fn list_accounts(&self) -> Result<Vec<String>>;

    /// 请求用户授权并返回账户
    async fn request_accounts(&self) -> Result<Vec<String>>;
}

/// 演示用 provider：预置账户，可配置是否同意授权
pub struct MockWalletProvider {
    accounts: Vec<String>,
    approve: bool,
    delay: Duration,
    authorized: RwLock<bool>,
}

impl MockWalletProvider {
    pub fn new(accounts: Vec<String>, approve: bool) -> Self {
        Self {
            accounts,
            approve,
            delay: Duration::ZERO,
            authorized: RwLock::new(false),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// 模拟之前已经授权过的状态
    pub fn pre_authorized(self) -> Self {
        Self {
            authorized: RwLock::new(true),
            ..self
        }
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn list_accounts(&self) -> Result<Vec<String>> {
        tokio::time::sleep(self.delay).await;
        if *self.authorized.read().await {
            Ok(self.accounts.clone())
        } else {
            Ok(Vec::new())
        }
    }

    async fn request_accounts(&self) -> Result<Vec<String>> {
        tokio::time::sleep(self.delay).await;
        if !self.approve {
            return Err(SignalsError::PermissionDenied(
                "User rejected the request".to_string(),
            ));
        }
        *self.authorized.write().await = true;
        Ok(self.accounts.clone())
    }
}
