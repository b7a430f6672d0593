use super::{
    CoinDetailState, CoinDetailView, DialogPhase, TradeDialog, TradeDialogState, TradePhase,
};
use crate::error::{Result, SignalsError};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

pub enum ViewHandle {
    CoinDetail(CoinDetailView),
    Trade(TradeDialog),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewSnapshot {
    CoinDetail(CoinDetailState),
    Trade(TradeDialogState),
}

impl ViewHandle {
    pub async fn snapshot(&self) -> ViewSnapshot {
        match self {
            ViewHandle::CoinDetail(view) => ViewSnapshot::CoinDetail(view.snapshot().await),
            ViewHandle::Trade(dialog) => ViewSnapshot::Trade(dialog.snapshot().await),
        }
    }

    pub async fn close(&self) {
        match self {
            ViewHandle::CoinDetail(view) => view.close().await,
            ViewHandle::Trade(dialog) => dialog.close().await,
        }
    }

    /// 已关闭的弹窗，以及已确认的交易弹窗
    pub async fn is_finished(&self) -> bool {
        match self {
            ViewHandle::CoinDetail(view) => view.snapshot().await.phase == DialogPhase::Closed,
            ViewHandle::Trade(dialog) => matches!(
                dialog.snapshot().await.phase,
                TradePhase::Confirmed | TradePhase::Closed
            ),
        }
    }

    pub fn as_coin_detail(&self) -> Result<&CoinDetailView> {
        match self {
            ViewHandle::CoinDetail(view) => Ok(view),
            ViewHandle::Trade(_) => Err(SignalsError::InvalidInput(
                "view is a trade dialog".to_string(),
            )),
        }
    }

    pub fn as_trade(&self) -> Result<&TradeDialog> {
        match self {
            ViewHandle::Trade(dialog) => Ok(dialog),
            ViewHandle::CoinDetail(_) => Err(SignalsError::InvalidInput(
                "view is a coin detail dialog".to_string(),
            )),
        }
    }
}

pub const MAX_OPEN_VIEWS: usize = 256;

/// HTTP 层打开的弹窗，按 UUID 索引
///
/// 数量有上限；满了之后先清掉已结束的弹窗，仍然满就拒绝新的。
pub struct ViewRegistry {
    views: RwLock<HashMap<Uuid, Arc<ViewHandle>>>,
    capacity: usize,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::with_capacity(MAX_OPEN_VIEWS)
    }
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            views: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    pub async fn insert(&self, view: ViewHandle) -> Result<Uuid> {
        let mut views = self.views.write().await;
        if views.len() >= self.capacity {
            let mut finished = Vec::new();
            for (id, handle) in views.iter() {
                if handle.is_finished().await {
                    finished.push(*id);
                }
            }
            for id in &finished {
                views.remove(id);
            }
            debug!("清理已结束的弹窗: {} 个", finished.len());
        }
        if views.len() >= self.capacity {
            view.close().await;
            warn!("⚠️ 打开的弹窗已达上限 {}", self.capacity);
            return Err(SignalsError::InvalidInput(format!(
                "too many open views (limit {})",
                self.capacity
            )));
        }

        let id = Uuid::new_v4();
        views.insert(id, Arc::new(view));
        debug!("注册弹窗 {}", id);
        Ok(id)
    }

    pub async fn get(&self, id: &Uuid) -> Result<Arc<ViewHandle>> {
        self.views
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SignalsError::NotFound(format!("view {}", id)))
    }

    /// 移除并关闭，返回关闭后的快照
    pub async fn remove(&self, id: &Uuid) -> Result<ViewSnapshot> {
        let view = self
            .views
            .write()
            .await
            .remove(id)
            .ok_or_else(|| SignalsError::NotFound(format!("view {}", id)))?;
        view.close().await;
        Ok(view.snapshot().await)
    }

    pub async fn len(&self) -> usize {
        self.views.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.views.read().await.is_empty()
    }
}
