use crate::error::{Result, SignalsError};
use crate::services::TokenService;
use crate::types::*;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradePhase {
    Editing,
    Submitting,
    Confirmed,
    Closed,
}

#[derive(Debug, Clone, Serialize)]
pub struct TradeDialogState {
    pub token_symbol: String,
    pub action: TradeAction,
    pub amount: String,
    pub phase: TradePhase,
    pub result: Option<TradeConfirmationResult>,
    #[serde(skip)]
    generation: u64,
}

/// 买卖确认弹窗
pub struct TradeDialog {
    service: Arc<TokenService>,
    state: Arc<Mutex<TradeDialogState>>,
    cancel: CancellationToken,
}

impl TradeDialog {
    pub fn open(service: Arc<TokenService>, token_symbol: &str, action: TradeAction) -> Self {
        Self {
            service,
            state: Arc::new(Mutex::new(TradeDialogState {
                token_symbol: token_symbol.trim().to_uppercase(),
                action,
                amount: String::new(),
                phase: TradePhase::Editing,
                result: None,
                generation: 0,
            })),
            cancel: CancellationToken::new(),
        }
    }

    pub async fn snapshot(&self) -> TradeDialogState {
        self.state.lock().await.clone()
    }

    pub async fn set_amount(&self, amount: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.phase != TradePhase::Editing {
            return Err(SignalsError::InvalidInput(format!(
                "amount is locked in phase {:?}",
                state.phase
            )));
        }
        state.amount = amount.trim().to_string();
        Ok(())
    }

    /// 提交后立即返回，确认结果由后台任务写回
    pub async fn submit(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.phase != TradePhase::Editing {
            return Err(SignalsError::InvalidInput(format!(
                "cannot submit in phase {:?}",
                state.phase
            )));
        }
        let request = TradeRequest {
            token_symbol: state.token_symbol.clone(),
            amount: state.amount.clone(),
            action: state.action,
        };
        request.validate()?;

        state.phase = TradePhase::Submitting;
        state.generation += 1;
        let generation = state.generation;
        drop(state);

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                result = service.submit_trade(&request) => result,
            };

            let mut state = state.lock().await;
            if state.generation != generation || state.phase != TradePhase::Submitting {
                debug!("丢弃过期的成交结果: {}", result.short_hash);
                return;
            }
            state.result = Some(result);
            state.phase = TradePhase::Confirmed;
        });

        Ok(())
    }

    pub async fn close(&self) {
        self.cancel.cancel();
        let mut state = self.state.lock().await;
        state.phase = TradePhase::Closed;
        state.generation += 1;
    }
}

impl Drop for TradeDialog {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::repository::AlertRepository;
    use std::time::Duration;
    use tokio::sync::broadcast;
    use tokio_test::{assert_err, assert_ok};

    fn dialog(delay_ms: u64) -> TradeDialog {
        let (sender, _) = broadcast::channel(16);
        let service = Arc::new(TokenService::new(
            SimulationConfig::with_delay(delay_ms),
            Arc::new(AlertRepository::new()),
            sender,
        ));
        TradeDialog::open(service, "mona", TradeAction::Buy)
    }

    #[tokio::test]
    async fn test_submit_confirms() {
        let dialog = dialog(10);
        assert_ok!(dialog.set_amount(" 100 ").await);
        assert_ok!(dialog.submit().await);
        assert_eq!(dialog.snapshot().await.phase, TradePhase::Submitting);
        assert_err!(dialog.set_amount("5").await);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let state = dialog.snapshot().await;
        assert_eq!(state.phase, TradePhase::Confirmed);
        let result = state.result.unwrap();
        assert!(result.success);
        assert_eq!(result.amount, "100");
        assert_eq!(result.token_symbol, "MONA");
    }

    #[tokio::test]
    async fn test_invalid_amount_rejected() {
        let dialog = dialog(0);
        assert_err!(dialog.submit().await);
        assert_ok!(dialog.set_amount("abc").await);
        assert_err!(dialog.submit().await);
        assert_ok!(dialog.set_amount("-1").await);
        assert_err!(dialog.submit().await);
        assert_eq!(dialog.snapshot().await.phase, TradePhase::Editing);
    }

    #[tokio::test]
    async fn test_close_while_submitting_discards_result() {
        let dialog = dialog(50);
        assert_ok!(dialog.set_amount("1").await);
        assert_ok!(dialog.submit().await);
        dialog.close().await;

        tokio::time::sleep(Duration::from_millis(200)).await;
        let state = dialog.snapshot().await;
        assert_eq!(state.phase, TradePhase::Closed);
        assert!(state.result.is_none());
    }
}
