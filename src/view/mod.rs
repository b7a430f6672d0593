pub mod coin_detail;
pub mod registry;
pub mod trade_dialog;

pub use coin_detail::{ChartPanel, CoinDetailState, CoinDetailView, DetailTab, DialogPhase};
pub use registry::{ViewHandle, ViewRegistry, ViewSnapshot};
pub use trade_dialog::{TradeDialog, TradeDialogState, TradePhase};
