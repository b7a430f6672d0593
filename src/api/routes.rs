use super::{handlers, websocket, ApiState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Alert routes
        .route("/api/alerts", get(handlers::list_alerts))
        .route("/api/alerts/:id", get(handlers::get_alert))
        .route("/api/watchlist", get(handlers::list_watchlist))
        .route("/api/trending", get(handlers::list_trending))
        .route("/api/traders/:username", get(handlers::get_trader))

        // Token routes
        .route("/api/tokens/search", get(handlers::search_tokens))
        .route("/api/tokens/:symbol/profile", get(handlers::get_token_profile))
        .route("/api/tokens/:symbol/chart", get(handlers::get_token_chart))
        .route("/api/pairs/:pair_address/chart", get(handlers::get_pair_chart))
        .route("/api/pairs/:pair_address/trades", get(handlers::get_pair_trades))

        // Trade routes
        .route("/api/trades/confirm", post(handlers::confirm_trade))

        // Wallet routes
        .route(
            "/api/wallet",
            get(handlers::get_wallet)
                .post(handlers::connect_wallet)
                .delete(handlers::disconnect_wallet),
        )

        // View routes - 弹窗状态
        .route("/api/views/coin-detail", post(handlers::open_coin_detail))
        .route("/api/views/trade", post(handlers::open_trade_dialog))
        .route("/api/views/:id", get(handlers::get_view).delete(handlers::close_view))
        .route("/api/views/:id/tab", post(handlers::select_view_tab))
        .route("/api/views/:id/timeframe", post(handlers::set_view_timeframe))
        .route("/api/views/:id/retry", post(handlers::retry_view))
        .route("/api/views/:id/dismiss", post(handlers::dismiss_view))
        .route("/api/views/:id/amount", post(handlers::set_trade_amount))
        .route("/api/views/:id/submit", post(handlers::submit_trade_dialog))

        // Social routes
        .route("/api/friends", get(handlers::list_friends))
        .route("/api/friends/:id/follow", post(handlers::toggle_follow))
        .route("/api/settings", get(handlers::get_settings).put(handlers::update_settings))
        .route("/api/settings/users/:id/toggle", post(handlers::toggle_settings_user))

        // Status routes
        .route("/api/status", get(handlers::get_status))

        // WebSocket
        .route("/api/ws", get(websocket::websocket_handler))

        .layer(CorsLayer::permissive())
        .with_state(state)
}
