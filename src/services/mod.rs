pub mod alert_feed;
pub mod api_service;
pub mod market_data;
pub mod token_service;

pub use alert_feed::AlertFeedService;
pub use api_service::ApiService;
pub use market_data::DexScreenerClient;
pub use token_service::TokenService;
