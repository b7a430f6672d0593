use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use social_signals::{
    config::{Config, MarketDataConfig, SimulationConfig},
    services::{DexScreenerClient, TokenService},
    AlertRepository, SignalsError,
};
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileQuery {
    address: String,
    chain_id: String,
}

const PAIR_BODY: &str = r#"{
    "pairs": [{
        "chainId": "monad",
        "pairAddress": "0xlivepair",
        "baseToken": {
            "name": "Monad",
            "symbol": "MONA",
            "address": "0x1234567890abcdef1234567890abcdef12345678",
            "decimals": 18
        },
        "priceUsd": "0.25",
        "priceChange": { "h1": "1.0", "h6": "2.0", "h24": "-3.0" },
        "volume": { "h24": "1000" },
        "liquidity": { "usd": "2000" },
        "fdv": "3000"
    }]
}"#;

// 按地址返回不同结果：MONA 正常，DEGEN 没有交易对，其余 500
async fn token_profiles(Query(query): Query<ProfileQuery>) -> impl IntoResponse {
    assert_eq!(query.chain_id, "monad");
    match query.address.as_str() {
        "0x1234567890abcdef1234567890abcdef12345678" => (StatusCode::OK, PAIR_BODY.to_string()),
        "0xabcdef1234567890abcdef1234567890abcdef12" => {
            (StatusCode::OK, r#"{"pairs": []}"#.to_string())
        }
        "0x7890abcdef1234567890abcdef1234567890abcd" => {
            (StatusCode::OK, PAIR_BODY.replace("\"0.25\"", "\"n/a\""))
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
    }
}

async fn spawn_stub() -> String {
    let app = Router::new().route("/token-profiles/latest/v1", get(token_profiles));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", address)
}

fn market_config(base_url: String) -> MarketDataConfig {
    MarketDataConfig {
        enabled: true,
        base_url,
        timeout_secs: 5,
        chain_id: "monad".to_string(),
    }
}

#[tokio::test]
async fn client_parses_profile() {
    let client = DexScreenerClient::new(&market_config(spawn_stub().await)).unwrap();
    let profile = client
        .fetch_token_profile("0x1234567890abcdef1234567890abcdef12345678", "monad")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(profile.symbol, "MONA");
    assert_eq!(profile.price, 0.25);
    assert_eq!(profile.pair_address, "0xlivepair");
    assert_eq!(profile.price_change.h24, -3.0);
}

#[tokio::test]
async fn client_reports_absent_and_failures() {
    let client = DexScreenerClient::new(&market_config(spawn_stub().await)).unwrap();

    let absent = client
        .fetch_token_profile("0xabcdef1234567890abcdef1234567890abcdef12", "monad")
        .await
        .unwrap();
    assert!(absent.is_none());

    let err = client.fetch_token_profile("0xdead", "monad").await.unwrap_err();
    assert!(matches!(err, SignalsError::DataFetch(_)));
    assert!(err.to_string().contains("500"));

    let err = client
        .fetch_token_profile("0x7890abcdef1234567890abcdef1234567890abcd", "monad")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("priceUsd"));
}

#[tokio::test]
async fn service_prefers_live_data_and_degrades_to_mock() {
    let mut config = Config::default();
    config.simulation = SimulationConfig::without_delays();
    config.market_data = market_config(spawn_stub().await);

    let (sender, _) = broadcast::channel(8);
    let service = TokenService::from_config(&config, Arc::new(AlertRepository::new()), sender).unwrap();
    assert!(service.live_market_data());

    let live = service.resolve_profile("MONA").await.unwrap();
    assert_eq!(live.price, 0.25);

    // 行情接口没有交易对时回落到模拟数据
    let mock = service.resolve_profile("DEGEN").await.unwrap();
    assert_eq!(mock.price, 0.025);

    // 未知代币用零地址请求，接口返回 500
    let err = service.resolve_profile("NOPE").await.unwrap_err();
    assert!(matches!(err, SignalsError::DataFetch(_)));
}
