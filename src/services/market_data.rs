use crate::config::MarketDataConfig;
use crate::error::{Result, SignalsError};
use crate::types::{PriceChange, TokenProfile};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

const PROFILE_PATH: &str = "/token-profiles/latest/v1";

/// 接口里的数字有时是字符串有时是数字
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Text(String),
    Number(serde_json::Number),
}

impl RawNumber {
    fn parse(&self, field: &str) -> Result<f64> {
        let text = match self {
            RawNumber::Text(s) => s.trim().to_string(),
            RawNumber::Number(n) => n.to_string(),
        };

        let decimal = Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|e| SignalsError::DataFetch(format!("{} 解析失败 '{}': {}", field, text, e)))?;

        decimal
            .to_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SignalsError::DataFetch(format!("{} 超出范围: {}", field, text)))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BaseToken {
    name: String,
    symbol: String,
    address: String,
    #[serde(default)]
    decimals: Option<u8>,
    #[serde(default)]
    logo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WindowChange {
    h1: RawNumber,
    h6: RawNumber,
    h24: RawNumber,
}

#[derive(Debug, Deserialize)]
struct Volume {
    h24: RawNumber,
}

#[derive(Debug, Deserialize)]
struct Liquidity {
    usd: RawNumber,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pair {
    chain_id: String,
    pair_address: String,
    base_token: BaseToken,
    price_usd: RawNumber,
    price_change: WindowChange,
    volume: Volume,
    liquidity: Liquidity,
    fdv: RawNumber,
}

#[derive(Debug, Deserialize)]
struct PairsResponse {
    #[serde(default)]
    pairs: Option<Vec<Pair>>,
}

impl Pair {
    fn into_profile(self) -> Result<TokenProfile> {
        let price = self.price_usd.parse("priceUsd")?;
        if price <= 0.0 {
            return Err(SignalsError::DataFetch(format!("无效的价格数据: {}", price)));
        }

        Ok(TokenProfile {
            symbol: self.base_token.symbol,
            name: self.base_token.name,
            address: self.base_token.address,
            chain_id: self.chain_id,
            decimals: self.base_token.decimals.unwrap_or(18),
            logo_url: self.base_token.logo_url,
            price,
            price_change: PriceChange {
                h1: self.price_change.h1.parse("priceChange.h1")?,
                h6: self.price_change.h6.parse("priceChange.h6")?,
                h24: self.price_change.h24.parse("priceChange.h24")?,
            },
            volume: self.volume.h24.parse("volume.h24")?,
            liquidity: self.liquidity.usd.parse("liquidity.usd")?,
            fdv: self.fdv.parse("fdv")?,
            pair_address: self.pair_address,
        })
    }
}

/// 解析行情接口返回体，只取第一个交易对；没有交易对返回 None
pub fn parse_profile_response(body: &str) -> Result<Option<TokenProfile>> {
    let response: PairsResponse = serde_json::from_str(body)?;
    match response.pairs.and_then(|pairs| pairs.into_iter().next()) {
        Some(pair) => pair.into_profile().map(Some),
        None => Ok(None),
    }
}

/// DexScreener 行情客户端
#[derive(Clone)]
pub struct DexScreenerClient {
    client: reqwest::Client,
    base_url: String,
}

impl DexScreenerClient {
    pub fn new(config: &MarketDataConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SignalsError::Configuration(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_token_profile(
        &self,
        token_address: &str,
        chain_id: &str,
    ) -> Result<Option<TokenProfile>> {
        let url = format!("{}{}", self.base_url, PROFILE_PATH);
        debug!("请求行情资料: {} address={} chain={}", url, token_address, chain_id);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "SocialSignals/1.0")
            .query(&[("address", token_address), ("chainId", chain_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("行情接口返回错误状态: {}", response.status());
            return Err(SignalsError::DataFetch(format!(
                "API request failed with status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_profile_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "pairs": [{
            "chainId": "monad",
            "pairAddress": "0xpair",
            "baseToken": {
                "name": "Monad",
                "symbol": "MONA",
                "address": "0xtoken",
                "decimals": 18,
                "logoUrl": "https://example.com/mona.png"
            },
            "priceUsd": "0.234",
            "priceChange": { "h1": "0.5", "h6": 3.2, "h24": "-12.5" },
            "volume": { "h24": "2100000" },
            "liquidity": { "usd": 1500000 },
            "fdv": "25000000"
        }]
    }"#;

    #[test]
    fn test_parse_profile() {
        let profile = parse_profile_response(SAMPLE).unwrap().unwrap();
        assert_eq!(profile.symbol, "MONA");
        assert_eq!(profile.pair_address, "0xpair");
        assert_eq!(profile.price, 0.234);
        assert_eq!(profile.price_change.h6, 3.2);
        assert_eq!(profile.price_change.h24, -12.5);
        assert_eq!(profile.liquidity, 1_500_000.0);
        assert_eq!(profile.logo_url.as_deref(), Some("https://example.com/mona.png"));
        assert!(profile.is_valid());
    }

    #[test]
    fn test_empty_pairs_is_absent() {
        assert!(parse_profile_response(r#"{"pairs": []}"#).unwrap().is_none());
        assert!(parse_profile_response(r#"{"pairs": null}"#).unwrap().is_none());
        assert!(parse_profile_response(r#"{}"#).unwrap().is_none());
    }

    #[test]
    fn test_malformed_number_is_failure() {
        let body = SAMPLE.replace("\"0.234\"", "\"abc\"");
        let err = parse_profile_response(&body).unwrap_err();
        assert!(matches!(err, SignalsError::DataFetch(_)));
        assert!(err.to_string().contains("priceUsd"));
    }

    #[test]
    fn test_non_positive_price_is_failure() {
        let body = SAMPLE.replace("\"0.234\"", "\"0\"");
        assert!(matches!(
            parse_profile_response(&body),
            Err(SignalsError::DataFetch(_))
        ));
    }

    #[test]
    fn test_scientific_price() {
        let body = SAMPLE.replace("\"0.234\"", "\"4.2e-6\"");
        let profile = parse_profile_response(&body).unwrap().unwrap();
        assert!((profile.price - 0.0000042).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_json_is_failure() {
        assert!(matches!(
            parse_profile_response("<html>"),
            Err(SignalsError::DataFetch(_))
        ));
    }
}
