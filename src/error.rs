use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalsError {
    /// 缺少外部能力，例如没有钱包 provider
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// 用户拒绝了请求
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Data fetch error: {0}")]
    DataFetch(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for SignalsError {
    fn from(err: reqwest::Error) -> Self {
        SignalsError::DataFetch(err.to_string())
    }
}

impl From<serde_json::Error> for SignalsError {
    fn from(err: serde_json::Error) -> Self {
        SignalsError::DataFetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SignalsError>;
