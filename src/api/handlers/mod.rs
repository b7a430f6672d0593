pub mod alert_handlers;
pub mod social_handlers;
pub mod status_handlers;
pub mod token_handlers;
pub mod trade_handlers;
pub mod view_handlers;
pub mod wallet_handlers;

pub use alert_handlers::*;
pub use social_handlers::*;
pub use status_handlers::*;
pub use token_handlers::*;
pub use trade_handlers::*;
pub use view_handlers::*;
pub use wallet_handlers::*;

use crate::error::SignalsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub type HandlerResult = Result<Response, SignalsError>;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Response {
        let response = Self {
            success: true,
            data: Some(data),
            message: None,
        };
        (StatusCode::OK, Json(response)).into_response()
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, message: String) -> Response {
        let response = Self {
            success: false,
            data: None,
            message: Some(message),
        };
        (status, Json(response)).into_response()
    }
}

impl SignalsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignalsError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            SignalsError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            SignalsError::DataFetch(_) => StatusCode::BAD_GATEWAY,
            SignalsError::NotFound(_) => StatusCode::NOT_FOUND,
            SignalsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SignalsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("请求失败: {}", self);
        } else {
            tracing::debug!("请求被拒绝: {}", self);
        }
        ApiResponse::<()>::error(status, self.to_string())
    }
}
