//! 核心错误处理模块
//!
//! 所有处理器、提取器和中间件都返回 `CoreError`，
//! 由 `IntoResponse` 统一渲染为 `{"error": ...}` JSON 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unauthorized - Invalid or missing API key")]
    Unauthorized,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// 默认的 404 错误
    pub fn not_found() -> Self {
        CoreError::NotFound("Resource not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            // 内部错误细节只写日志，不返回给客户端
            CoreError::Internal(detail) => {
                error!("内部错误: {}", detail);
                INTERNAL_SERVER_ERROR.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
