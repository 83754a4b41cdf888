//! 核心中间件模块

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Instant};
use tracing::{info, warn};

use super::error::CoreError;

/// 携带共享密钥的请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// 全局共享的 API 密钥
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        &*self.0 == candidate
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let timestamp = chrono::Utc::now().to_rfc3339();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        "{} - {} {} - {} - {}ms",
        timestamp,
        method,
        path,
        status,
        duration.as_millis()
    );

    response
}

/// API 密钥校验中间件
///
/// 缺少请求头或密钥不匹配时直接返回 401，不会调用后续处理器。
pub async fn require_api_key(
    State(api_key): State<ApiKey>,
    req: Request,
    next: Next,
) -> Result<Response, CoreError> {
    let authorized = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|key| api_key.matches(key));

    if !authorized {
        warn!("拒绝未认证请求: {} {}", req.method(), req.uri().path());
        return Err(CoreError::Unauthorized);
    }

    Ok(next.run(req).await)
}
