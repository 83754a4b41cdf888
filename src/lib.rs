//! # Product API
//!
//! 基于 Axum 的内存产品 CRUD 服务：
//! - 请求日志与 API 密钥校验中间件
//! - 产品列表的分类过滤、分页、名称搜索与分类统计
//! - 统一的错误映射，所有失败都渲染为 `{"error": ...}`

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::app::product::{self, handler, AppState};
use crate::core::{error::CoreError, middleware::request_logging_middleware};
use crate::core::middleware::ApiKey;
use crate::infrastructure::config::AppConfig;

/// 按配置构造应用，存储使用启动示例数据
pub fn build_app(config: &AppConfig) -> Router {
    build_app_with_state(AppState::seeded(ApiKey::new(config.api_key.as_str())))
}

/// 使用给定状态构造应用，测试中每个用例持有独立的存储
pub fn build_app_with_state(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handler::welcome))
        .merge(product::routes(state))
        .method_not_allowed_fallback(handler::method_not_allowed)
        .fallback(handler::fallback);

    with_layers(routes)
}

/// 为路由加上 panic 捕获、请求日志和 trace 层
pub fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
}

/// 处理器 panic 时统一返回 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    CoreError::Internal(detail).into_response()
}
