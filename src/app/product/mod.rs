//! 产品管理应用

pub mod handler;
pub mod model;
pub mod service;
pub mod store;
pub mod validator;

use axum::{
    extract::FromRef,
    middleware,
    routing::get,
    Router,
};

use crate::core::middleware::{require_api_key, ApiKey};
use service::ProductService;
use store::ProductStore;

pub const API_PREFIX: &str = "/api/products";

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub api_key: ApiKey,
}

impl AppState {
    /// 使用启动示例数据构造状态
    pub fn seeded(api_key: ApiKey) -> Self {
        Self::with_store(ProductStore::seeded(), api_key)
    }

    pub fn with_store(store: ProductStore, api_key: ApiKey) -> Self {
        Self {
            product_service: ProductService::new(store),
            api_key,
        }
    }
}

impl FromRef<AppState> for ApiKey {
    fn from_ref(state: &AppState) -> Self {
        state.api_key.clone()
    }
}

/// 产品路由，全部受 API 密钥保护
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            API_PREFIX,
            get(handler::list_products).post(handler::create_product),
        )
        .route("/api/products/search", get(handler::search_products))
        .route("/api/products/stats", get(handler::product_stats))
        .route(
            "/api/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state)
}
