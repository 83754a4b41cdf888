//! 产品处理器

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use super::{
    model::{CategoryStats, ListQuery, Product, ProductInput, SearchQuery},
    AppState,
};
use crate::core::{
    error::CoreError,
    extract::{PathParam, QueryParams, ValidatedJson},
    response::{DeletedResponse, PageResponse, SearchResponse},
};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn list_products(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListQuery>,
) -> Json<PageResponse<Product>> {
    let page = state
        .product_service
        .list(query.category_filter(), query.page(), query.limit())
        .await;

    Json(PageResponse {
        total: page.total,
        page: page.page,
        limit: page.limit,
        products: page.products,
    })
}

pub async fn search_products(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Json<SearchResponse<Product>>, CoreError> {
    let products = state.product_service.search(query.name.as_deref()).await?;
    Ok(Json(SearchResponse::new(products)))
}

pub async fn product_stats(State(state): State<AppState>) -> Json<CategoryStats> {
    Json(state.product_service.stats().await)
}

pub async fn get_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.get_product(&id).await?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> (StatusCode, Json<Product>) {
    let product = state.product_service.create_product(input).await;
    (StatusCode::CREATED, Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.update_product(&id, input).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<DeletedResponse<Product>>, CoreError> {
    let product = state.product_service.delete_product(&id).await?;
    Ok(Json(DeletedResponse::new(product)))
}

pub async fn fallback() -> CoreError {
    CoreError::not_found()
}

pub async fn method_not_allowed() -> CoreError {
    CoreError::MethodNotAllowed
}
