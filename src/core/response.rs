//! 核心响应处理模块

use serde::Serialize;

/// 分页列表响应
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub products: Vec<T>,
}

/// 搜索结果响应
#[derive(Debug, Serialize)]
pub struct SearchResponse<T> {
    pub total: usize,
    pub products: Vec<T>,
}

impl<T> SearchResponse<T> {
    pub fn new(products: Vec<T>) -> Self {
        Self {
            total: products.len(),
            products,
        }
    }
}

/// 删除成功响应，附带被删除的记录
#[derive(Debug, Serialize)]
pub struct DeletedResponse<T> {
    pub message: String,
    pub product: T,
}

impl<T> DeletedResponse<T> {
    pub fn new(product: T) -> Self {
        Self {
            message: "Product deleted".to_string(),
            product,
        }
    }
}
