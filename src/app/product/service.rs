//! 产品业务服务
//!
//! 存储由一把读写锁保护：读操作共享，写操作互斥，
//! 保证同一时刻最多只有一个修改在进行。

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{
    model::{CategoryStats, Product, ProductInput},
    store::{Page, ProductStore},
};
use crate::core::error::CoreError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const SEARCH_NAME_REQUIRED: &str = "Name query parameter is required";

#[derive(Clone, Default)]
pub struct ProductService {
    store: Arc<RwLock<ProductStore>>,
}

impl ProductService {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn list(
        &self,
        category: Option<&str>,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Page {
        self.store.read().await.list(category, page, limit)
    }

    pub async fn search(&self, name: Option<&str>) -> Result<Vec<Product>, CoreError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CoreError::Validation(SEARCH_NAME_REQUIRED.to_string()))?;
        Ok(self.store.read().await.search(name))
    }

    pub async fn stats(&self) -> CategoryStats {
        CategoryStats {
            count_by_category: self.store.read().await.count_by_category(),
        }
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, CoreError> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(not_found)
    }

    pub async fn create_product(&self, input: ProductInput) -> Product {
        let product = Product::from_input(Uuid::new_v4().to_string(), input);
        self.store.write().await.insert(product.clone());
        info!("✅ 已创建产品 {}", product.id);
        product
    }

    pub async fn update_product(&self, id: &str, input: ProductInput) -> Result<Product, CoreError> {
        let product = self
            .store
            .write()
            .await
            .replace(id, input)
            .ok_or_else(not_found)?;
        info!("已更新产品 {}", id);
        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> Result<Product, CoreError> {
        let product = self.store.write().await.remove(id).ok_or_else(not_found)?;
        info!("已删除产品 {}", id);
        Ok(product)
    }

    /// 当前存储快照
    pub async fn snapshot(&self) -> Vec<Product> {
        self.store.read().await.all().to_vec()
    }
}

fn not_found() -> CoreError {
    CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn input() -> ProductInput {
        ProductInput {
            name: "Mouse".to_string(),
            description: "Wireless".to_string(),
            price: Number::from(25),
            category: "electronics".to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = ProductService::new(ProductStore::seeded());
        let created = service.create_product(input()).await;
        assert!(!created.id.is_empty());

        let fetched = service.get_product(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(service.snapshot().await.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let service = ProductService::new(ProductStore::seeded());
        for result in [
            service.get_product("999").await,
            service.update_product("999", input()).await,
            service.delete_product("999").await,
        ] {
            match result {
                Err(CoreError::NotFound(msg)) => assert_eq!(msg, PRODUCT_NOT_FOUND),
                other => panic!("expected not found, got {:?}", other),
            }
        }
        assert_eq!(service.snapshot().await.len(), 3);
    }

    #[tokio::test]
    async fn test_search_requires_name() {
        let service = ProductService::new(ProductStore::seeded());
        assert!(matches!(
            service.search(None).await,
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            service.search(Some("")).await,
            Err(CoreError::Validation(_))
        ));
        assert_eq!(service.search(Some("lap")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_kept() {
        let service = ProductService::new(ProductStore::new());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.create_product(input()).await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(service.snapshot().await.len(), 32);
    }
}
