//! 内存产品存储
//!
//! 按插入顺序保存产品，提供过滤、分页、搜索与统计查询。

use std::collections::BTreeMap;

use serde_json::Number;

use super::model::{Product, ProductInput};

/// 一页查询结果
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub products: Vec<Product>,
}

#[derive(Debug, Default, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 启动时的三条示例数据
    pub fn seeded() -> Self {
        let sample = |id: &str, name: &str, description: &str, price: u64, category: &str, in_stock| {
            Product {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                price: Number::from(price),
                category: category.to_string(),
                in_stock,
            }
        };

        Self {
            products: vec![
                sample(
                    "1",
                    "Laptop",
                    "High-performance laptop with 16GB RAM",
                    1200,
                    "electronics",
                    true,
                ),
                sample(
                    "2",
                    "Smartphone",
                    "Latest model with 128GB storage",
                    800,
                    "electronics",
                    true,
                ),
                sample(
                    "3",
                    "Coffee Maker",
                    "Programmable coffee maker with timer",
                    50,
                    "kitchen",
                    false,
                ),
            ],
        }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// 按分类过滤后分页
    ///
    /// `page` 默认为 1，`limit` 默认为过滤后的总数；越界返回空页。
    pub fn list(&self, category: Option<&str>, page: Option<usize>, limit: Option<usize>) -> Page {
        let filtered: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| category.map_or(true, |c| p.in_category(c)))
            .collect();

        let total = filtered.len();
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(total);
        let start = page.saturating_sub(1).saturating_mul(limit);

        let products = filtered
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        Page {
            total,
            page,
            limit,
            products,
        }
    }

    /// 名称包含查询串（不区分大小写）
    pub fn search(&self, name: &str) -> Vec<Product> {
        let needle = name.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// 按小写分类计数
    pub fn count_by_category(&self) -> BTreeMap<String, usize> {
        let mut stats = BTreeMap::new();
        for product in &self.products {
            *stats.entry(product.category.to_lowercase()).or_insert(0) += 1;
        }
        stats
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// 原地整体替换，保留 id
    pub fn replace(&mut self, id: &str, input: ProductInput) -> Option<Product> {
        let slot = self.products.iter_mut().find(|p| p.id == id)?;
        *slot = Product::from_input(slot.id.clone(), input);
        Some(slot.clone())
    }

    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: "desc".to_string(),
            price: Number::from(10),
            category: category.to_string(),
            in_stock: true,
        }
    }

    fn store_of(size: usize) -> ProductStore {
        let mut store = ProductStore::new();
        for i in 0..size {
            store.insert(Product::from_input(i.to_string(), input(&format!("item {}", i), "misc")));
        }
        store
    }

    #[test]
    fn test_seeded_store() {
        let store = ProductStore::seeded();
        assert_eq!(store.all().len(), 3);
        assert_eq!(store.get("3").unwrap().name, "Coffee Maker");
    }

    #[test]
    fn test_list_defaults_to_everything() {
        let page = ProductStore::seeded().list(None, None, None);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 3);
        assert_eq!(page.products.len(), 3);
        assert_eq!(page.products[0].id, "1");
    }

    #[test]
    fn test_list_category_is_case_insensitive() {
        let page = ProductStore::seeded().list(Some("ELECTRONICS"), None, None);
        assert_eq!(page.total, 2);
        assert!(page.products.iter().all(|p| p.category == "electronics"));
    }

    #[test]
    fn test_pagination_lengths() {
        let n = 7;
        let store = store_of(n);
        for limit in 1..=8usize {
            for page in 1..=9usize {
                let result = store.list(None, Some(page), Some(limit));
                let expected = n.saturating_sub((page - 1) * limit).min(limit);
                assert_eq!(result.products.len(), expected, "page {} limit {}", page, limit);
                assert_eq!(result.total, n);
            }
        }
    }

    #[test]
    fn test_huge_page_is_empty() {
        let page = store_of(3).list(None, Some(usize::MAX), Some(usize::MAX));
        assert!(page.products.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_empty_filter_result_has_zero_limit() {
        let page = ProductStore::seeded().list(Some("garden"), None, None);
        assert_eq!(page.total, 0);
        assert_eq!(page.limit, 0);
        assert!(page.products.is_empty());
    }

    #[test]
    fn test_search_substring() {
        let store = ProductStore::seeded();
        let hits = store.search("PHONE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Smartphone");
        assert!(store.search("tablet").is_empty());
    }

    #[test]
    fn test_count_by_category() {
        let mut store = ProductStore::seeded();
        store.insert(Product::from_input("4".into(), input("Kettle", "Kitchen")));
        let stats = store.count_by_category();
        assert_eq!(stats.get("electronics"), Some(&2));
        assert_eq!(stats.get("kitchen"), Some(&2));
        assert_eq!(stats.values().sum::<usize>(), store.all().len());
    }

    #[test]
    fn test_replace_keeps_id_and_position() {
        let mut store = ProductStore::seeded();
        let updated = store.replace("2", input("Phone X", "mobile")).unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(store.all()[1], updated);
        assert!(store.replace("999", input("x", "y")).is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = ProductStore::seeded();
        let removed = store.remove("1").unwrap();
        assert_eq!(removed.name, "Laptop");
        assert_eq!(store.all().len(), 2);
        assert!(store.remove("1").is_none());
    }
}
