//! 产品数据模型

use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// 保留原始 JSON 数值表示，`25` 不会变成 `25.0`
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

/// 通过校验的创建/更新请求体
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    pub fn from_input(id: String, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// 列表查询参数
///
/// `page`/`limit` 以字符串接收，解析失败时回退到默认值而不是拒绝请求。
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn page(&self) -> Option<usize> {
        parse_positive(self.page.as_deref())
    }

    pub fn limit(&self) -> Option<usize> {
        parse_positive(self.limit.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// 分类统计结果
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub count_by_category: std::collections::BTreeMap<String, usize>,
}

/// 只取开头的数字部分，`2abc` 解析为 2；零、负数和非数字返回 `None`
fn parse_positive(raw: Option<&str>) -> Option<usize> {
    let s = raw?.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse::<usize>().ok().filter(|n| *n > 0)
}
