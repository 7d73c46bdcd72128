use crate::domain::common::RecordMetadata;
use crate::enums::CatalogKind;
use crate::shared::filter::{Filter, NumericRange, SortKey};
use serde::{Deserialize, Serialize};

/// Позиция каталога: товар или услуга
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: CatalogKind,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    pub price: f64,
    /// Только для услуг
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Только для товаров
    #[serde(default)]
    pub stock: Option<f64>,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

/// Категория каталога (дерево через `parent_id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub children_count: u32,
    #[serde(default)]
    pub items_count: u32,
}

impl Category {
    pub fn has_children(&self) -> bool {
        self.children_count > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSortBy {
    #[default]
    Name,
    Price,
    CreatedAt,
}

impl SortKey for CatalogSortBy {
    fn key(self) -> &'static str {
        match self {
            CatalogSortBy::Name => "name",
            CatalogSortBy::Price => "price",
            CatalogSortBy::CreatedAt => "created_at",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CatalogSortBy::Name => "Название",
            CatalogSortBy::Price => "Цена",
            CatalogSortBy::CreatedAt => "Дата создания",
        }
    }

    fn all() -> &'static [Self] {
        &[
            CatalogSortBy::Name,
            CatalogSortBy::Price,
            CatalogSortBy::CreatedAt,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySortBy {
    #[default]
    Name,
}

impl SortKey for CategorySortBy {
    fn key(self) -> &'static str {
        "name"
    }

    fn label(self) -> &'static str {
        "Название"
    }

    fn all() -> &'static [Self] {
        &[CategorySortBy::Name]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogFilterExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "NumericRange::is_empty")]
    pub price: NumericRange,
}

/// `parent_id: null` означает корень дерева, поэтому поле сериализуется всегда
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryFilterExtra {
    #[serde(default)]
    pub parent_id: Option<i64>,
}

pub type CatalogFilter = Filter<CatalogSortBy, CatalogFilterExtra>;
pub type CategoryFilter = Filter<CategorySortBy, CategoryFilterExtra>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::request::CollectionRequest;

    #[test]
    fn test_item_kind_is_tagged() {
        let raw = r#"{
            "id": 12,
            "type": "service",
            "name": "Замена экрана",
            "price": 3500.0,
            "duration_minutes": 60,
            "created_at": "2024-03-15T14:02:26Z",
            "updated_at": "2024-03-15T14:02:26Z"
        }"#;
        let item: CatalogItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.kind, CatalogKind::Service);
        assert_eq!(item.duration_minutes, Some(60));
        assert_eq!(item.stock, None);
    }

    #[test]
    fn test_root_category_request_sends_null_parent() {
        let filter = CategoryFilter::default();
        let body = serde_json::to_value(CollectionRequest::compose(1, &filter, 1, 50)).unwrap();
        assert!(body["filters"]["parent_id"].is_null());
        assert!(body["filters"].as_object().unwrap().contains_key("parent_id"));
    }
}
