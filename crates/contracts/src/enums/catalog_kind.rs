use serde::{Deserialize, Serialize};

/// Вид позиции каталога. Товары и услуги живут в параллельных коллекциях
/// с одинаковой формой, различаются только эндпоинтами и подписями.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Product,
    Service,
}

impl CatalogKind {
    /// Код для URL экрана
    pub fn code(&self) -> &'static str {
        match self {
            CatalogKind::Product => "products",
            CatalogKind::Service => "services",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogKind::Product => "Товары",
            CatalogKind::Service => "Услуги",
        }
    }

    /// Коллекция позиций
    pub fn items_path(&self) -> &'static str {
        match self {
            CatalogKind::Product => "/api/products",
            CatalogKind::Service => "/api/services",
        }
    }

    /// Коллекция категорий
    pub fn categories_path(&self) -> &'static str {
        match self {
            CatalogKind::Product => "/api/product-categories",
            CatalogKind::Service => "/api/service-categories",
        }
    }

    pub fn all() -> Vec<CatalogKind> {
        vec![CatalogKind::Product, CatalogKind::Service]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "products" => Some(CatalogKind::Product),
            "services" => Some(CatalogKind::Service),
            _ => None,
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in CatalogKind::all() {
            assert_eq!(CatalogKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(CatalogKind::from_code("workers"), None);
    }

    #[test]
    fn test_paths_are_distinct() {
        assert_ne!(
            CatalogKind::Product.items_path(),
            CatalogKind::Service.items_path()
        );
        assert_eq!(
            serde_json::to_string(&CatalogKind::Service).unwrap(),
            "\"service\""
        );
    }
}
