//! # Catalog Commands
//!
//! Product grid, category bar and product lookup.

use tracing::debug;

use clinivet_core::catalog::CategoryFilter;
use clinivet_core::Product;

use crate::error::ApiError;
use crate::state::{CategoryOption, ShopSnapshot, ShopState};

/// Products under the active filter.
pub fn get_products(shop: &ShopState) -> ShopSnapshot {
    debug!("get_products command");
    shop.snapshot()
}

/// Selects a category by code: `"todos"`, `"alimentos"`, `"medicinas"`,
/// `"accesorios"` or `"higiene"`.
pub fn set_category_filter(shop: &ShopState, category: &str) -> Result<ShopSnapshot, ApiError> {
    debug!(category, "set_category_filter command");

    let filter: CategoryFilter = category.parse()?;
    Ok(shop.set_filter(filter))
}

pub fn get_categories(shop: &ShopState) -> Vec<CategoryOption> {
    debug!("get_categories command");
    shop.categories()
}

pub fn get_product(shop: &ShopState, product_id: u32) -> Result<Product, ApiError> {
    debug!(product_id, "get_product command");
    Ok(shop.product(product_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use clinivet_core::catalog::Catalog;
    use clinivet_core::ProductCategory;
    use std::sync::Arc;

    fn shop() -> ShopState {
        ShopState::new(Arc::new(Catalog::builtin().unwrap()))
    }

    #[test]
    fn test_filter_round() {
        let shop = shop();
        let total = get_products(&shop).products.len();

        let medicines = set_category_filter(&shop, "medicinas").unwrap();
        assert!(medicines
            .products
            .iter()
            .all(|p| p.category == ProductCategory::Medicinas));
        assert_eq!(
            medicines.count_label,
            format!("Mostrando {} productos", medicines.products.len())
        );

        let all = set_category_filter(&shop, "todos").unwrap();
        assert_eq!(all.products.len(), total);
    }

    #[test]
    fn test_unknown_category_keeps_filter() {
        let shop = shop();
        set_category_filter(&shop, "higiene").unwrap();

        let err = set_category_filter(&shop, "juguetes").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(shop.filter(), CategoryFilter::Only(ProductCategory::Higiene));
    }

    #[test]
    fn test_get_product() {
        let shop = shop();
        let id = shop.catalog().products()[3].id;
        assert_eq!(get_product(&shop, id).unwrap().id, id);
        assert_eq!(get_product(&shop, 0).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_categories_serialize() {
        let json = serde_json::to_value(get_categories(&shop())).unwrap();
        assert_eq!(json[0]["code"], "todos");
        assert_eq!(json[0]["label"], "Todos");
        assert_eq!(json[0]["active"], true);
    }
}
