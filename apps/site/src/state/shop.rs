//! # Shop State
//!
//! The catalog plus the active category filter.
//!
//! The visible list is kept as indices into the catalog and only recomputed
//! when the filter actually changes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::debug;

use clinivet_core::catalog::{Catalog, CategoryFilter};
use clinivet_core::error::CoreResult;
use clinivet_core::Product;

pub const EMPTY_CATEGORY_MESSAGE: &str = "No se encontraron productos en esta categoria.";

/// "Mostrando N productos".
pub fn count_label(count: usize) -> String {
    format!("Mostrando {} productos", count)
}

/// One button of the category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub code: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// What the product grid renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSnapshot {
    pub filter: CategoryFilter,
    pub products: Vec<Product>,
    pub count_label: String,
    /// Set when the filter matches nothing.
    pub empty_message: Option<&'static str>,
}

struct FilterView {
    filter: CategoryFilter,
    visible: Vec<usize>,
}

impl FilterView {
    fn compute(catalog: &Catalog, filter: CategoryFilter) -> Self {
        let visible = catalog
            .products()
            .iter()
            .enumerate()
            .filter(|(_, product)| filter.matches(product))
            .map(|(index, _)| index)
            .collect();
        FilterView { filter, visible }
    }
}

pub struct ShopState {
    catalog: Arc<Catalog>,
    view: Mutex<FilterView>,
}

impl ShopState {
    /// Starts on "Todos".
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let view = FilterView::compute(&catalog, CategoryFilter::All);
        ShopState {
            catalog,
            view: Mutex::new(view),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FilterView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> CategoryFilter {
        self.lock().filter
    }

    /// Selects a category.
    pub fn set_filter(&self, filter: CategoryFilter) -> ShopSnapshot {
        let mut view = self.lock();
        if view.filter != filter {
            *view = FilterView::compute(&self.catalog, filter);
            debug!(filter = %filter, visible = view.visible.len(), "Category filter changed");
        }
        self.build_snapshot(&view)
    }

    pub fn snapshot(&self) -> ShopSnapshot {
        self.build_snapshot(&self.lock())
    }

    /// Category bar with the active entry marked.
    pub fn categories(&self) -> Vec<CategoryOption> {
        let active = self.filter();
        CategoryFilter::options()
            .into_iter()
            .map(|option| CategoryOption {
                code: option.as_str(),
                label: option.label(),
                active: option == active,
            })
            .collect()
    }

    /// Product by id, for the product modal and add-to-cart.
    pub fn product(&self, id: u32) -> CoreResult<Product> {
        self.catalog.require(id).cloned()
    }

    fn build_snapshot(&self, view: &FilterView) -> ShopSnapshot {
        let products: Vec<Product> = view
            .visible
            .iter()
            .filter_map(|&index| self.catalog.products().get(index))
            .cloned()
            .collect();

        ShopSnapshot {
            filter: view.filter,
            count_label: count_label(products.len()),
            empty_message: products.is_empty().then_some(EMPTY_CATEGORY_MESSAGE),
            products,
        }
    }
}
