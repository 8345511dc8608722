//! # Product Catalog
//!
//! The shop's static product list and the category filter.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  data/products.json ──(include_str!)──► Catalog::builtin()             │
//! │                                               │                         │
//! │                                   validate ids, names, prices, ratings  │
//! │                                               │                         │
//! │                                               ▼                         │
//! │  CategoryFilter::All ───────┐           Vec<Product> (read-only)        │
//! │  CategoryFilter::Only(c) ───┴──► filter_products() ──► Vec<&Product>    │
//! │                                  (order preserved)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Product, ProductCategory};
use crate::validation::{validate_price, validate_product_name, validate_rating};

const BUILTIN_PRODUCTS: &str = include_str!("../data/products.json");

// =============================================================================
// Category Filter
// =============================================================================

/// The shop's active category selection.
///
/// Serialized as the Spanish code the UI host uses: `"todos"` or a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    /// Sentinel "todos": every product.
    #[default]
    All,
    /// A single category.
    Only(ProductCategory),
}

impl CategoryFilter {
    /// Wire code for the sentinel.
    pub const ALL_CODE: &'static str = "todos";

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_CODE,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Chip label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Every selectable filter, "todos" first.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProductCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Whether `product` passes this filter.
    #[inline]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_CODE {
            return Ok(CategoryFilter::All);
        }
        s.parse::<ProductCategory>()
            .map(CategoryFilter::Only)
            .map_err(|_| {
                ValidationError::not_allowed(
                    "category",
                    &["todos", "alimentos", "medicinas", "accesorios", "higiene"],
                )
            })
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl From<ProductCategory> for CategoryFilter {
    fn from(category: ProductCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Returns the products that pass `filter`, in their original order.
///
/// ## Example
/// ```rust
/// use clinivet_core::catalog::{filter_products, Catalog, CategoryFilter};
/// use clinivet_core::ProductCategory;
///
/// let catalog = Catalog::builtin().unwrap();
/// let all = filter_products(catalog.products(), CategoryFilter::All);
/// assert_eq!(all.len(), catalog.len());
///
/// let hygiene = filter_products(catalog.products(), ProductCategory::Higiene.into());
/// assert!(hygiene.iter().all(|p| p.category == ProductCategory::Higiene));
/// ```
pub fn filter_products(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads the product list shipped with the site.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN_PRODUCTS)
    }

    /// Parses and checks a JSON product list.
    ///
    /// ## Checks
    /// - ids are unique
    /// - names are present
    /// - prices (and original prices) are non-negative
    /// - ratings are within 0-5
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Builds a catalog from already-constructed products.
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProduct(product.id));
            }
            validate_product_name(&product.name)?;
            validate_price(product.price)?;
            if let Some(original) = product.original_price {
                validate_price(original)?;
            }
            validate_rating(product.rating)?;
        }
        Ok(Catalog { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: u32) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Shorthand for [`filter_products`] over this catalog.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        filter_products(&self.products, filter)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
