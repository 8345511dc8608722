//! # Domain Types
//!
//! Core domain types used throughout the Clinivet site.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ProductCategory │   │  ProductBadge   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  alimentos      │   │  nuevo          │       │
//! │  │  price (Money)  │   │  medicinas      │   │  oferta         │       │
//! │  │  stock, rating  │   │  accesorios     │   │  popular        │       │
//! │  │  category       │   │  higiene        │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    PetType      │   │    Service      │   │   TimeSlot      │       │
//! │  │  perro, gato... │   │  consulta ...   │   │  "09:00" ...    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire names are the Spanish codes the UI host already uses
//! (`"alimentos"`, `"perro"`, `"vacunacion"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product Category
// =============================================================================

/// Shop categories. Fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Alimentos,
    Medicinas,
    Accesorios,
    Higiene,
}

impl ProductCategory {
    /// All categories in shop display order.
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Alimentos,
        ProductCategory::Medicinas,
        ProductCategory::Accesorios,
        ProductCategory::Higiene,
    ];

    /// Wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Alimentos => "alimentos",
            ProductCategory::Medicinas => "medicinas",
            ProductCategory::Accesorios => "accesorios",
            ProductCategory::Higiene => "higiene",
        }
    }

    /// Label shown on the category filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Alimentos => "Alimentos",
            ProductCategory::Medicinas => "Medicinas",
            ProductCategory::Accesorios => "Accesorios",
            ProductCategory::Higiene => "Higiene",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                ValidationError::not_allowed(
                    "category",
                    &["alimentos", "medicinas", "accesorios", "higiene"],
                )
            })
    }
}

// =============================================================================
// Product Badge
// =============================================================================

/// Promotional badge on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ProductBadge {
    Nuevo,
    Oferta,
    Popular,
}

impl ProductBadge {
    /// Label printed on the badge.
    pub fn label(&self) -> &'static str {
        match self {
            ProductBadge::Nuevo => "Nuevo",
            ProductBadge::Oferta => "Oferta",
            ProductBadge::Popular => "Popular",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the shop.
///
/// Defined at build time (see [`crate::catalog`]) and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier; unique within the catalog.
    pub id: u32,

    pub name: String,

    pub description: String,

    /// Current selling price.
    pub price: Money,

    /// Price before a promotion, shown struck through.
    #[serde(default)]
    pub original_price: Option<Money>,

    /// Image URL or asset path.
    pub image: String,

    pub category: ProductCategory,

    /// Units in stock. Display only; the cart does not enforce it.
    pub stock: u32,

    /// Average rating, 0.0 - 5.0.
    pub rating: f32,

    #[serde(default)]
    pub badge: Option<ProductBadge>,
}

impl Product {
    /// Percentage saved against the original price, if there is a real
    /// markdown.
    ///
    /// ## Example
    /// ```rust
    /// # use clinivet_core::{Money, Product, ProductCategory};
    /// let mut product = Product {
    ///     id: 1,
    ///     name: "Croquetas".into(),
    ///     description: String::new(),
    ///     price: Money::from_cents(7_500),
    ///     original_price: Some(Money::from_cents(10_000)),
    ///     image: String::new(),
    ///     category: ProductCategory::Alimentos,
    ///     stock: 20,
    ///     rating: 4.5,
    ///     badge: None,
    /// };
    /// assert_eq!(product.discount_percent(), Some(25));
    ///
    /// product.original_price = None;
    /// assert_eq!(product.discount_percent(), None);
    /// ```
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price {
            return None;
        }
        Some((original - self.price).percent_of(original))
    }

    /// True when the card should warn "Solo N disponibles".
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Number of filled stars on the card (rating rounded down).
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).floor() as u8
    }
}

// =============================================================================
// Pet Type
// =============================================================================

/// Kind of animal the appointment is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    #[default]
    Perro,
    Gato,
    Ave,
    Roedor,
    Reptil,
    Otro,
}

impl PetType {
    pub const ALL: [PetType; 6] = [
        PetType::Perro,
        PetType::Gato,
        PetType::Ave,
        PetType::Roedor,
        PetType::Reptil,
        PetType::Otro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Perro => "perro",
            PetType::Gato => "gato",
            PetType::Ave => "ave",
            PetType::Roedor => "roedor",
            PetType::Reptil => "reptil",
            PetType::Otro => "otro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PetType::Perro => "🐕 Perro",
            PetType::Gato => "🐈 Gato",
            PetType::Ave => "🐦 Ave",
            PetType::Roedor => "🐹 Roedor",
            PetType::Reptil => "🦎 Reptil",
            PetType::Otro => "🐾 Otro",
        }
    }
}

impl FromStr for PetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                ValidationError::not_allowed(
                    "petType",
                    &["perro", "gato", "ave", "roedor", "reptil", "otro"],
                )
            })
    }
}

// =============================================================================
// Service
// =============================================================================

/// A clinic service that can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Consulta,
    Vacunacion,
    Cirugia,
    Dental,
    Emergencia,
    Estetica,
    Laboratorio,
}

impl Service {
    pub const ALL: [Service; 7] = [
        Service::Consulta,
        Service::Vacunacion,
        Service::Cirugia,
        Service::Dental,
        Service::Emergencia,
        Service::Estetica,
        Service::Laboratorio,
    ];

    /// Code stored in the form.
    pub fn code(&self) -> &'static str {
        match self {
            Service::Consulta => "consulta",
            Service::Vacunacion => "vacunacion",
            Service::Cirugia => "cirugia",
            Service::Dental => "dental",
            Service::Emergencia => "emergencia",
            Service::Estetica => "estetica",
            Service::Laboratorio => "laboratorio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Service::Consulta => "Consulta General",
            Service::Vacunacion => "Vacunación",
            Service::Cirugia => "Cirugía",
            Service::Dental => "Limpieza Dental",
            Service::Emergencia => "Emergencia",
            Service::Estetica => "Estética y Grooming",
            Service::Laboratorio => "Análisis de Laboratorio",
        }
    }
}

impl FromStr for Service {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|svc| svc.code() == s)
            .ok_or_else(|| {
                let codes: Vec<&str> = Service::ALL.iter().map(|s| s.code()).collect();
                ValidationError::not_allowed("service", &codes)
            })
    }
}

// =============================================================================
// Time Slot
// =============================================================================

/// A bookable appointment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// 24-hour value stored in the form, e.g. `"14:00"`.
    pub value: &'static str,
    /// 12-hour label, e.g. `"2:00 PM"`.
    pub label: &'static str,
}

/// Slots offered by the clinic. No slot at 13:00 (lunch).
pub const TIME_SLOTS: [TimeSlot; 9] = [
    TimeSlot { value: "09:00", label: "9:00 AM" },
    TimeSlot { value: "10:00", label: "10:00 AM" },
    TimeSlot { value: "11:00", label: "11:00 AM" },
    TimeSlot { value: "12:00", label: "12:00 PM" },
    TimeSlot { value: "14:00", label: "2:00 PM" },
    TimeSlot { value: "15:00", label: "3:00 PM" },
    TimeSlot { value: "16:00", label: "4:00 PM" },
    TimeSlot { value: "17:00", label: "5:00 PM" },
    TimeSlot { value: "18:00", label: "6:00 PM" },
];

impl TimeSlot {
    /// Looks up a slot by its stored value.
    pub fn find(value: &str) -> Option<TimeSlot> {
        TIME_SLOTS.into_iter().find(|slot| slot.value == value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64, original: Option<i64>, stock: u32) -> Product {
        Product {
            id: 1,
            name: "Shampoo".to_string(),
            description: String::new(),
            price: Money::from_cents(price),
            original_price: original.map(Money::from_cents),
            image: String::new(),
            category: ProductCategory::Higiene,
            stock,
            rating: 4.7,
            badge: Some(ProductBadge::Oferta),
        }
    }

    #[test]
    fn test_category_round_trip_names() {
        for category in ProductCategory::ALL {
            assert_eq!(category.as_str().parse::<ProductCategory>().unwrap(), category);
        }
        assert!("juguetes".parse::<ProductCategory>().is_err());
        assert!("todos".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(product(6_000, Some(8_000), 5).discount_percent(), Some(25));
        assert_eq!(product(8_000, Some(8_000), 5).discount_percent(), None);
        assert_eq!(product(9_000, Some(8_000), 5).discount_percent(), None);
    }

    #[test]
    fn test_low_stock_and_stars() {
        assert!(product(100, None, 9).is_low_stock());
        assert!(!product(100, None, 10).is_low_stock());
        assert_eq!(product(100, None, 10).full_stars(), 4);
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(product(6_000, Some(8_000), 5)).unwrap();
        assert_eq!(json["price"], 6_000);
        assert_eq!(json["originalPrice"], 8_000);
        assert_eq!(json["category"], "higiene");
        assert_eq!(json["badge"], "oferta");
    }

    #[test]
    fn test_pet_type_default_and_parse() {
        assert_eq!(PetType::default(), PetType::Perro);
        assert_eq!("reptil".parse::<PetType>().unwrap(), PetType::Reptil);
        assert!("dragon".parse::<PetType>().is_err());
    }

    #[test]
    fn test_service_lookup() {
        assert_eq!("dental".parse::<Service>().unwrap().label(), "Limpieza Dental");
        assert!("".parse::<Service>().is_err());
    }

    #[test]
    fn test_time_slot_lookup() {
        assert_eq!(TimeSlot::find("14:00").map(|s| s.label), Some("2:00 PM"));
        assert!(TimeSlot::find("13:00").is_none());
    }
}
