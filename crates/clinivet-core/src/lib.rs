//! # clinivet-core: Pure Business Logic for the Clinivet site
//!
//! This crate is the **heart** of the Clinivet storefront. It contains the
//! state-bearing logic of the site as plain data types and pure functions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Clinivet Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI host (web view)                           │   │
//! │  │    Navbar ──► Shop ──► CartDrawer ──► AppointmentModal          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               apps/site (state objects + commands)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ clinivet-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────────┐ ┌───────┐ ┌───────┐   │   │
//! │  │   │ catalog │ │  cart   │ │appointment │ │ modal │ │ theme │   │   │
//! │  │   └─────────┘ └─────────┘ └────────────┘ └───────┘ └───────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 clinivet-db (preference storage)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, categories, pets, services, time slots)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Built-in product list and the category filter
//! - [`cart`] - Cart lines, derived totals and the checkout summary
//! - [`appointment`] - The three-step appointment wizard
//! - [`modal`] - Single-slot overlay controller
//! - [`theme`] - Light/dark resolution and the sticky override
//! - [`validation`] - Field validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use clinivet_core::cart::{Cart, CheckoutSummary};
//! use clinivet_core::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut cart = Cart::new();
//! cart.add_item(&catalog.products()[0]);
//! cart.add_item(&catalog.products()[0]);
//!
//! assert_eq!(cart.total_items(), 2);
//! let summary = CheckoutSummary::for_cart(&cart);
//! assert_eq!(summary.total, summary.subtotal + summary.shipping);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod appointment;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod modal;
pub mod money;
pub mod theme;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, FieldError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cart subtotal at which shipping becomes free ($500.00).
///
/// ## Business Reason
/// Advertised on the shop banner ("Envio gratis +$500"). Must not drift.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(50_000);

/// Flat shipping fee charged below the free-shipping threshold ($50.00).
pub const FLAT_SHIPPING_FEE: Money = Money::from_cents(5_000);

/// Products with fewer units than this show a "Solo N disponibles" notice.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Local-storage key holding the explicit theme choice.
pub const THEME_PREFERENCE_KEY: &str = "clinivet-theme";
