//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  toggle_cart  ┌───────────┐  │
//! │  │  Empty   │──────────────► │ In Cart  │─────────────► │  Drawer   │  │
//! │  │  Cart    │                │          │ ◄──────────── │   open    │  │
//! │  └──────────┘                └──────────┘  close_cart   └───────────┘  │
//! │       ▲                           │                                    │
//! │       │                      update_cart_quantity                      │
//! │       │                      remove_from_cart                          │
//! │       └────────── clear_cart ─────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the full [`CartSnapshot`].

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartSnapshot, CartState, ShopState};

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartSnapshot {
    debug!("get_cart command");
    cart.snapshot()
}

/// Adds one unit of a catalog product.
///
/// ## User Workflow
/// ```text
/// "Agregar" on a product card
///        │
///        ▼
/// invoke('add_to_cart', { productId: 5 })
///        │
///        ├── unknown id ──► NOT_FOUND
///        └── known id   ──► new line (qty 1) or existing line +1
/// ```
pub fn add_to_cart(
    shop: &ShopState,
    cart: &CartState,
    product_id: u32,
) -> Result<CartSnapshot, ApiError> {
    debug!(product_id, "add_to_cart command");

    let product = shop.catalog().require(product_id)?;
    Ok(cart.with_cart_mut(|c| c.add_item(product)))
}

/// Sets a line's quantity. Zero or less removes the line; unknown ids are
/// ignored.
pub fn update_cart_quantity(cart: &CartState, product_id: u32, quantity: i64) -> CartSnapshot {
    debug!(product_id, quantity, "update_cart_quantity command");
    cart.with_cart_mut(|c| c.update_quantity(product_id, quantity))
}

pub fn remove_from_cart(cart: &CartState, product_id: u32) -> CartSnapshot {
    debug!(product_id, "remove_from_cart command");
    cart.with_cart_mut(|c| c.remove_item(product_id))
}

/// Empties the cart. The drawer stays as it was.
pub fn clear_cart(cart: &CartState) -> CartSnapshot {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| c.clear())
}

pub fn toggle_cart(cart: &CartState) -> CartSnapshot {
    debug!("toggle_cart command");
    cart.with_cart_mut(|c| c.toggle())
}

pub fn open_cart(cart: &CartState) -> CartSnapshot {
    debug!("open_cart command");
    cart.with_cart_mut(|c| c.open())
}

pub fn close_cart(cart: &CartState) -> CartSnapshot {
    debug!("close_cart command");
    cart.with_cart_mut(|c| c.close())
}
