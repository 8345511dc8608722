//! # Cart State
//!
//! Shared cart plus drawer visibility.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Command                 Cart Change           │
//! │  ─────────                ───────                 ───────────           │
//! │                                                                         │
//! │  "Agregar" ──────────────► add_to_cart() ───────► line qty += 1         │
//! │                                                                         │
//! │  +/- buttons ────────────► update_cart_quantity() ► qty = n (<=0 drops) │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_from_cart() ──► line removed          │
//! │                                                                         │
//! │  Navbar cart icon ───────► toggle_cart() ───────► is_open flipped       │
//! │                                                                         │
//! │  Drawer ─────────────────► get_cart() ──────────► (read only)           │
//! │                                                                         │
//! │  Every write emits `ui:cart` with the new snapshot.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use clinivet_core::cart::{badge_label, Cart, CartLine, CheckoutSummary};
use clinivet_core::Money;

use crate::events::UiEventEmitter;

/// Everything the navbar badge and the cart drawer render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    pub total_price: Money,
    pub is_open: bool,
    /// "", "1".."9" or "9+".
    pub badge: String,
    pub summary: CheckoutSummary,
}

/// Shared cart state.
///
/// `Arc<Mutex<Cart>>`: commands may run concurrently, and every mutation
/// must be seen whole by the next reader.
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    emitter: Arc<dyn UiEventEmitter>,
    free_shipping_threshold: Money,
    flat_shipping_fee: Money,
}

impl CartState {
    /// Creates an empty, closed cart.
    pub fn new(
        emitter: Arc<dyn UiEventEmitter>,
        free_shipping_threshold: Money,
        flat_shipping_fee: Money,
    ) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
            emitter,
            free_shipping_threshold,
            flat_shipping_fee,
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.total_items());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart, then emits the
    /// resulting snapshot.
    ///
    /// ## Returns
    /// The snapshot taken under the same lock as the mutation, which is
    /// exactly what was emitted.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = cart_state.with_cart_mut(|cart| cart.add_item(product));
    /// ```
    pub fn with_cart_mut<F>(&self, f: F) -> CartSnapshot
    where
        F: FnOnce(&mut Cart),
    {
        let snapshot = {
            let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut cart);
            self.build_snapshot(&cart)
        };
        self.emitter.emit_cart(&snapshot);
        snapshot
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|cart| self.build_snapshot(cart))
    }

    /// Checkout summary at the configured shipping rates.
    pub fn summary_for(&self, cart: &Cart) -> CheckoutSummary {
        CheckoutSummary::with_rates(
            cart.total_price(),
            self.free_shipping_threshold,
            self.flat_shipping_fee,
        )
    }

    fn build_snapshot(&self, cart: &Cart) -> CartSnapshot {
        let total_items = cart.total_items();
        CartSnapshot {
            lines: cart.lines.clone(),
            total_items,
            total_price: cart.total_price(),
            is_open: cart.is_open,
            badge: badge_label(total_items),
            summary: self.summary_for(cart),
        }
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(
            Arc::new(crate::events::NoOpEmitter),
            clinivet_core::FREE_SHIPPING_THRESHOLD,
            clinivet_core::FLAT_SHIPPING_FEE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::RecordingEmitter;
    use crate::events::CART_EVENT;
    use clinivet_core::catalog::Catalog;

    fn state_with(emitter: Arc<RecordingEmitter>) -> CartState {
        CartState::new(
            emitter,
            clinivet_core::FREE_SHIPPING_THRESHOLD,
            clinivet_core::FLAT_SHIPPING_FEE,
        )
    }

    #[test]
    fn test_mutation_emits_snapshot() {
        let emitter = Arc::new(RecordingEmitter::default());
        let state = state_with(emitter.clone());
        let catalog = Catalog::builtin().unwrap();
        let product = &catalog.products()[0];

        state.with_cart_mut(|cart| cart.add_item(product));
        let returned = state.with_cart_mut(|cart| cart.add_item(product));

        let events = emitter.named(CART_EVENT);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], serde_json::to_value(&returned).unwrap());
        assert_eq!(events[1]["totalItems"], 2);
        assert_eq!(events[1]["badge"], "2");
        assert_eq!(events[1]["lines"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_reads_do_not_emit() {
        let emitter = Arc::new(RecordingEmitter::default());
        let state = state_with(emitter.clone());

        let snapshot = state.snapshot();
        assert_eq!(snapshot.total_items, 0);
        assert_eq!(snapshot.badge, "");
        assert!(!snapshot.is_open);
        assert!(emitter.events().is_empty());
    }

    #[test]
    fn test_configured_rates_drive_summary() {
        let state = CartState::new(
            Arc::new(crate::events::NoOpEmitter),
            Money::from_cents(1_000),
            Money::from_cents(300),
        );
        let catalog = Catalog::builtin().unwrap();
        let cheapest = catalog
            .products()
            .iter()
            .min_by_key(|p| p.price.cents())
            .unwrap();

        state.with_cart_mut(|cart| cart.add_item(cheapest));
        let snapshot = state.snapshot();

        if cheapest.price.cents() >= 1_000 {
            assert!(snapshot.summary.shipping.is_zero());
        } else {
            assert_eq!(snapshot.summary.shipping.cents(), 300);
        }
        assert_eq!(
            snapshot.summary.total,
            snapshot.summary.subtotal + snapshot.summary.shipping
        );
    }

    #[test]
    fn test_clear_keeps_drawer_open() {
        let state = CartState::default();
        let catalog = Catalog::builtin().unwrap();

        state.with_cart_mut(|cart| {
            cart.open();
            cart.add_item(&catalog.products()[1]);
        });
        state.with_cart_mut(|cart| cart.clear());

        let snapshot = state.snapshot();
        assert!(snapshot.is_open);
        assert!(snapshot.lines.is_empty());
        assert_eq!(snapshot.summary.progress_percent, 0);
    }
}
