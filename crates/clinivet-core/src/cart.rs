//! # Cart
//!
//! The shop's client-side cart: lines, derived totals, the drawer flag and
//! the checkout summary shown at the bottom of the drawer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Operation                 Line Change          │
//! │  ─────────               ─────────                 ───────────          │
//! │                                                                         │
//! │  "Agregar" ────────────► add_item(product) ──────► push / qty + 1       │
//! │                                                                         │
//! │  +/- buttons ──────────► update_quantity(id, n) ─► qty = n (n<=0 drop)  │
//! │                                                    capped at 9 999      │
//! │                                                                         │
//! │  Trash icon ───────────► remove_item(id) ────────► retain != id         │
//! │                                                                         │
//! │  "Vaciar" ─────────────► clear() ────────────────► lines.clear()        │
//! │                                                                         │
//! │  Navbar icon ──────────► toggle() / open() / close() (drawer only)      │
//! │                                                                         │
//! │  NOTE: every operation is total. Unknown ids are silently ignored.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;
use crate::{FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD};

// =============================================================================
// Cart Line
// =============================================================================

/// Largest quantity a single line holds. `add_item` and `update_quantity`
/// clamp to it instead of failing.
pub const MAX_LINE_QUANTITY: u32 = 9_999;

/// One product in the cart with its quantity.
///
/// ## Invariants
/// - `1 <= quantity <= MAX_LINE_QUANTITY` (a line reduced to zero is removed)
/// - At most one line per product id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Lines keep insertion order. The cart is not persisted; a reload starts
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub lines: Vec<CartLine>,

    /// Whether the cart drawer is shown.
    pub is_open: bool,
}

impl Cart {
    /// Creates a new empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, up to [`MAX_LINE_QUANTITY`]
    /// - Otherwise: appends a new line with quantity 1
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
            return;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
    }

    /// Removes the line for `product_id`. No-op if absent.
    pub fn remove_item(&mut self, product_id: u32) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line
    /// - `quantity > MAX_LINE_QUANTITY`: stored as [`MAX_LINE_QUANTITY`]
    /// - Product not in cart: no-op (never inserts)
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = u32::try_from(quantity)
                .unwrap_or(u32::MAX)
                .min(MAX_LINE_QUANTITY);
        }
    }

    /// Removes every line. The drawer flag is left alone.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Quantity held for `product_id`, 0 when absent.
    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.lines
            .iter()
            .find(|line| line.product.id == product_id)
            .map_or(0, |line| line.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: u32) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }
}

/// Text for the navbar cart badge.
///
/// ## Example
/// ```rust
/// use clinivet_core::cart::badge_label;
///
/// assert_eq!(badge_label(0), "");
/// assert_eq!(badge_label(7), "7");
/// assert_eq!(badge_label(12), "9+");
/// ```
pub fn badge_label(total_items: u64) -> String {
    match total_items {
        0 => String::new(),
        1..=9 => total_items.to_string(),
        _ => "9+".to_string(),
    }
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// Totals shown at the bottom of the cart drawer.
///
/// ## Shipping Rule
/// ```text
/// subtotal >= threshold ──► shipping = 0        ("¡Envío gratis!")
/// subtotal <  threshold ──► shipping = flat fee ("Te faltan $X para envío gratis")
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    /// How much more the customer has to add to get free shipping.
    pub remaining_for_free_shipping: Money,
    /// Progress bar fill, 0-100.
    pub progress_percent: u32,
    pub qualifies_for_free_shipping: bool,
}

impl CheckoutSummary {
    /// Summary using the shop's advertised threshold and fee.
    pub fn for_cart(cart: &Cart) -> Self {
        Self::with_rates(cart.total_price(), FREE_SHIPPING_THRESHOLD, FLAT_SHIPPING_FEE)
    }

    /// Summary for an arbitrary subtotal and shipping rates.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::cart::CheckoutSummary;
    /// use clinivet_core::Money;
    ///
    /// let threshold = Money::from_cents(50_000);
    /// let fee = Money::from_cents(5_000);
    ///
    /// let at = CheckoutSummary::with_rates(Money::from_cents(50_000), threshold, fee);
    /// assert!(at.shipping.is_zero());
    ///
    /// let below = CheckoutSummary::with_rates(Money::from_cents(49_999), threshold, fee);
    /// assert_eq!(below.shipping, fee);
    /// assert_eq!(below.total.cents(), 54_999);
    /// ```
    pub fn with_rates(subtotal: Money, threshold: Money, flat_fee: Money) -> Self {
        let qualifies = subtotal >= threshold;
        let shipping = if qualifies { Money::zero() } else { flat_fee };
        let progress_percent = if threshold.is_positive() {
            subtotal.percent_of(threshold).min(100)
        } else {
            100
        };

        CheckoutSummary {
            subtotal,
            shipping,
            total: subtotal + shipping,
            remaining_for_free_shipping: threshold.saturating_sub(subtotal),
            progress_percent,
            qualifies_for_free_shipping: qualifies,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductCategory;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Producto {}", id),
            description: String::new(),
            price: Money::from_cents(price_cents),
            original_price: None,
            image: String::new(),
            category: ProductCategory::Alimentos,
            stock: 20,
            rating: 4.5,
            badge: None,
        }
    }

    #[test]
    fn test_add_item_counts_every_call() {
        let mut cart = Cart::new();
        let a = test_product(1, 999);
        let b = test_product(2, 1_500);

        for _ in 0..3 {
            cart.add_item(&a);
        }
        cart.add_item(&b);

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.total_price().cents(), 999 * 3 + 1_500);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(3, 100));
        cart.add_item(&test_product(1, 100));
        cart.add_item(&test_product(3, 100));

        let ids: Vec<u32> = cart.lines.iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(cart.quantity_of(3), 2);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);
        cart.add_item(&product);
        cart.add_item(&product);

        cart.update_quantity(1, 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 999));
        cart.update_quantity(1, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 999));

        cart.update_quantity(42, 5);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.quantity_of(42), 0);

        cart.update_quantity(1, 5);
        assert_eq!(cart.quantity_of(1), 5);
    }

    #[test]
    fn test_huge_quantities_are_capped() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 999));
        cart.add_item(&test_product(2, 999));

        cart.update_quantity(1, 3_000_000_000);
        cart.update_quantity(2, i64::MAX);
        assert_eq!(cart.quantity_of(1), MAX_LINE_QUANTITY);
        assert_eq!(cart.quantity_of(2), MAX_LINE_QUANTITY);
        assert_eq!(cart.total_items(), 2 * u64::from(MAX_LINE_QUANTITY));
        assert_eq!(
            cart.total_price().cents(),
            999 * 2 * i64::from(MAX_LINE_QUANTITY)
        );

        cart.add_item(&test_product(1, 999));
        assert_eq!(cart.quantity_of(1), MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_total_items_is_wider_than_a_line() {
        let mut cart = Cart::new();
        for id in 1..=3 {
            cart.lines.push(CartLine {
                product: test_product(id, 100),
                quantity: u32::MAX,
            });
        }
        assert_eq!(cart.total_items(), 3 * u64::from(u32::MAX));
        assert_eq!(badge_label(cart.total_items()), "9+");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 999));
        cart.remove_item(7);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_clear_zeroes_totals() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 999));
        cart.add_item(&test_product(2, 500));
        cart.open();

        cart.clear();
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
        assert!(cart.is_open);
    }

    #[test]
    fn test_drawer_flag() {
        let mut cart = Cart::new();
        assert!(!cart.is_open);
        cart.toggle();
        assert!(cart.is_open);
        cart.toggle();
        assert!(!cart.is_open);
        cart.open();
        cart.open();
        assert!(cart.is_open);
        cart.close();
        assert!(!cart.is_open);
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), "");
        assert_eq!(badge_label(1), "1");
        assert_eq!(badge_label(9), "9");
        assert_eq!(badge_label(10), "9+");
    }

    #[test]
    fn test_shipping_boundary() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 50_000));
        let summary = CheckoutSummary::for_cart(&cart);
        assert!(summary.qualifies_for_free_shipping);
        assert!(summary.shipping.is_zero());
        assert_eq!(summary.total.cents(), 50_000);
        assert_eq!(summary.progress_percent, 100);
        assert!(summary.remaining_for_free_shipping.is_zero());

        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 49_999));
        let summary = CheckoutSummary::for_cart(&cart);
        assert!(!summary.qualifies_for_free_shipping);
        assert_eq!(summary.shipping, FLAT_SHIPPING_FEE);
        assert_eq!(summary.total.cents(), 54_999);
        assert_eq!(summary.remaining_for_free_shipping.cents(), 1);
        assert_eq!(summary.progress_percent, 99);
    }

    #[test]
    fn test_progress_capped() {
        let mut cart = Cart::new();
        let product = test_product(1, 40_000);
        cart.add_item(&product);
        cart.add_item(&product);

        let summary = CheckoutSummary::for_cart(&cart);
        assert_eq!(summary.progress_percent, 100);
    }

    #[test]
    fn test_tiny_threshold_progress_is_full() {
        let summary = CheckoutSummary::with_rates(
            Money::from_cents(5_000_000_000_000),
            Money::from_cents(1),
            FLAT_SHIPPING_FEE,
        );
        assert!(summary.qualifies_for_free_shipping);
        assert_eq!(summary.progress_percent, 100);
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = CheckoutSummary::for_cart(&Cart::new());
        assert!(summary.subtotal.is_zero());
        assert_eq!(summary.progress_percent, 0);
        assert_eq!(summary.remaining_for_free_shipping, FREE_SHIPPING_THRESHOLD);
    }
}
