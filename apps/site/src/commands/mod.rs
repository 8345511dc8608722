//! # Commands Module
//!
//! Everything the UI host can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── catalog.rs      ◄─── Product grid and category filter
//! ├── cart.rs         ◄─── Cart lines and drawer
//! ├── modal.rs        ◄─── Overlay slot (appointment / product)
//! ├── appointment.rs  ◄─── Appointment wizard
//! ├── theme.rs        ◄─── Light/dark
//! └── config.rs       ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI host                                                                │
//! │  ───────                                                                │
//! │  const cart = await invoke('add_to_cart', { productId: 5 });            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  pub fn add_to_cart(                                                    │
//! │      shop: &ShopState,        ◄── Only the state it needs               │
//! │      cart: &CartState,                                                  │
//! │      product_id: u32,         ◄── From invoke params                    │
//! │  ) -> Result<CartSnapshot, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization, camelCase)                               │
//! │         ▼                                                               │
//! │  UI host receives: CartSnapshot                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host adapter owns an [`crate::App`] and passes its fields in.

pub mod appointment;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod modal;
pub mod theme;
