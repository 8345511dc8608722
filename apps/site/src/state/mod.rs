//! # State Module
//!
//! Store objects for the site, one per concern, built once at bootstrap and
//! handed to the commands by reference.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐ │
//! │  │  CartState   │  │  ModalState  │  │  ThemeState  │  │  ShopState  │ │
//! │  │              │  │              │  │              │  │             │ │
//! │  │ Arc<Mutex<   │  │ Mutex<slot + │  │ tokio Mutex  │  │ Arc<Catalog>│ │
//! │  │   Cart>>     │  │ scroll lock>>│  │ + store      │  │ + filter    │ │
//! │  └──────────────┘  └──────────────┘  └──────┬───────┘  └─────────────┘ │
//! │                                             │ polled by                 │
//! │  ┌──────────────────┐  ┌──────────────┐  ┌──▼───────────┐               │
//! │  │ AppointmentState │  │  SiteConfig  │  │ ThemeWatcher │               │
//! │  │ wizard + pending │  │  read-only   │  │ tokio task   │               │
//! │  │ reset task       │  │              │  │              │               │
//! │  └──────────────────┘  └──────────────┘  └──────────────┘               │
//! │                                                                         │
//! │  Independent states don't block each other.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod appointment;
mod cart;
pub mod clock;
mod config;
mod modal;
mod shop;
mod theme;

pub use appointment::{AppointmentSnapshot, AppointmentState};
pub use cart::{CartSnapshot, CartState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, ConfigResult, SiteConfig};
pub use modal::{ModalSnapshot, ModalState, ScrollLockGuard};
pub use shop::{count_label, CategoryOption, ShopSnapshot, ShopState, EMPTY_CATEGORY_MESSAGE};
pub use theme::{ThemeSnapshot, ThemeState, ThemeWatcher, ThemeWatcherHandle};
