//! # clinivet-db: Preference Storage for the Clinivet site
//!
//! SQLite access for the one piece of state that survives a reload: the
//! explicit theme choice.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Clinivet Data Flow                               │
//! │                                                                         │
//! │  toggle_theme command                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   clinivet-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐  ┌──────────────┐  │   │
//! │  │   │   Database    │    │ PreferenceStore  │  │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│  SQLite / memory │  │  (embedded)  │  │   │
//! │  │   └───────────────┘    └──────────────────┘  └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file in the platform data dir (clinivet.db)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//! - [`store`] - `PreferenceStore` trait and the in-memory store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clinivet_db::{Database, DbConfig, PreferenceStore};
//!
//! let db = Database::new(DbConfig::new("clinivet.db")).await?;
//! let prefs = db.preferences();
//! prefs.set("clinivet-theme", "dark").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::preference::PreferenceRepository;
pub use store::{MemoryPreferences, PreferenceStore};
