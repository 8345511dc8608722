//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ThemeState                                                            │
//! │       │                                                                 │
//! │       │  store.get("clinivet-theme")                                   │
//! │       ▼                                                                 │
//! │  PreferenceStore (trait, store.rs)                                     │
//! │       │                                                                 │
//! │       ├── PreferenceRepository ──► SQL ──► preferences table           │
//! │       └── MemoryPreferences    ──► HashMap (tests / no database)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`preference::PreferenceRepository`] - Key/value UI preferences

pub mod preference;
