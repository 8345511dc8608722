//! # Preference Store
//!
//! The key/value seam the theme state persists through.
//!
//! | Implementation | Backing | Used by |
//! |----------------|---------|---------|
//! | [`PreferenceRepository`] | SQLite `preferences` table | the running site |
//! | [`MemoryPreferences`] | `HashMap` | tests, and when the database can't be opened |

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{DbError, DbResult};
use crate::repository::preference::PreferenceRepository;

/// Durable string preferences.
///
/// Callers treat failures as "no preference" on read and log them on write;
/// implementations just report them.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> DbResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> DbResult<()>;
}

#[async_trait]
impl PreferenceStore for PreferenceRepository {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        PreferenceRepository::get(self, key).await
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        PreferenceRepository::set(self, key, value).await
    }
}

/// Process-local preferences. Lost on restart.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }

    fn poisoned() -> DbError {
        DbError::Internal("preference map lock poisoned".to_string())
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let values = self.values.lock().map_err(|_| Self::poisoned())?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        if key.trim().is_empty() {
            return Err(DbError::EmptyKey);
        }
        let mut values = self.values.lock().map_err(|_| Self::poisoned())?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use std::sync::Arc;

    async fn round_trip(store: Arc<dyn PreferenceStore>) {
        assert_eq!(store.get("clinivet-theme").await.unwrap(), None);
        store.set("clinivet-theme", "dark").await.unwrap();
        assert_eq!(
            store.get("clinivet-theme").await.unwrap().as_deref(),
            Some("dark")
        );
    }

    #[tokio::test]
    async fn test_memory_store() {
        round_trip(Arc::new(MemoryPreferences::new())).await;
    }

    #[tokio::test]
    async fn test_sqlite_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        round_trip(Arc::new(db.preferences())).await;
    }

    #[tokio::test]
    async fn test_with_value() {
        let store = MemoryPreferences::with_value("clinivet-theme", "light");
        assert_eq!(
            store.get("clinivet-theme").await.unwrap().as_deref(),
            Some("light")
        );
        assert!(matches!(store.set("", "x").await, Err(DbError::EmptyKey)));
    }
}
