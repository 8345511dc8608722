//! # Theme Commands

use tracing::debug;

use crate::state::{ThemeSnapshot, ThemeState};

/// Current theme, for the first paint.
pub async fn get_theme(theme: &ThemeState) -> ThemeSnapshot {
    debug!("get_theme command");
    theme.snapshot().await
}

/// Navbar sun/moon button. Never fails: a preference that can't be saved
/// only lasts for this session.
pub async fn toggle_theme(theme: &ThemeState) -> ThemeSnapshot {
    debug!("toggle_theme command");
    theme.toggle().await
}
