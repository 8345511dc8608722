//! # Theme Resolution
//!
//! Decides between light and dark.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  init                                                                   │
//! │   stored "light" | "dark" ──► that mode, manual = true                  │
//! │   anything else          ──► mode for local hour, manual = false        │
//! │                                                                         │
//! │  tick(hour)   (every poll)                                              │
//! │   manual  ──► ignored                                                   │
//! │   !manual ──► mode for hour                                             │
//! │                                                                         │
//! │  toggle()                                                               │
//! │   flips mode, manual = true for the rest of the session                 │
//! │                                                                         │
//! │  mode for hour: dark iff hour >= 19 or hour < 6                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hours are taken in the clinic's time zone (Lima, UTC-05:00, no DST); see
//! [`local_hour`]. Reading the clock and storing the preference happen in
//! the application layer.

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// First hour (inclusive) of the evening dark period.
pub const DARK_FROM_HOUR: u32 = 19;

/// First hour (exclusive) after the night dark period.
pub const DARK_UNTIL_HOUR: u32 = 6;

/// Lima's offset from UTC, in minutes.
pub const LIMA_UTC_OFFSET_MINUTES: i32 = -5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Mode the site uses at `hour` (0-23) when nobody chose one.
    pub fn for_hour(hour: u32) -> Self {
        if hour >= DARK_FROM_HOUR || hour < DARK_UNTIL_HOUR {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Interprets a stored preference. Only the exact strings `"light"`
    /// and `"dark"` count; everything else is treated as absent.
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value? {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn flipped(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus the sticky-override flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    mode: ThemeMode,
    manual: bool,
}

impl Theme {
    /// Resolves the initial theme.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::theme::{Theme, ThemeMode};
    ///
    /// let stored = Theme::resolve(Some("light"), 22);
    /// assert_eq!(stored.mode(), ThemeMode::Light);
    /// assert!(stored.is_manual());
    ///
    /// let automatic = Theme::resolve(Some("sepia"), 22);
    /// assert_eq!(automatic.mode(), ThemeMode::Dark);
    /// assert!(!automatic.is_manual());
    /// ```
    pub fn resolve(stored: Option<&str>, hour: u32) -> Self {
        match ThemeMode::from_stored(stored) {
            Some(mode) => Theme { mode, manual: true },
            None => Theme::automatic(hour),
        }
    }

    /// Time-based theme, not marked manual.
    pub fn automatic(hour: u32) -> Self {
        Theme {
            mode: ThemeMode::for_hour(hour),
            manual: false,
        }
    }

    /// Re-evaluates against `hour`.
    ///
    /// ## Returns
    /// `true` if the mode changed.
    pub fn tick(&mut self, hour: u32) -> bool {
        if self.manual {
            return false;
        }
        let next = ThemeMode::for_hour(hour);
        let changed = next != self.mode;
        self.mode = next;
        changed
    }

    /// Flips the mode and pins it for the rest of the session.
    ///
    /// ## Returns
    /// The new mode (the value to persist).
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.manual = true;
        self.mode
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }
}

/// The clinic's zone: `offset_minutes` east of UTC, or Lima when the
/// offset is outside ±24h.
pub fn clinic_offset(offset_minutes: i32) -> FixedOffset {
    offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .or_else(|| FixedOffset::east_opt(LIMA_UTC_OFFSET_MINUTES * 60))
        .unwrap_or_else(|| Utc.fix())
}

/// Hour of day (0-23) at `now` in the zone given by [`clinic_offset`].
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use clinivet_core::theme::{local_hour, LIMA_UTC_OFFSET_MINUTES};
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 20, 1, 30, 0).unwrap();
/// assert_eq!(local_hour(now, LIMA_UTC_OFFSET_MINUTES), 20);
/// ```
pub fn local_hour(now: DateTime<Utc>, offset_minutes: i32) -> u32 {
    now.with_timezone(&clinic_offset(offset_minutes)).hour()
}
