//! User settings persisted through the key-value port: theme and the daily
//! study reminder.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::{self, keys, KeyValueStore};

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        state::get_value(store, keys::THEME).unwrap_or_default()
    }

    pub fn save(self, store: &dyn KeyValueStore) -> Result<()> {
        state::set_value(store, keys::THEME, &self)
    }
}

/// Daily study reminder time-of-day. Disabled by default, at 19:00 when
/// first enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    pub enabled: bool,
    pub hour: u32,
    pub minute: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            hour: 19,
            minute: 0,
        }
    }
}

impl ReminderSettings {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        state::get_value(store, keys::REMINDER).unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<()> {
        state::set_value(store, keys::REMINDER, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn theme_defaults_to_light_and_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);

        Theme::Dark.save(&store).unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn reminder_defaults_to_seven_pm_disabled() {
        let store = MemoryStore::new();
        let reminder = ReminderSettings::load(&store);
        assert!(!reminder.enabled);
        assert_eq!((reminder.hour, reminder.minute), (19, 0));
    }

    #[test]
    fn reminder_round_trips() {
        let store = MemoryStore::new();
        let reminder = ReminderSettings {
            enabled: true,
            hour: 8,
            minute: 30,
        };
        reminder.save(&store).unwrap();
        assert_eq!(ReminderSettings::load(&store), reminder);
    }
}
