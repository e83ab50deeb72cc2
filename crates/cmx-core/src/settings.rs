//! Reader-wide settings with priority override.

use serde::{Deserialize, Serialize};

/// Options shared by every book a reader shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreSettings {
    /// Emit a resume entry on every navigation.
    pub page_save: bool,
    /// Render a state string on every navigation.
    pub page_push: bool,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            page_save: true,
            page_push: false,
        }
    }
}

impl CoreSettings {
    pub fn with_page_save(mut self, enable: bool) -> Self {
        self.page_save = enable;
        self
    }

    pub fn with_page_push(mut self, enable: bool) -> Self {
        self.page_push = enable;
        self
    }
}

/// Holds the active [`CoreSettings`].
///
/// Once a priority configuration is applied, ordinary configuration is
/// ignored until [`SettingsStore::reset`].
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: CoreSettings,
    locked: bool,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> CoreSettings {
        self.settings
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Apply `settings` unless a priority configuration holds the lock.
    /// Returns whether the settings were applied.
    pub fn configure(&mut self, settings: CoreSettings) -> bool {
        if self.locked {
            return false;
        }
        self.settings = settings;
        true
    }

    /// Apply `settings` and lock out ordinary configuration.
    pub fn configure_priority(&mut self, settings: CoreSettings) {
        self.settings = settings;
        self.locked = true;
    }

    /// Release the priority lock. The current settings stay in effect.
    pub fn reset(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_blocks_ordinary_configuration() {
        let mut store = SettingsStore::new();
        let pushed = CoreSettings::default().with_page_push(true);
        store.configure_priority(pushed);
        assert!(!store.configure(CoreSettings::default()));
        assert_eq!(store.settings(), pushed);

        store.reset();
        assert!(store.configure(CoreSettings::default()));
        assert!(!store.settings().page_push);
    }

    #[test]
    fn priority_overrides_priority() {
        let mut store = SettingsStore::new();
        store.configure_priority(CoreSettings::default().with_page_save(false));
        store.configure_priority(CoreSettings::default());
        assert!(store.settings().page_save);
        assert!(store.is_locked());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings: CoreSettings = serde_json::from_str(r#"{"pagePush": true}"#).unwrap();
        assert!(settings.page_save);
        assert!(settings.page_push);
    }
}
