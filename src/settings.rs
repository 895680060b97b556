//! Presentation preferences
//!
//! Persisted separately from the best time in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::sim::Overlay;

/// Player-facing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Soft glow around the ship
    pub glow: bool,
    /// Show the best time under the running clock
    pub show_best_time: bool,
    /// Outline the asteroid spawn zones (debug)
    pub show_spawn_zones: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glow: true,
            show_best_time: true,
            show_spawn_zones: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "star_dodge_settings";

    /// Parse stored settings, falling back to defaults on bad JSON
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Serialized form written to LocalStorage
    pub fn to_json(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                None
            }
        }
    }

    /// Per-frame overlay for the given best time
    pub fn overlay(&self, best_time_ms: Option<u64>) -> Overlay {
        Overlay {
            best_time_ms: best_time_ms.filter(|_| self.show_best_time),
            show_spawn_zones: self.show_spawn_zones,
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match crate::platform::storage::get_item(Self::STORAGE_KEY) {
            Some(json) => {
                log::info!("Loaded settings from LocalStorage");
                Self::from_json(&json)
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        if let Some(json) = self.to_json() {
            if crate::platform::storage::set_item(Self::STORAGE_KEY, &json) {
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        if let Some(json) = self.to_json() {
            log::debug!("Settings not persisted natively: {}", json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"show_spawn_zones": true}"#);
        assert!(settings.show_spawn_zones);
        assert!(settings.glow);
        assert!(settings.show_best_time);
    }

    #[test]
    fn test_malformed_json_is_default() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
    }

    #[test]
    fn test_round_trip_json() {
        let settings = Settings {
            glow: false,
            show_best_time: false,
            show_spawn_zones: true,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[test]
    fn test_overlay_hides_best_time() {
        let mut settings = Settings::default();
        assert_eq!(settings.overlay(Some(10)).best_time_ms, Some(10));

        settings.show_best_time = false;
        assert_eq!(settings.overlay(Some(10)).best_time_ms, None);
    }
}
