//! Operator preferences
//!
//! Persisted separately from wheel state in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{
    BASE_MIN_SPINS, DEFAULT_SPIN_DURATION, MAX_SPIN_DURATION, MIN_SPIN_DURATION, SPINS_PER_SECOND,
};

/// Wheel preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Spin duration in seconds, clamped to [1, 20]
    pub spin_duration: f64,
    /// Tick/win sounds
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spin_duration: DEFAULT_SPIN_DURATION,
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "prize_wheel_settings";

    /// Set the spin duration, clamped to the supported range
    pub fn set_spin_duration(&mut self, secs: f64) {
        self.spin_duration = secs.clamp(MIN_SPIN_DURATION, MAX_SPIN_DURATION);
    }

    /// Guaranteed full revolutions for the configured duration: longer spins
    /// turn more for visual plausibility
    pub fn min_spins(&self) -> f64 {
        BASE_MIN_SPINS + (self.spin_duration * SPINS_PER_SECOND).floor()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(mut settings) = serde_json::from_str::<Settings>(&json) {
                    // Re-clamp in case the stored value predates the range
                    settings.set_spin_duration(settings.spin_duration);
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
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
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_is_clamped() {
        let mut settings = Settings::default();
        settings.set_spin_duration(0.1);
        assert_eq!(settings.spin_duration, MIN_SPIN_DURATION);
        settings.set_spin_duration(99.0);
        assert_eq!(settings.spin_duration, MAX_SPIN_DURATION);
        settings.set_spin_duration(12.5);
        assert_eq!(settings.spin_duration, 12.5);
    }

    #[test]
    fn test_min_spins_scales_with_duration() {
        let mut settings = Settings::default();
        assert_eq!(settings.min_spins(), 21.0); // 5 + floor(8 * 2)

        settings.set_spin_duration(1.0);
        assert_eq!(settings.min_spins(), 7.0);

        settings.set_spin_duration(2.75);
        assert_eq!(settings.min_spins(), 10.0); // floor(5.5) = 5
    }

    #[test]
    fn test_native_load_save_stubs() {
        let mut settings = Settings::load();
        assert_eq!(settings, Settings::default());
        settings.set_spin_duration(4.0);
        settings.sound_enabled = false;
        settings.save();
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = Settings {
            spin_duration: 4.0,
            sound_enabled: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
