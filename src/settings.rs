use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Tuning knobs for the scene, loadable from `settings.json`.
///
/// Any missing field falls back to its default, and a missing or unreadable
/// file falls back to the defaults entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSettings {
    /// Half-extent of the teleporter trigger box on the x and z axes.
    #[serde(default = "SceneSettings::default_trigger_range_xz")]
    pub trigger_range_xz: f32,
    /// Half-extent of the teleporter trigger box on the y axis.
    #[serde(default = "SceneSettings::default_trigger_range_y")]
    pub trigger_range_y: f32,
    /// Seconds during which no new teleport activation is possible after one fires.
    #[serde(default = "SceneSettings::default_cooldown_seconds")]
    pub cooldown_seconds: f32,
    /// Hard upper bound on a teleport sequence's lifetime before it is
    /// force-finished and cleaned up.
    #[serde(default = "SceneSettings::default_watchdog_seconds")]
    pub watchdog_seconds: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            trigger_range_xz: Self::default_trigger_range_xz(),
            trigger_range_y: Self::default_trigger_range_y(),
            cooldown_seconds: Self::default_cooldown_seconds(),
            watchdog_seconds: Self::default_watchdog_seconds(),
        }
    }
}

impl SceneSettings {
    pub fn load() -> Self {
        Self::load_from_path("settings.json")
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        use std::fs;

        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<SceneSettings>(&contents) {
                Ok(settings) => {
                    info!("Loaded scene settings from {:?}", path);
                    settings.validate()
                }
                Err(err) => {
                    warn!(
                        "Failed to parse {:?} ({}). Falling back to default scene settings.",
                        path, err
                    );
                    SceneSettings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Scene settings file {:?} not found. Using default settings.",
                    path
                );
                SceneSettings::default()
            }
            Err(err) => {
                warn!(
                    "Failed to read {:?} ({}). Falling back to default scene settings.",
                    path, err
                );
                SceneSettings::default()
            }
        }
    }

    fn validate(mut self) -> Self {
        if self.trigger_range_xz <= 0.0 {
            warn!("Trigger x/z range must be positive. Using default value.");
            self.trigger_range_xz = Self::default_trigger_range_xz();
        }

        if self.trigger_range_y <= 0.0 {
            warn!("Trigger y range must be positive. Using default value.");
            self.trigger_range_y = Self::default_trigger_range_y();
        }

        if self.cooldown_seconds <= 0.0 {
            warn!("Cooldown must be positive. Using default value.");
            self.cooldown_seconds = Self::default_cooldown_seconds();
        }

        // The watchdog must outlive a full sequence or it would cut healthy
        // teleports short.
        let minimum_watchdog = crate::teleport::SEQUENCE_TOTAL_SECONDS;
        if self.watchdog_seconds < minimum_watchdog {
            warn!(
                "Watchdog must be at least {} seconds. Using default value.",
                minimum_watchdog
            );
            self.watchdog_seconds = Self::default_watchdog_seconds();
        }

        self
    }

    const fn default_trigger_range_xz() -> f32 {
        1.5
    }

    const fn default_trigger_range_y() -> f32 {
        3.0
    }

    const fn default_cooldown_seconds() -> f32 {
        4.0
    }

    const fn default_watchdog_seconds() -> f32 {
        20.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_replaces_invalid_values_with_defaults() {
        let validated = SceneSettings {
            trigger_range_xz: 0.0,
            trigger_range_y: -1.0,
            cooldown_seconds: 0.0,
            watchdog_seconds: 2.0,
        }
        .validate();

        let defaults = SceneSettings::default();
        assert_eq!(validated.trigger_range_xz, defaults.trigger_range_xz);
        assert_eq!(validated.trigger_range_y, defaults.trigger_range_y);
        assert_eq!(validated.cooldown_seconds, defaults.cooldown_seconds);
        assert_eq!(validated.watchdog_seconds, defaults.watchdog_seconds);
    }

    #[test]
    fn validate_preserves_valid_values() {
        let valid = SceneSettings {
            trigger_range_xz: 2.0,
            trigger_range_y: 4.0,
            cooldown_seconds: 6.0,
            watchdog_seconds: 30.0,
        };

        let validated = valid.clone().validate();

        assert_eq!(validated.trigger_range_xz, valid.trigger_range_xz);
        assert_eq!(validated.trigger_range_y, valid.trigger_range_y);
        assert_eq!(validated.cooldown_seconds, valid.cooldown_seconds);
        assert_eq!(validated.watchdog_seconds, valid.watchdog_seconds);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings: SceneSettings = serde_json::from_str("{\"cooldown_seconds\": 2.5}").unwrap();
        assert_eq!(settings.cooldown_seconds, 2.5);
        assert_eq!(
            settings.trigger_range_xz,
            SceneSettings::default().trigger_range_xz
        );
    }
}
