//! Simulation settings
//!
//! Loaded from a JSON file. Missing fields take their defaults, so a file
//! only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::NarrowPhase;
use crate::world::{VerticalWrap, World, WorldType};

/// World rectangle in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
        }
    }
}

/// Ranges the spawner draws new asteroids from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Asteroids placed when the field is created
    pub initial_asteroids: u32,
    /// Asteroid width (world units)
    pub width_min: f32,
    pub width_max: f32,
    /// Height as a multiple of width
    pub aspect_min: f32,
    pub aspect_max: f32,
    /// Speed (world units per second)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Spin magnitude (degrees per second); the sign is random
    pub spin_min: f32,
    pub spin_max: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            initial_asteroids: 8,
            width_min: 0.5,
            width_max: 2.0,
            aspect_min: 0.5,
            aspect_max: 1.5,
            speed_min: 0.5,
            speed_max: 3.0,
            spin_min: 10.0,
            spin_max: 90.0,
        }
    }
}

impl SpawnSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("width", self.width_min, self.width_max)?;
        check_range("aspect", self.aspect_min, self.aspect_max)?;
        check_range("speed", self.speed_min, self.speed_max)?;
        check_range("spin", self.spin_min, self.spin_max)?;
        Ok(())
    }
}

fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}

/// Simulation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for all spawn randomness
    pub seed: u64,
    pub bounds: WorldBounds,
    pub world_type: WorldType,

    // === Collision / wrap behavior ===
    /// What happens on the vertical world edge in geocentric mode
    pub vertical_wrap: VerticalWrap,
    /// Narrow-phase test used by the field's collision pass
    pub narrow_phase: NarrowPhase,

    // === Debug drawing ===
    /// Draw box outlines around every body
    pub show_bounding_boxes: bool,

    pub spawn: SpawnSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            bounds: WorldBounds::default(),
            world_type: WorldType::Geocentric,
            vertical_wrap: VerticalWrap::Reflect,
            narrow_phase: NarrowPhase::Unrotated,
            show_bounding_boxes: false,
            spawn: SpawnSettings::default(),
        }
    }
}

impl Settings {
    /// Build the world described by these settings
    pub fn world(&self) -> Result<World, ConfigError> {
        let b = self.bounds;
        Ok(World::new(b.x_min, b.x_max, b.y_min, b.y_max)?.with_vertical_wrap(self.vertical_wrap))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world()?;
        self.spawn.validate()
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        let world = settings.world().unwrap();
        assert_eq!(world.width, 20.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(
            r#"{ "seed": 7, "world_type": "Egocentric", "spawn": { "initial_asteroids": 3 } }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.world_type, WorldType::Egocentric);
        assert_eq!(settings.spawn.initial_asteroids, 3);
        assert_eq!(settings.spawn.width_max, SpawnSettings::default().width_max);
        assert_eq!(settings.vertical_wrap, VerticalWrap::Reflect);
        assert_eq!(settings.narrow_phase, NarrowPhase::Unrotated);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.narrow_phase = NarrowPhase::SeparatingAxis;
        settings.vertical_wrap = VerticalWrap::Toroidal;
        let json = settings.to_json().unwrap();
        let parsed = Settings::from_json(&json).unwrap();
        assert_eq!(parsed.narrow_phase, NarrowPhase::SeparatingAxis);
        assert_eq!(parsed.vertical_wrap, VerticalWrap::Toroidal);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let err = Settings::from_json(r#"{ "spawn": { "speed_min": 5.0, "speed_max": 1.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { name: "speed", .. }));

        let err = Settings::from_json(
            r#"{ "bounds": { "x_min": 1.0, "x_max": -1.0, "y_min": -1.0, "y_max": 1.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds { .. }));

        assert!(matches!(
            Settings::from_json("{ not json").unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/asteroid-field.json"));
        assert_eq!(settings.seed, Settings::default().seed);
    }
}
