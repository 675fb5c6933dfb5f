//! Configuration errors
//!
//! Geometry and kinematics never fail; only building a world or loading
//! settings can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid world bounds: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidBounds {
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
    },
    #[error("invalid {name} range: {min} > {max}")]
    InvalidRange { name: &'static str, min: f32, max: f32 },
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
