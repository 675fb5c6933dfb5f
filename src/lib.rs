//! Asteroid Field - kinematics and two-phase collision for a 2D arcade field
//!
//! Core modules:
//! - `sim`: Bodies, bounding boxes, per-frame motion and collision queries
//! - `world`: World bounds and pixel/world conversion
//! - `spawn`: Seeded random distributions used to place new bodies
//! - `settings`: JSON configuration
//! - `renderer`: Drawable outline geometry (no GPU code)

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod spawn;
pub mod world;

pub use error::ConfigError;
pub use settings::{Settings, SpawnSettings, WorldBounds};
pub use world::{World, WorldType};

use glam::Vec2;

/// A point in world units
pub type WorldPoint = Vec2;
/// A velocity in world units per second
pub type Velocity = Vec2;
/// A point in pixel units (origin upper-left, y down)
pub type PixelPoint = Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default world bounds
    pub const DEFAULT_X_MIN: f32 = -10.0;
    pub const DEFAULT_X_MAX: f32 = 10.0;
    pub const DEFAULT_Y_MIN: f32 = -10.0;
    pub const DEFAULT_Y_MAX: f32 = 10.0;

    /// Probe rotation giving the widest axis-aligned extent of a square
    pub const BOX_PROBE_ANGLE_DEG: f32 = 45.0;

    /// Ship footprint (world units)
    pub const SHIP_WIDTH: f32 = 1.0;
    pub const SHIP_HEIGHT: f32 = 1.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Rotate a point around the world origin (counterclockwise, degrees)
#[inline]
pub fn rotate_point_by(pt: WorldPoint, degrees: f32) -> WorldPoint {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(pt.x * cos - pt.y * sin, pt.x * sin + pt.y * cos)
}

/// Rotate a point around `center` (counterclockwise, degrees)
#[inline]
pub fn rotate_point_around(pt: WorldPoint, center: WorldPoint, degrees: f32) -> WorldPoint {
    center + rotate_point_by(pt - center, degrees)
}
