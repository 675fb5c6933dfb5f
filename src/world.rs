//! World bounds and pixel/world conversion
//!
//! An explicit, immutable value handed to constructors and the simulation
//! step. Nothing here is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{PixelPoint, WorldPoint};

/// Frame of reference the field is simulated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorldType {
    /// World-fixed frame; bodies wrap around the field edges
    #[default]
    Geocentric,
    /// Player-fixed frame; the world moves and rotates around the ship
    Egocentric,
}

/// What happens when a geocentric body crosses the top or bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalWrap {
    /// Jump to the negated bound that was crossed (y > y_max lands at -y_max).
    /// Only a true wrap when the world is vertically centered on 0.
    #[default]
    Reflect,
    /// Add or subtract the world height, like the horizontal wrap
    Toroidal,
}

/// World bounds and display scaling
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    /// `x_max - x_min`
    pub width: f32,
    /// `y_max - y_min`
    pub height: f32,
    /// Pixel units to world units
    pub pixel_to_world_ratio: f32,
    /// World units to pixel units
    pub world_to_pixel_ratio: f32,
    /// Same as `pixel_to_world_ratio`; scale to apply before drawing in pixels
    pub draw_in_pixel_scale: f32,
    pub vertical_wrap: VerticalWrap,
}

impl World {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Result<Self, ConfigError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(ConfigError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            width: x_max - x_min,
            height: y_max - y_min,
            pixel_to_world_ratio: 1.0,
            world_to_pixel_ratio: 1.0,
            draw_in_pixel_scale: 1.0,
            vertical_wrap: VerticalWrap::Reflect,
        })
    }

    pub fn with_vertical_wrap(mut self, vertical_wrap: VerticalWrap) -> Self {
        self.vertical_wrap = vertical_wrap;
        self
    }

    /// Compute the pixel/world ratios for a rendering pane.
    ///
    /// The whole world must fit the pane, so the larger of the two per-axis
    /// ratios wins and the pane is shrunk along the other axis to keep the
    /// world aspect ratio. Returns the adjusted pane dimensions.
    pub fn set_scaling_ratios(&mut self, pane_width: u32, pane_height: u32) -> (u32, u32) {
        let pane_width = pane_width.max(1);
        let pane_height = pane_height.max(1);
        let width_ratio = self.width / pane_width as f32;
        let height_ratio = self.height / pane_height as f32;

        let (ratio, adjusted) = if width_ratio > height_ratio {
            let h = (self.height / width_ratio).round() as u32;
            (width_ratio, (pane_width, h.max(1)))
        } else {
            let w = (self.width / height_ratio).round() as u32;
            (height_ratio, (w.max(1), pane_height))
        };

        self.pixel_to_world_ratio = ratio;
        self.world_to_pixel_ratio = 1.0 / ratio;
        self.draw_in_pixel_scale = ratio;
        adjusted
    }

    /// Pixel coordinates (origin upper-left, y down) to world coordinates
    pub fn pixel_to_world(&self, pt: PixelPoint) -> WorldPoint {
        Vec2::new(
            self.x_min + pt.x * self.pixel_to_world_ratio,
            self.y_max - pt.y * self.pixel_to_world_ratio,
        )
    }

    /// World coordinates to pixel coordinates (origin upper-left, y down)
    pub fn world_to_pixel(&self, pt: WorldPoint) -> PixelPoint {
        Vec2::new(
            (pt.x - self.x_min) * self.world_to_pixel_ratio,
            (self.y_max - pt.y) * self.world_to_pixel_ratio,
        )
    }

    /// Center of the world rectangle
    pub fn center(&self) -> WorldPoint {
        Vec2::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// True if the point lies within the bounds (inclusive)
    pub fn contains(&self, pt: WorldPoint) -> bool {
        pt.x >= self.x_min && pt.x <= self.x_max && pt.y >= self.y_min && pt.y <= self.y_max
    }

    /// True if the point lies further than `margin` outside the bounds
    pub fn is_outside_by(&self, pt: WorldPoint, margin: f32) -> bool {
        pt.x < self.x_min - margin
            || pt.x > self.x_max + margin
            || pt.y < self.y_min - margin
            || pt.y > self.y_max + margin
    }
}

impl Default for World {
    fn default() -> Self {
        use crate::consts::*;
        let width = DEFAULT_X_MAX - DEFAULT_X_MIN;
        let height = DEFAULT_Y_MAX - DEFAULT_Y_MIN;
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
            width,
            height,
            pixel_to_world_ratio: 1.0,
            world_to_pixel_ratio: 1.0,
            draw_in_pixel_scale: 1.0,
            vertical_wrap: VerticalWrap::Reflect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_world_new_derives_extent() {
        let world = World::new(-10.0, 10.0, -5.0, 5.0).unwrap();
        assert_eq!(world.width, 20.0);
        assert_eq!(world.height, 10.0);
        assert_eq!(world.center(), Vec2::ZERO);
    }

    #[test]
    fn test_world_new_rejects_bad_bounds() {
        assert!(World::new(10.0, -10.0, -5.0, 5.0).is_err());
        assert!(World::new(-10.0, 10.0, 5.0, 5.0).is_err());
        assert!(World::new(f32::NAN, 10.0, -5.0, 5.0).is_err());
    }

    #[test]
    fn test_scaling_ratios_keep_aspect() {
        // 20 x 10 world into an 800 x 800 pane: width limits, pane shrinks to 800 x 400
        let mut world = World::new(-10.0, 10.0, -5.0, 5.0).unwrap();
        let (w, h) = world.set_scaling_ratios(800, 800);
        assert_eq!((w, h), (800, 400));
        assert!((world.pixel_to_world_ratio - 0.025).abs() < 1e-6);
        assert!((world.world_to_pixel_ratio - 40.0).abs() < EPS);

        // 20 x 10 world into a 1000 x 200 pane: height limits
        let (w, h) = world.set_scaling_ratios(1000, 200);
        assert_eq!((w, h), (400, 200));
    }

    #[test]
    fn test_pixel_world_conversion() {
        let mut world = World::new(-10.0, 10.0, -10.0, 10.0).unwrap();
        world.set_scaling_ratios(400, 400);

        // Upper-left pixel maps to (x_min, y_max)
        let ul = world.pixel_to_world(Vec2::ZERO);
        assert!((ul.x + 10.0).abs() < EPS && (ul.y - 10.0).abs() < EPS);

        // Pane center maps to world center
        let c = world.pixel_to_world(Vec2::new(200.0, 200.0));
        assert!(c.length() < EPS);

        let p = Vec2::new(3.5, -2.25);
        let back = world.pixel_to_world(world.world_to_pixel(p));
        assert!((back - p).length() < EPS);
    }

    #[test]
    fn test_outside_margin() {
        let world = World::default();
        assert!(world.contains(Vec2::new(10.0, -10.0)));
        assert!(!world.is_outside_by(Vec2::new(10.5, 0.0), 1.0));
        assert!(world.is_outside_by(Vec2::new(11.5, 0.0), 1.0));
    }
}
