//! Per-frame kinematic update
//!
//! Integrates position and angle, applies the world's edge rule, then
//! refits both boxes. Box shapes never change here, only their placement.

use glam::Vec2;

use super::body::Body;
use crate::world::{VerticalWrap, World};
use crate::{Velocity, rotate_point_around};

/// Reference frame for one update, carrying the player data only where
/// the frame needs it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceFrame {
    /// World-fixed; bodies wrap at the world edges
    Geocentric,
    /// Player-fixed; the world translates and rotates around the player
    Egocentric {
        /// Player velocity in the world-fixed frame
        player_velocity: Velocity,
        /// Player heading (degrees)
        player_angle: f32,
    },
}

impl Body {
    /// Advance the body by `dt` seconds
    pub fn update(&mut self, dt: f32, world: &World, frame: &ReferenceFrame) {
        match *frame {
            ReferenceFrame::Geocentric => {
                self.velocity = self.canonical_velocity;
                if self.velocity.x != 0.0 {
                    self.position.x += self.velocity.x * dt;
                }
                if self.velocity.y != 0.0 {
                    self.position.y += self.velocity.y * dt;
                }
                self.wrap(world);
                self.canonical_position = self.position;
            }
            ReferenceFrame::Egocentric {
                player_velocity,
                player_angle,
            } => {
                // Integrate with the player-relative velocity from last frame,
                // then refresh it for the next one
                if self.velocity.x != 0.0 {
                    self.canonical_position.x += self.velocity.x * dt;
                }
                if self.velocity.y != 0.0 {
                    self.canonical_position.y += self.velocity.y * dt;
                }
                self.velocity = self.canonical_velocity - player_velocity;

                // The player never turns; the world turns the other way around it
                self.position = rotate_point_around(self.canonical_position, Vec2::ZERO, -player_angle);
            }
        }

        if self.spin != 0.0 {
            self.angle += self.spin * dt;
        }

        self.refit_boxes();
    }

    /// Geocentric edge rule: toroidal on x, `world.vertical_wrap` on y
    fn wrap(&mut self, world: &World) {
        if self.position.x < world.x_min {
            self.position.x += world.width;
        } else if self.position.x > world.x_max {
            self.position.x -= world.width;
        }

        match world.vertical_wrap {
            VerticalWrap::Reflect => {
                if self.position.y < world.y_min {
                    self.position.y = -world.y_min;
                } else if self.position.y > world.y_max {
                    self.position.y = -world.y_max;
                }
            }
            VerticalWrap::Toroidal => {
                if self.position.y < world.y_min {
                    self.position.y += world.height;
                } else if self.position.y > world.y_max {
                    self.position.y -= world.height;
                }
            }
        }
    }
}
