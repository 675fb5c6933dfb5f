//! Seeded random distributions for placing new bodies
//!
//! Every draw goes through one `Pcg32`, so a field built from the same seed
//! and driven by the same inputs spawns the same asteroids.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::SpawnSettings;
use crate::sim::ReferenceFrame;
use crate::world::World;
use crate::{Velocity, WorldPoint};

/// Which side of the world an edge spawn lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

pub struct Spawner {
    rng: Pcg32,
    ranges: SpawnSettings,
}

impl Spawner {
    /// `ranges` must already be validated (min <= max for every range)
    pub fn new(seed: u64, ranges: SpawnSettings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            ranges,
        }
    }

    pub fn ranges(&self) -> &SpawnSettings {
        &self.ranges
    }

    /// Uniform point inside the world rectangle
    pub fn random_world_point(&mut self, world: &World) -> WorldPoint {
        Vec2::new(
            self.rng.random_range(world.x_min..=world.x_max),
            self.rng.random_range(world.y_min..=world.y_max),
        )
    }

    /// Uniform angle in [0, 360)
    pub fn random_angle_deg(&mut self) -> f32 {
        self.rng.random_range(0.0..360.0)
    }

    /// Uniform angle in [0, 2π)
    pub fn random_angle_rad(&mut self) -> f32 {
        self.rng.random_range(0.0..std::f32::consts::TAU)
    }

    pub fn heads_or_tails(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Spin magnitude from the configured range with a random sign
    pub fn random_spin_deg(&mut self) -> f32 {
        let magnitude = self.rng.random_range(self.ranges.spin_min..=self.ranges.spin_max);
        if self.heads_or_tails() { magnitude } else { -magnitude }
    }

    pub fn random_width(&mut self) -> f32 {
        self.rng.random_range(self.ranges.width_min..=self.ranges.width_max)
    }

    /// Height-to-width ratio
    pub fn random_aspect(&mut self) -> f32 {
        self.rng.random_range(self.ranges.aspect_min..=self.ranges.aspect_max)
    }

    fn random_speed_between(&mut self, vmin: f32, vmax: f32) -> f32 {
        self.rng.random::<f32>() * (vmax - vmin) + vmin
    }

    /// Random speed in [vmin, vmax] along a uniformly random direction
    pub fn random_velocity(&mut self, vmin: f32, vmax: f32) -> Velocity {
        let speed = self.random_speed_between(vmin, vmax);
        let angle = self.random_angle_rad();
        Vec2::new(speed * angle.cos(), speed * angle.sin())
    }

    /// Random velocity whose components point back toward the world center.
    ///
    /// A component is zero when the body sits exactly on that center line.
    pub fn random_edge_velocity(
        &mut self,
        world: &World,
        pos: WorldPoint,
        vmin: f32,
        vmax: f32,
    ) -> Velocity {
        let v = self.random_velocity(vmin, vmax);
        let to_center = world.center() - pos;
        Vec2::new(
            v.x.abs() * signum_or_zero(to_center.x),
            v.y.abs() * signum_or_zero(to_center.y),
        )
    }

    pub fn random_edge(&mut self) -> Edge {
        match self.rng.random_range(0..4u32) {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        }
    }

    /// Uniform point along one edge of the world
    pub fn point_on_edge(&mut self, world: &World, edge: Edge) -> WorldPoint {
        match edge {
            Edge::Top => Vec2::new(self.rng.random_range(world.x_min..=world.x_max), world.y_max),
            Edge::Right => Vec2::new(world.x_max, self.rng.random_range(world.y_min..=world.y_max)),
            Edge::Bottom => Vec2::new(self.rng.random_range(world.x_min..=world.x_max), world.y_min),
            Edge::Left => Vec2::new(world.x_min, self.rng.random_range(world.y_min..=world.y_max)),
        }
    }

    /// Random spawn point on the world edge.
    ///
    /// In egocentric mode with a moving player, the point is on the edge the
    /// player is heading toward, so the new body drifts into view instead of
    /// leaving it immediately. The dominant velocity axis picks the edge;
    /// ties go to the horizontal axis. Otherwise any edge is equally likely.
    ///
    /// `player_velocity` is read in the frame the edge is picked in, so a
    /// caller working on the displayed field passes it already turned.
    pub fn generate_edge_position(&mut self, world: &World, frame: &ReferenceFrame) -> WorldPoint {
        if let ReferenceFrame::Egocentric {
            player_velocity: v, ..
        } = *frame
        {
            if v != Vec2::ZERO {
                let edge = if v.x.abs() >= v.y.abs() {
                    if v.x > 0.0 { Edge::Right } else { Edge::Left }
                } else if v.y > 0.0 {
                    Edge::Top
                } else {
                    Edge::Bottom
                };
                return self.point_on_edge(world, edge);
            }
        }

        let edge = self.random_edge();
        self.point_on_edge(world, edge)
    }
}

fn signum_or_zero(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
