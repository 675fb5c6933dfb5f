//! The active set of bodies and the per-frame tick
//!
//! A tick moves every body first and only then runs the collision pass, so
//! no collision query ever sees a half-updated field. Events are reported
//! to the caller; removing bodies is the caller's decision.

use glam::Vec2;

use super::bbox::BoxColor;
use super::body::Body;
use super::collision::NarrowPhase;
use super::motion::ReferenceFrame;
use crate::error::ConfigError;
use crate::settings::Settings;
use crate::spawn::Spawner;
use crate::world::{World, WorldType};
use crate::{WorldPoint, normalize_degrees, rotate_point_around, rotate_point_by};

/// Player controls for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Turn rate (degrees per second, counterclockwise)
    pub turn: f32,
    /// Acceleration along the ship's heading (world units per second squared)
    pub thrust: f32,
}

/// Something the caller may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// An asteroid touched the ship
    ShipHit { asteroid: u32 },
    /// Two asteroids touched (`a < b`)
    AsteroidsCollide { a: u32, b: u32 },
    /// An egocentric asteroid drifted out of view
    LeftField { id: u32 },
}

pub struct Field {
    pub seed: u64,
    pub world: World,
    pub world_type: WorldType,
    pub narrow_phase: NarrowPhase,
    /// Box outline color given to new bodies
    pub box_color: BoxColor,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player heading (degrees, [0, 360)). Drawn on the ship in geocentric mode; in
    /// egocentric mode the ship stays upright and the world turns instead.
    pub heading: f32,
    pub ship: Body,
    /// Sorted by id
    pub asteroids: Vec<Body>,
    spawner: Spawner,
    next_id: u32,
}

impl Field {
    /// Build a field with the ship at the origin and the initial asteroids
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let world = settings.world()?;
        let box_color = if settings.show_bounding_boxes {
            BoxColor::Red
        } else {
            BoxColor::None
        };

        let mut field = Self {
            seed: settings.seed,
            world,
            world_type: settings.world_type,
            narrow_phase: settings.narrow_phase,
            box_color,
            time_ticks: 0,
            heading: 0.0,
            ship: Body::ship(0, Vec2::ZERO).with_box_color(box_color),
            asteroids: Vec::new(),
            spawner: Spawner::new(settings.seed, settings.spawn.clone()),
            next_id: 1,
        };

        for _ in 0..settings.spawn.initial_asteroids {
            field.spawn_asteroid();
        }

        log::info!(
            "Field created: {:?}, {} asteroids, world [{}, {}] x [{}, {}]",
            field.world_type,
            field.asteroids.len(),
            field.world.x_min,
            field.world.x_max,
            field.world.y_min,
            field.world.y_max
        );

        Ok(field)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Frame the current tick runs in
    pub fn reference_frame(&self) -> ReferenceFrame {
        match self.world_type {
            WorldType::Geocentric => ReferenceFrame::Geocentric,
            WorldType::Egocentric => ReferenceFrame::Egocentric {
                player_velocity: self.ship.canonical_velocity(),
                player_angle: self.heading,
            },
        }
    }

    /// Spawn an asteroid anywhere in the world, moving in a random direction
    pub fn spawn_asteroid(&mut self) -> u32 {
        let position = self.spawner.random_world_point(&self.world);
        let (vmin, vmax) = (self.spawner.ranges().speed_min, self.spawner.ranges().speed_max);
        let velocity = self.spawner.random_velocity(vmin, vmax);
        self.spawn_asteroid_at(position, velocity)
    }

    /// Spawn an asteroid on the world edge, heading inward.
    ///
    /// The edge point and inward velocity are picked on the field as the
    /// player sees it. In egocentric mode they are then turned by the heading
    /// into the world-fixed frame, so the displayed body starts on the edge.
    pub fn spawn_edge_asteroid(&mut self) -> u32 {
        let (view_frame, turn) = match self.reference_frame() {
            ReferenceFrame::Geocentric => (ReferenceFrame::Geocentric, None),
            ReferenceFrame::Egocentric {
                player_velocity,
                player_angle,
            } => (
                ReferenceFrame::Egocentric {
                    player_velocity: rotate_point_by(player_velocity, -player_angle),
                    player_angle,
                },
                Some(player_angle),
            ),
        };

        let shown = self.spawner.generate_edge_position(&self.world, &view_frame);
        let (vmin, vmax) = (self.spawner.ranges().speed_min, self.spawner.ranges().speed_max);
        let shown_velocity = self
            .spawner
            .random_edge_velocity(&self.world, shown, vmin, vmax);

        match turn {
            Some(angle) => self.spawn_asteroid_at(
                rotate_point_around(shown, Vec2::ZERO, angle),
                rotate_point_by(shown_velocity, angle),
            ),
            None => self.spawn_asteroid_at(shown, shown_velocity),
        }
    }

    fn spawn_asteroid_at(&mut self, position: WorldPoint, velocity: Vec2) -> u32 {
        let id = self.next_entity_id();
        let width = self.spawner.random_width();
        let height = width * self.spawner.random_aspect();
        let angle = self.spawner.random_angle_deg();
        let spin = self.spawner.random_spin_deg();

        let mut asteroid = Body::asteroid(id, position, angle, spin, width, height, velocity)
            .with_box_color(self.box_color);
        // Egocentric bodies are displayed in the turned frame from the start
        if let ReferenceFrame::Egocentric { player_angle, .. } = self.reference_frame() {
            asteroid.position = rotate_point_around(position, Vec2::ZERO, -player_angle);
            asteroid.refit_boxes();
        }

        log::info!(
            "Spawned asteroid {} at ({:.2}, {:.2}), {:.2} x {:.2}",
            id,
            position.x,
            position.y,
            width,
            height
        );
        self.asteroids.push(asteroid);
        id
    }

    /// Remove an asteroid by ID
    pub fn remove(&mut self, id: u32) -> Option<Body> {
        let idx = self.asteroids.iter().position(|a| a.id == id)?;
        Some(self.asteroids.remove(idx))
    }

    pub fn asteroid(&self, id: u32) -> Option<&Body> {
        self.asteroids.iter().find(|a| a.id == id)
    }

    /// Ensure asteroids are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.asteroids.sort_by_key(|a| a.id);
    }

    fn steer_ship(&mut self, input: &TickInput, dt: f32) {
        if input.turn != 0.0 {
            self.heading = normalize_degrees(self.heading + input.turn * dt);
        }
        if input.thrust != 0.0 {
            // Ship's nose points along +y at heading 0
            let dir = rotate_point_by(Vec2::Y, self.heading);
            let v = self.ship.canonical_velocity() + dir * input.thrust * dt;
            self.ship.set_velocity(v);
        }
    }

    /// Collision pass over the already-updated field
    fn detect_collisions(&self) -> Vec<FieldEvent> {
        let mut events = Vec::new();

        for asteroid in &self.asteroids {
            if asteroid.collides_with_using(&self.ship, self.narrow_phase) {
                events.push(FieldEvent::ShipHit {
                    asteroid: asteroid.id,
                });
            }
        }

        for (i, a) in self.asteroids.iter().enumerate() {
            for b in &self.asteroids[i + 1..] {
                if a.collides_with_using(b, self.narrow_phase) {
                    events.push(FieldEvent::AsteroidsCollide { a: a.id, b: b.id });
                }
            }
        }

        if self.world_type == WorldType::Egocentric {
            for a in &self.asteroids {
                let margin = a.width().max(a.height());
                if self.world.is_outside_by(a.position(), margin) {
                    events.push(FieldEvent::LeftField { id: a.id });
                }
            }
        }

        events
    }
}

/// Advance the field by one frame and report what happened
pub fn tick(field: &mut Field, input: &TickInput, dt: f32) -> Vec<FieldEvent> {
    field.time_ticks += 1;
    field.steer_ship(input, dt);

    match field.world_type {
        WorldType::Geocentric => {
            field.ship.angle = field.heading;
            field.ship.update(dt, &field.world, &ReferenceFrame::Geocentric);
        }
        WorldType::Egocentric => {
            // The ship stays put at the origin, facing up
            field.ship.refit_boxes();
        }
    }

    let frame = field.reference_frame();
    for asteroid in &mut field.asteroids {
        asteroid.update(dt, &field.world, &frame);
    }

    field.normalize_order();

    let events = field.detect_collisions();
    for event in &events {
        log::debug!("tick {}: {:?}", field.time_ticks, event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn empty_settings(world_type: WorldType) -> Settings {
        let mut settings = Settings::default();
        settings.world_type = world_type;
        settings.spawn.initial_asteroids = 0;
        settings
    }

    fn place(field: &mut Field, pos: Vec2, vel: Vec2, size: f32) -> u32 {
        let id = field.next_entity_id();
        field
            .asteroids
            .push(Body::asteroid(id, pos, 0.0, 0.0, size, size, vel));
        id
    }

    #[test]
    fn test_new_field_spawns_initial_asteroids() {
        let field = Field::new(&Settings::default()).unwrap();
        assert_eq!(field.asteroids.len(), Settings::default().spawn.initial_asteroids as usize);
        assert_eq!(field.ship.position(), Vec2::ZERO);
        for a in &field.asteroids {
            assert!(field.world.contains(a.position()));
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.spawn.width_min = 5.0;
        settings.spawn.width_max = 1.0;
        assert!(Field::new(&settings).is_err());
    }

    #[test]
    fn test_determinism() {
        let mut f1 = Field::new(&Settings::default()).unwrap();
        let mut f2 = Field::new(&Settings::default()).unwrap();
        let input = TickInput {
            turn: 30.0,
            thrust: 1.0,
        };
        for _ in 0..120 {
            let e1 = tick(&mut f1, &input, SIM_DT);
            let e2 = tick(&mut f2, &input, SIM_DT);
            assert_eq!(e1, e2);
        }
        for (a, b) in f1.asteroids.iter().zip(&f2.asteroids) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.position(), b.position());
        }
        assert_eq!(f1.ship.position(), f2.ship.position());
    }

    #[test]
    fn test_collision_events() {
        let mut field = Field::new(&empty_settings(WorldType::Geocentric)).unwrap();
        let hit_ship = place(&mut field, Vec2::new(0.5, 0.0), Vec2::ZERO, 1.0);
        let a = place(&mut field, Vec2::new(5.0, 5.0), Vec2::ZERO, 1.0);
        let b = place(&mut field, Vec2::new(5.5, 5.0), Vec2::ZERO, 1.0);
        let _loner = place(&mut field, Vec2::new(-5.0, -5.0), Vec2::ZERO, 1.0);

        let events = tick(&mut field, &TickInput::default(), SIM_DT);
        assert_eq!(
            events,
            vec![
                FieldEvent::ShipHit { asteroid: hit_ship },
                FieldEvent::AsteroidsCollide { a, b },
            ]
        );
    }

    #[test]
    fn test_geocentric_ship_moves_and_turns() {
        let mut field = Field::new(&empty_settings(WorldType::Geocentric)).unwrap();
        let input = TickInput {
            turn: 90.0,
            thrust: 0.0,
        };
        tick(&mut field, &input, 1.0);
        assert!((field.ship.angle() - 90.0).abs() < 1e-4);

        // Thrust at heading 90 points along -x
        let input = TickInput {
            turn: 0.0,
            thrust: 2.0,
        };
        tick(&mut field, &input, 1.0);
        assert!((field.ship.velocity() - Vec2::new(-2.0, 0.0)).length() < 1e-4);
        assert!((field.ship.position() - Vec2::new(-2.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_egocentric_ship_stays_at_origin() {
        let mut field = Field::new(&empty_settings(WorldType::Egocentric)).unwrap();
        let id = place(&mut field, Vec2::new(0.0, 4.0), Vec2::ZERO, 1.0);
        let input = TickInput {
            turn: 0.0,
            thrust: 1.0,
        };
        for _ in 0..3 {
            tick(&mut field, &input, 1.0);
        }
        assert_eq!(field.ship.position(), Vec2::ZERO);
        assert_eq!(field.ship.angle(), 0.0);
        // Ship flies up at 1, 2, 3 units/s; the asteroid falls toward it
        let asteroid = field.asteroid(id).unwrap();
        assert!(asteroid.position().y < 4.0);
        assert!((asteroid.velocity() - Vec2::new(0.0, -3.0)).length() < 1e-4);
    }

    #[test]
    fn test_egocentric_world_turns_opposite_heading() {
        let mut field = Field::new(&empty_settings(WorldType::Egocentric)).unwrap();
        let id = place(&mut field, Vec2::new(0.0, 4.0), Vec2::ZERO, 1.0);
        let input = TickInput {
            turn: 90.0,
            thrust: 0.0,
        };
        tick(&mut field, &input, 1.0);
        // Turning left by 90 puts the asteroid that was ahead on the right
        let p = field.asteroid(id).unwrap().position();
        assert!((p - Vec2::new(4.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_egocentric_left_field() {
        let mut field = Field::new(&empty_settings(WorldType::Egocentric)).unwrap();
        let id = place(&mut field, Vec2::new(9.5, 0.0), Vec2::new(5.0, 0.0), 1.0);
        let events = tick(&mut field, &TickInput::default(), 1.0);
        assert!(events.contains(&FieldEvent::LeftField { id }));

        assert!(field.remove(id).is_some());
        assert!(field.asteroid(id).is_none());
        assert!(field.remove(id).is_none());
    }

    #[test]
    fn test_edge_spawn() {
        let mut field = Field::new(&empty_settings(WorldType::Geocentric)).unwrap();
        for _ in 0..20 {
            let id = field.spawn_edge_asteroid();
            let a = field.asteroid(id).unwrap();
            let p = a.position();
            let w = &field.world;
            assert!(p.x == w.x_min || p.x == w.x_max || p.y == w.y_min || p.y == w.y_max);
            let to_center = w.center() - p;
            assert!(a.velocity().x * to_center.x >= 0.0);
            assert!(a.velocity().y * to_center.y >= 0.0);
        }
    }

    #[test]
    fn test_egocentric_edge_spawn_stays_in_view() {
        let mut field = Field::new(&empty_settings(WorldType::Egocentric)).unwrap();
        field.heading = 45.0;
        field.ship.set_velocity(Vec2::new(1.0, 1.0));

        for _ in 0..200 {
            let id = field.spawn_edge_asteroid();
            let a = field.asteroid(id).unwrap();
            // Displayed position sits on the edge of the world rectangle
            let p = a.position();
            let w = &field.world;
            let on_edge = (p.x - w.x_min).abs() < 1e-3
                || (p.x - w.x_max).abs() < 1e-3
                || (p.y - w.y_min).abs() < 1e-3
                || (p.y - w.y_max).abs() < 1e-3;
            assert!(on_edge, "asteroid {} displayed at {:?}", id, p);

            let events = tick(&mut field, &TickInput::default(), 1e-4);
            assert!(!events.contains(&FieldEvent::LeftField { id }));
            field.remove(id);
        }
    }

    #[test]
    fn test_egocentric_edge_spawn_heads_inward_on_screen() {
        let mut field = Field::new(&empty_settings(WorldType::Egocentric)).unwrap();
        field.heading = 120.0;

        for _ in 0..50 {
            let id = field.spawn_edge_asteroid();
            let a = field.asteroid(id).unwrap();
            // Turn the world-fixed velocity into the displayed frame
            let shown_velocity = rotate_point_by(a.canonical_velocity(), -field.heading);
            let to_center = field.world.center() - a.position();
            assert!(shown_velocity.dot(to_center) > -1e-3);
            field.remove(id);
        }
    }

    #[test]
    fn test_bounding_box_color_from_settings() {
        let mut settings = empty_settings(WorldType::Geocentric);
        settings.show_bounding_boxes = true;
        let mut field = Field::new(&settings).unwrap();
        let id = field.spawn_asteroid();
        assert_eq!(field.asteroid(id).unwrap().axis_aligned_box().color(), BoxColor::Red);
        assert_eq!(field.ship.oriented_box().color(), BoxColor::Red);
    }
}
