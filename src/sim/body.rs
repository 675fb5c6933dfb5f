//! Moving, colliding bodies: asteroids and the player ship

use glam::Vec2;

use super::bbox::{AxisAlignedBox, BoxColor, OrientedBox};
use crate::consts::{BOX_PROBE_ANGLE_DEG, SHIP_HEIGHT, SHIP_WIDTH};
use crate::{Velocity, WorldPoint, rotate_point_by};

/// What a body is, which decides how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Asteroid,
    Ship,
}

/// A body in the field.
///
/// `position` and `velocity` are what the player sees. In geocentric mode
/// they equal `canonical_position` and `canonical_velocity`. In egocentric
/// mode the canonical values are integrated and the displayed ones are
/// derived from them each frame (see `Body::update`).
#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32,
    pub(super) kind: BodyKind,
    pub(super) width: f32,
    pub(super) height: f32,
    pub(super) half_width: f32,
    pub(super) half_height: f32,
    pub(super) position: WorldPoint,
    pub(super) canonical_position: WorldPoint,
    /// Degrees, counterclockwise
    pub(super) angle: f32,
    pub(super) velocity: Velocity,
    pub(super) canonical_velocity: Velocity,
    /// Degrees per second
    pub(super) spin: f32,
    /// Offsets of the axis-aligned box from `position`, fixed at construction
    pub(super) extent_min: Vec2,
    pub(super) extent_max: Vec2,
    pub(super) axis_aligned_box: AxisAlignedBox,
    pub(super) oriented_box: OrientedBox,
}

impl Body {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: u32,
        kind: BodyKind,
        position: WorldPoint,
        angle: f32,
        spin: f32,
        width: f32,
        height: f32,
        velocity: Velocity,
    ) -> Self {
        let mut body = Self {
            id,
            kind,
            width,
            height,
            half_width: width / 2.0,
            half_height: height / 2.0,
            position,
            canonical_position: position,
            angle,
            velocity,
            canonical_velocity: velocity,
            spin,
            extent_min: Vec2::ZERO,
            extent_max: Vec2::ZERO,
            axis_aligned_box: AxisAlignedBox::empty(BoxColor::None),
            oriented_box: OrientedBox::new(0.0, 0.0, 0.0, 0.0, angle, BoxColor::None),
        };
        body.init_bounding_box();
        body
    }

    /// A rectangular asteroid with footprint `width` x `height`
    pub fn asteroid(
        id: u32,
        position: WorldPoint,
        angle: f32,
        spin: f32,
        width: f32,
        height: f32,
        velocity: Velocity,
    ) -> Self {
        Self::new(
            id,
            BodyKind::Asteroid,
            position,
            angle,
            spin,
            width,
            height,
            velocity,
        )
    }

    /// The player ship, at rest and pointing up
    pub fn ship(id: u32, position: WorldPoint) -> Self {
        Self::new(
            id,
            BodyKind::Ship,
            position,
            0.0,
            0.0,
            SHIP_WIDTH,
            SHIP_HEIGHT,
            Vec2::ZERO,
        )
    }

    /// Set the outline color of both boxes
    pub fn with_box_color(mut self, color: BoxColor) -> Self {
        self.set_box_color(color);
        self
    }

    pub fn set_box_color(&mut self, color: BoxColor) {
        self.axis_aligned_box.set_color(color);
        self.oriented_box.set_color(color);
    }

    /// Size both boxes from the footprint.
    ///
    /// The axis-aligned box must contain the footprint at every rotation, so
    /// its extent is the running min/max of the corners over a set of probe
    /// rotations: unrotated, 45 degrees (the widest for a square), and the
    /// two angles at which a `w x h` rectangle is widest along x and along y.
    /// Those offsets are kept for the life of the body; later frames only
    /// move the box.
    fn init_bounding_box(&mut self) {
        let (extent_min, extent_max) = max_rotated_extent(self.half_width, self.half_height);
        self.extent_min = extent_min;
        self.extent_max = extent_max;
        self.refit_boxes();
    }

    /// Re-center both boxes on the current position and angle
    pub fn refit_boxes(&mut self) {
        let p = self.position;
        self.axis_aligned_box.set_dimensions(
            p.x + self.extent_min.x,
            p.x + self.extent_max.x,
            p.y + self.extent_min.y,
            p.y + self.extent_max.y,
        );
        self.oriented_box.set_dimensions(
            p.x - self.half_width,
            p.x + self.half_width,
            p.y - self.half_height,
            p.y + self.half_height,
            self.angle,
        );
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Displayed position
    pub fn position(&self) -> WorldPoint {
        self.position
    }

    /// Position before the egocentric rotation is applied
    pub fn canonical_position(&self) -> WorldPoint {
        self.canonical_position
    }

    /// Move the body (both representations) and refit its boxes
    pub fn set_position(&mut self, position: WorldPoint) {
        self.position = position;
        self.canonical_position = position;
        self.refit_boxes();
    }

    /// Displayed velocity
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Velocity in the world-fixed frame
    pub fn canonical_velocity(&self) -> Velocity {
        self.canonical_velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
        self.canonical_velocity = velocity;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.refit_boxes();
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn set_spin(&mut self, spin: f32) {
        self.spin = spin;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }

    /// Offsets of the axis-aligned box from the position
    pub fn box_extents(&self) -> (Vec2, Vec2) {
        (self.extent_min, self.extent_max)
    }

    /// Broad-phase box, large enough for any rotation
    pub fn axis_aligned_box(&self) -> &AxisAlignedBox {
        &self.axis_aligned_box
    }

    /// Narrow-phase box, the footprint at the current angle
    pub fn oriented_box(&self) -> &OrientedBox {
        &self.oriented_box
    }
}

/// Min/max corner offsets of a `2hw x 2hh` rectangle over the probe rotations
fn max_rotated_extent(half_width: f32, half_height: f32) -> (Vec2, Vec2) {
    let corners = [
        Vec2::new(-half_width, half_height),
        Vec2::new(half_width, half_height),
        Vec2::new(half_width, -half_height),
        Vec2::new(-half_width, -half_height),
    ];
    let widest_x = half_height.atan2(half_width).to_degrees();
    let probes = [0.0, BOX_PROBE_ANGLE_DEG, widest_x, 90.0 - widest_x];

    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for degrees in probes {
        for corner in corners {
            let rotated = rotate_point_by(corner, degrees);
            min = min.min(rotated);
            max = max.max(rotated);
        }
    }
    (min, max)
}
