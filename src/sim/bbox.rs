//! Axis-aligned and oriented bounding boxes
//!
//! Neither box validates its bounds: `xmin <= xmax` and `ymin <= ymax` are
//! the caller's job. Inverted bounds give a box that contains nothing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{WorldPoint, rotate_point_around};

/// Outline color for debug drawing; `None` suppresses the outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxColor {
    #[default]
    None,
    Red,
    Green,
    Blue,
    Yellow,
    White,
}

impl BoxColor {
    /// RGBA stroke color, or `None` if the box is not drawn
    pub fn rgba(&self) -> Option<[f32; 4]> {
        match self {
            BoxColor::None => None,
            BoxColor::Red => Some([1.0, 0.0, 0.0, 1.0]),
            BoxColor::Green => Some([0.0, 1.0, 0.0, 1.0]),
            BoxColor::Blue => Some([0.0, 0.0, 1.0, 1.0]),
            BoxColor::Yellow => Some([1.0, 1.0, 0.0, 1.0]),
            BoxColor::White => Some([1.0, 1.0, 1.0, 1.0]),
        }
    }
}

/// An unrotated rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBox {
    xmin: f32,
    xmax: f32,
    ymin: f32,
    ymax: f32,
    color: BoxColor,
}

impl AxisAlignedBox {
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32, color: BoxColor) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
            color,
        }
    }

    /// Box spanning an upper-left and a lower-right corner (world y is up)
    pub fn from_corners(corner_ul: WorldPoint, corner_lr: WorldPoint, color: BoxColor) -> Self {
        Self::new(corner_ul.x, corner_lr.x, corner_lr.y, corner_ul.y, color)
    }

    /// Zero-sized box at the origin
    pub fn empty(color: BoxColor) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, color)
    }

    pub fn set_dimensions(&mut self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        self.xmin = xmin;
        self.xmax = xmax;
        self.ymin = ymin;
        self.ymax = ymax;
    }

    pub fn set_corners(&mut self, corner_ul: WorldPoint, corner_lr: WorldPoint) {
        self.set_dimensions(corner_ul.x, corner_lr.x, corner_lr.y, corner_ul.y);
    }

    #[inline]
    pub fn xmin(&self) -> f32 {
        self.xmin
    }

    #[inline]
    pub fn xmax(&self) -> f32 {
        self.xmax
    }

    #[inline]
    pub fn ymin(&self) -> f32 {
        self.ymin
    }

    #[inline]
    pub fn ymax(&self) -> f32 {
        self.ymax
    }

    pub fn corner_ul(&self) -> WorldPoint {
        Vec2::new(self.xmin, self.ymax)
    }

    pub fn corner_lr(&self) -> WorldPoint {
        Vec2::new(self.xmax, self.ymin)
    }

    pub fn center(&self) -> WorldPoint {
        Vec2::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f32 {
        self.ymax - self.ymin
    }

    /// Corners counterclockwise from lower-left
    pub fn corners(&self) -> [WorldPoint; 4] {
        [
            Vec2::new(self.xmin, self.ymin),
            Vec2::new(self.xmax, self.ymin),
            Vec2::new(self.xmax, self.ymax),
            Vec2::new(self.xmin, self.ymax),
        ]
    }

    pub fn color(&self) -> BoxColor {
        self.color
    }

    pub fn set_color(&mut self, color: BoxColor) {
        self.color = color;
    }

    /// Point-in-box test, inclusive on all four edges
    #[inline]
    pub fn is_inside(&self, x: f32, y: f32) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    /// Rectangle intersection; touching edges count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &AxisAlignedBox) -> bool {
        !(self.xmax < other.xmin
            || self.xmin > other.xmax
            || self.ymax < other.ymin
            || self.ymin > other.ymax)
    }
}

/// A rectangle carrying a rotation angle (degrees) about its center.
///
/// The bounds are the body's unrotated footprint centered on its position.
/// `is_inside` and `overlaps` ignore the angle and compare those bounds
/// directly, so they are exact only at angle 0. The `*_rotated` variants
/// account for the rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    bounds: AxisAlignedBox,
    angle: f32,
}

impl OrientedBox {
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32, angle: f32, color: BoxColor) -> Self {
        Self {
            bounds: AxisAlignedBox::new(xmin, xmax, ymin, ymax, color),
            angle,
        }
    }

    pub fn set_dimensions(&mut self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, angle: f32) {
        self.bounds.set_dimensions(xmin, xmax, ymin, ymax);
        self.angle = angle;
    }

    /// Unrotated bounds
    pub fn bounds(&self) -> &AxisAlignedBox {
        &self.bounds
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn center(&self) -> WorldPoint {
        self.bounds.center()
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.bounds.width() / 2.0, self.bounds.height() / 2.0)
    }

    pub fn color(&self) -> BoxColor {
        self.bounds.color()
    }

    pub fn set_color(&mut self, color: BoxColor) {
        self.bounds.set_color(color);
    }

    /// World-space corners after rotating the bounds about their center
    pub fn corners(&self) -> [WorldPoint; 4] {
        let center = self.center();
        self.bounds
            .corners()
            .map(|c| rotate_point_around(c, center, self.angle))
    }

    /// Point test in the box's own unrotated frame (angle ignored)
    #[inline]
    pub fn is_inside(&self, x: f32, y: f32) -> bool {
        self.bounds.is_inside(x, y)
    }

    /// Axis-aligned test on the unrotated bounds (angles ignored)
    #[inline]
    pub fn overlaps(&self, other: &OrientedBox) -> bool {
        self.bounds.overlaps(&other.bounds)
    }

    /// Point test after rotating the point into the box's local frame
    pub fn contains_point_rotated(&self, pt: WorldPoint) -> bool {
        let local = rotate_point_around(pt, self.center(), -self.angle);
        self.bounds.is_inside(local.x, local.y)
    }

    /// Separating-axis test between two rotated rectangles
    pub fn overlaps_rotated(&self, other: &OrientedBox) -> bool {
        let a = self.corners();
        let b = other.corners();
        let edges = [a[1] - a[0], a[3] - a[0], b[1] - b[0], b[3] - b[0]];

        // Edge normals, plus the world axes so zero-sized boxes still separate
        let axes = edges
            .iter()
            .flat_map(|e| [*e, e.perp()])
            .chain([Vec2::X, Vec2::Y]);

        for axis in axes {
            if axis.length_squared() == 0.0 {
                continue;
            }
            let (amin, amax) = project(&a, axis);
            let (bmin, bmax) = project(&b, axis);
            if amax < bmin || bmax < amin {
                return false;
            }
        }
        true
    }
}

fn project(corners: &[WorldPoint; 4], axis: Vec2) -> (f32, f32) {
    corners
        .iter()
        .map(|c| c.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}
