//! Two-phase collision queries between bodies
//!
//! The broad phase compares the conservative axis-aligned boxes and rejects
//! most pairs. Only pairs that pass it reach the narrow phase on the
//! oriented boxes.

use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::WorldPoint;

/// Narrow-phase test applied after the broad phase passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NarrowPhase {
    /// Plain rectangle test on the unrotated footprints. Exact only when
    /// both angles are 0.
    #[default]
    Unrotated,
    /// Separating-axis test on the rotated footprints
    SeparatingAxis,
}

impl Body {
    /// True if the broad-phase boxes of the two bodies overlap
    #[inline]
    pub fn broad_phase_overlaps(&self, other: &Body) -> bool {
        self.axis_aligned_box.overlaps(&other.axis_aligned_box)
    }

    /// Collision test with the default narrow phase
    pub fn collides_with(&self, other: &Body) -> bool {
        self.collides_with_using(other, NarrowPhase::default())
    }

    pub fn collides_with_using(&self, other: &Body, narrow_phase: NarrowPhase) -> bool {
        if !self.broad_phase_overlaps(other) {
            return false;
        }

        match narrow_phase {
            NarrowPhase::Unrotated => self.oriented_box.overlaps(&other.oriented_box),
            NarrowPhase::SeparatingAxis => self.oriented_box.overlaps_rotated(&other.oriented_box),
        }
    }

    /// Point test with the default narrow phase
    pub fn is_inside(&self, pt: WorldPoint) -> bool {
        self.is_inside_using(pt, NarrowPhase::default())
    }

    pub fn is_inside_using(&self, pt: WorldPoint, narrow_phase: NarrowPhase) -> bool {
        if !self.axis_aligned_box.is_inside(pt.x, pt.y) {
            return false;
        }

        match narrow_phase {
            NarrowPhase::Unrotated => self.oriented_box.is_inside(pt.x, pt.y),
            NarrowPhase::SeparatingAxis => self.oriented_box.contains_point_rotated(pt),
        }
    }
}
