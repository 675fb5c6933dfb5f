//! Deterministic simulation module
//!
//! All field logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (see `crate::spawn`)
//! - Stable iteration order (by body ID)
//! - No rendering or platform dependencies

pub mod bbox;
pub mod body;
pub mod collision;
pub mod field;
pub mod motion;

pub use bbox::{AxisAlignedBox, BoxColor, OrientedBox};
pub use body::{Body, BodyKind};
pub use collision::NarrowPhase;
pub use field::{Field, FieldEvent, TickInput, tick};
pub use motion::ReferenceFrame;
