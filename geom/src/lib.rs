//! Lattice geometry for the city road network: integer points, axis-aligned bounds, and angles
//! measured around a center.

mod angle;
mod bounds;
mod pt;

pub use crate::angle::{angle_from_center, normalize_radians, Angle};
pub use crate::bounds::Bounds;
pub use crate::pt::Pt;

/// Below this, a component of a direction vector is treated as zero.
pub const EPSILON_DIRECTION: f64 = 1e-12;
