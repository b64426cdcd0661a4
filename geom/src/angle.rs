use std::f64::consts::TAU;
use std::fmt;

use crate::Pt;

/// An angle in radians, always normalized to [0, 2π).
///
/// Angles around a center are measured starting from east (+x) and increase clockwise, toward
/// -y. So 0 points east, π/2 south, π west, and 3π/2 north. Going around a rectangle in
/// increasing angle visits the SE, SW, NW, and NE corners in that order.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Folds any finite angle into [0, 2π). Returns None for NaN or infinities.
    pub fn new(rads: f64) -> Option<Angle> {
        if rads.is_finite() {
            Some(Angle(normalize_radians(rads)))
        } else {
            None
        }
    }

    pub fn degrees(degs: f64) -> Option<Angle> {
        Angle::new(degs.to_radians())
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// The unit vector pointing along this angle, in lattice coordinates (y up).
    pub fn direction(self) -> (f64, f64) {
        let (sin, cos) = self.0.sin_cos();
        (cos, -sin)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Angle({} degrees)", self.to_degrees())
    }
}

/// Normalizes a finite angle in radians into [0, 2π), so that the result is congruent to the
/// input modulo 2π.
pub fn normalize_radians(rads: f64) -> f64 {
    // Adding 0.0 turns -0.0 into 0.0
    let result = rads.rem_euclid(TAU) + 0.0;
    // rem_euclid can round tiny negative inputs up to exactly 2π
    if result >= TAU {
        0.0
    } else {
        result
    }
}

/// The angle of `pt` as seen from `center`, clockwise from east.
pub fn angle_from_center(pt: Pt, center: Pt) -> Angle {
    let dx = f64::from(pt.x()) - f64::from(center.x());
    let dy = f64::from(pt.y()) - f64::from(center.y());
    Angle(normalize_radians((-dy).atan2(dx)))
}
