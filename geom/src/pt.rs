use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Angle;

/// A point on the integer lattice. Equality, ordering, and hashing are exact, so this is safe to
/// use as a map key. Ordering is lexicographic by (x, y).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pt {
    x: i32,
    y: i32,
}

impl Pt {
    pub const fn new(x: i32, y: i32) -> Pt {
        Pt { x, y }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    /// Exact squared Euclidean distance. Use this for comparisons. Points at opposite corners of
    /// the lattice are almost 2^33 apart squared per axis, which doesn't fit in an i64.
    pub fn dist_squared(self, other: Pt) -> i128 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        dx * dx + dy * dy
    }

    pub fn dist_to(self, other: Pt) -> f64 {
        (self.dist_squared(other) as f64).sqrt()
    }

    /// The angle of this point as seen from `center`. See `Angle` for the convention.
    pub fn angle_from(self, center: Pt) -> Angle {
        crate::angle_from_center(self, center)
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pt {
    fn from((x, y): (i32, i32)) -> Pt {
        Pt::new(x, y)
    }
}
