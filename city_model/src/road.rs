use std::fmt;

use serde::{Deserialize, Serialize};

use geom::Pt;

/// Roads added without an explicit quality get this.
pub const DEFAULT_ROAD_QUALITY: u32 = 5;
/// Connectors from the network out to the border are the roughest roads.
pub const BORDER_ROAD_QUALITY: u32 = 1;

/// A straight road between two lattice points. Quality only affects how wide the road is drawn.
///
/// Roads are directed for the purpose of equality: `Road::new(a, b, q)` and `Road::new(b, a, q)`
/// are different roads, and a `City` will happily store both. Use `connects` to ask about the
/// underlying segment regardless of direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Road {
    pub a: Pt,
    pub b: Pt,
    pub quality: u32,
}

impl Road {
    pub fn new(a: Pt, b: Pt, quality: u32) -> Road {
        Road { a, b, quality }
    }

    pub fn endpoints(&self) -> [Pt; 2] {
        [self.a, self.b]
    }

    /// Does this road join these two points, in either direction?
    pub fn connects(&self, pt1: Pt, pt2: Pt) -> bool {
        (self.a == pt1 && self.b == pt2) || (self.a == pt2 && self.b == pt1)
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Road from {} to {} (quality {})", self.a, self.b, self.quality)
    }
}
