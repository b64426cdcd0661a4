use serde::{Deserialize, Serialize};

use crate::Pt;

/// An axis-aligned rectangle on the lattice, inclusive on all sides. A fresh `Bounds` is empty
/// and covers nothing until the first `update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new() -> Bounds {
        Bounds {
            min_x: i32::MAX,
            max_x: i32::MIN,
            min_y: i32::MAX,
            max_y: i32::MIN,
        }
    }

    pub fn from(pts: &[Pt]) -> Bounds {
        let mut b = Bounds::new();
        for pt in pts {
            b.update(*pt);
        }
        b
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn update(&mut self, pt: Pt) {
        self.min_x = self.min_x.min(pt.x());
        self.max_x = self.max_x.max(pt.x());
        self.min_y = self.min_y.min(pt.y());
        self.max_y = self.max_y.max(pt.y());
    }

    pub fn contains(&self, pt: Pt) -> bool {
        pt.x() >= self.min_x && pt.x() <= self.max_x && pt.y() >= self.min_y && pt.y() <= self.max_y
    }

    /// True if the point lies on one of the four edges.
    pub fn on_perimeter(&self, pt: Pt) -> bool {
        self.contains(pt)
            && (pt.x() == self.min_x
                || pt.x() == self.max_x
                || pt.y() == self.min_y
                || pt.y() == self.max_y)
    }

    pub fn width(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    pub fn height(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        i64::from(self.max_y) - i64::from(self.min_y)
    }

    /// The midpoint, rounding toward zero. None if empty.
    pub fn center(&self) -> Option<Pt> {
        if self.is_empty() {
            return None;
        }
        let x = (i64::from(self.min_x) + i64::from(self.max_x)) / 2;
        let y = (i64::from(self.min_y) + i64::from(self.max_y)) / 2;
        // The midpoint of two i32s always fits in an i32
        Some(Pt::new(x as i32, y as i32))
    }

    /// Grows the rectangle outwards by `dx` on the left and right, and `dy` on the top and bottom.
    /// Saturates at the edges of the lattice. Does nothing if empty.
    pub fn expand(&mut self, dx: i32, dy: i32) {
        if self.is_empty() {
            return;
        }
        self.min_x = self.min_x.saturating_sub(dx);
        self.max_x = self.max_x.saturating_add(dx);
        self.min_y = self.min_y.saturating_sub(dy);
        self.max_y = self.max_y.saturating_add(dy);
    }

    /// NW, NE, SE, SW
    pub fn get_corners(&self) -> [Pt; 4] {
        [
            Pt::new(self.min_x, self.max_y),
            Pt::new(self.max_x, self.max_y),
            Pt::new(self.max_x, self.min_y),
            Pt::new(self.min_x, self.min_y),
        ]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new()
    }
}
