//! Turning border point angles into points on the city's boundary, and connecting those points
//! to the rest of the road network.

use std::f64::consts::TAU;

use abstutil::MultiMap;
use geom::{Angle, Bounds, Pt, EPSILON_DIRECTION};

use crate::{City, Road, BORDER_ROAD_QUALITY};

/// Which edge of the boundary an angle from the center hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    North,
    East,
    South,
    West,
}

/// The angles from the center to each corner of the boundary.
struct CornerAngles {
    nw: f64,
    ne: f64,
    se: f64,
    sw: f64,
}

impl CornerAngles {
    fn new(bounds: &Bounds, center: Pt) -> CornerAngles {
        let [nw, ne, se, sw] = bounds.get_corners();
        CornerAngles {
            nw: nw.angle_from(center).radians(),
            ne: ne.angle_from(center).radians(),
            se: se.angle_from(center).radians(),
            sw: sw.angle_from(center).radians(),
        }
    }

    /// Each side owns the half-open range of angles ending at its clockwise-most corner. East
    /// wraps around 0.
    fn classify(&self, angle: f64) -> Option<Side> {
        if angle > self.nw && angle <= self.ne {
            Some(Side::North)
        } else if (angle > self.ne && angle <= TAU) || (angle >= 0.0 && angle <= self.se) {
            Some(Side::East)
        } else if angle > self.se && angle <= self.sw {
            Some(Side::South)
        } else if angle > self.sw && angle <= self.nw {
            Some(Side::West)
        } else {
            None
        }
    }
}

/// Returns the side each angle hits, or None if it doesn't fit any side. The bounds must not be
/// empty.
pub fn classify_angles(bounds: &Bounds, angles: &[Angle]) -> Vec<Option<Side>> {
    let center = match bounds.center() {
        Some(pt) => pt,
        None => return vec![None; angles.len()],
    };
    let corners = CornerAngles::new(bounds, center);
    angles
        .iter()
        .map(|angle| corners.classify(angle.radians()))
        .collect()
}

/// Casts a ray from the center of the bounds along each angle, and returns where it meets the
/// boundary, in the same order as the angles. Angles that can't be matched to a side are
/// logged and skipped.
pub fn find_border_points(bounds: &Bounds, angles: &[Angle]) -> Vec<Pt> {
    let center = match bounds.center() {
        Some(pt) => pt,
        None => {
            if !angles.is_empty() {
                warn!(
                    "No roads yet, so {} border point angles have no boundary to hit",
                    angles.len()
                );
            }
            return Vec::new();
        }
    };

    let mut border_points = Vec::new();
    for (angle, side) in angles.iter().zip(classify_angles(bounds, angles)) {
        match side {
            Some(side) => {
                border_points.push(project_to_side(bounds, center, *angle, side));
            }
            None => {
                warn!("No side of the boundary found for {}", angle);
            }
        }
    }
    border_points
}

/// Where the ray from `center` along `angle` meets the `side` edge of `bounds`.
pub fn project_to_side(bounds: &Bounds, center: Pt, angle: Angle, side: Side) -> Pt {
    let (dx, dy) = angle.direction();
    match side {
        Side::North | Side::South => {
            let edge_y = if side == Side::North {
                bounds.max_y
            } else {
                bounds.min_y
            };
            let x = along_edge(
                center.x(),
                i64::from(edge_y) - i64::from(center.y()),
                dx,
                dy,
                (bounds.min_x, bounds.max_x),
            );
            Pt::new(x, edge_y)
        }
        Side::East | Side::West => {
            let edge_x = if side == Side::East {
                bounds.max_x
            } else {
                bounds.min_x
            };
            let y = along_edge(
                center.y(),
                i64::from(edge_x) - i64::from(center.x()),
                dy,
                dx,
                (bounds.min_y, bounds.max_y),
            );
            Pt::new(edge_x, y)
        }
    }
}

/// Follows a ray from `start` until it has moved `to_edge` units across towards an edge, and
/// returns the coordinate reached along that edge, rounded and clamped to `(min, max)`.
/// `along` and `across` are the ray direction's components parallel and perpendicular to the
/// edge.
///
/// If the ray runs parallel to the edge, points away from it, or the center sits right on the
/// edge, there's no meaningful intersection, so the middle of the edge is used instead.
fn along_edge(start: i32, to_edge: i64, along: f64, across: f64, (min, max): (i32, i32)) -> i32 {
    let midpoint = ((i64::from(min) + i64::from(max)) / 2) as i32;
    if to_edge == 0 || across.abs() < EPSILON_DIRECTION {
        debug!(
            "Degenerate border projection ({} units to the edge, direction {}), using the middle \
             of the edge",
            to_edge, across
        );
        return midpoint;
    }
    let t = to_edge as f64 / across;
    if t < 0.0 {
        debug!("Border projection points away from the edge, using the middle of the edge");
        return midpoint;
    }
    let pos = (f64::from(start) + along * t).round();
    pos.clamp(f64::from(min), f64::from(max)) as i32
}

/// The intersection closest to `pt`. Ties go to the smallest (x, y).
pub fn nearest_intersection(intersections: &MultiMap<Pt, Road>, pt: Pt) -> Option<Pt> {
    // Keys are sorted, and min_by_key keeps the first of equal elements
    intersections
        .keys()
        .min_by_key(|i| i.dist_squared(pt))
        .cloned()
}

/// Connects every border point to its nearest intersection with a low-quality road. Returns
/// the roads actually added.
pub(crate) fn attach_border_points(city: &mut City) -> Vec<Road> {
    let border_points = city.border_points();

    // Match everything up first, so connectors don't become candidates for later border points
    let mut connections = Vec::new();
    for bp in border_points {
        match nearest_intersection(&city.intersections, bp) {
            Some(i) => connections.push((i, bp)),
            None => {
                warn!("No intersections to connect border point {} to", bp);
            }
        }
    }

    let mut added = Vec::new();
    for (i, bp) in connections {
        let road = Road::new(i, bp, BORDER_ROAD_QUALITY);
        if city.insert_road(road) {
            added.push(road);
        } else {
            debug!("{} already exists", road);
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn pt(x: i32, y: i32) -> Pt {
        Pt::new(x, y)
    }

    fn angles(radians: &[f64]) -> Vec<Angle> {
        radians.iter().map(|r| Angle::new(*r).unwrap()).collect()
    }

    fn square(half: i32) -> Bounds {
        Bounds::from(&[pt(-half, -half), pt(half, half)])
    }

    #[test]
    fn compass_points_on_a_square() {
        let bounds = square(110);
        let input = angles(&[0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2, FRAC_PI_4]);
        assert_eq!(
            classify_angles(&bounds, &input[0..4]),
            vec![
                Some(Side::East),
                Some(Side::South),
                Some(Side::West),
                Some(Side::North),
            ]
        );
        // The last one is exactly at the SE corner
        assert_eq!(
            find_border_points(&bounds, &input),
            vec![
                pt(110, 0),
                pt(0, -110),
                pt(-110, 0),
                pt(0, 110),
                pt(110, -110)
            ]
        );
    }

    #[test]
    fn points_keep_input_order() {
        let bounds = square(100);
        let input = angles(&[3.0 * FRAC_PI_2, 0.0, FRAC_PI_2]);
        assert_eq!(
            find_border_points(&bounds, &input),
            vec![pt(0, 100), pt(100, 0), pt(0, -100)]
        );
    }

    #[test]
    fn off_center_projection() {
        // Center is (50, 10); the rectangle is wider than it is tall
        let bounds = Bounds::from(&[pt(0, 0), pt(100, 20)]);
        // 30 degrees clockwise from east hits the bottom edge: 10 units down means
        // 10 / tan(30) = 17.32 units across
        let bp = find_border_points(&bounds, &angles(&[PI / 6.0]));
        assert_eq!(bp, vec![pt(67, 0)]);
        // 5 degrees clockwise from east hits the right edge: 50 * tan(5) = 4.37 units down
        let bp = find_border_points(&bounds, &angles(&[5.0_f64.to_radians()]));
        assert_eq!(bp, vec![pt(100, 6)]);
        // 120 degrees counter-clockwise from east hits the top edge, left of center
        let bp = find_border_points(&bounds, &angles(&[-2.0 * PI / 3.0]));
        assert_eq!(bp, vec![pt(44, 20)]);
    }

    #[test]
    fn every_border_point_is_on_the_perimeter() {
        let bounds = Bounds::from(&[pt(-37, -120), pt(81, 14)]);
        let input: Vec<Angle> = (0..360)
            .map(|deg| Angle::degrees(deg as f64).unwrap())
            .collect();
        let points = find_border_points(&bounds, &input);
        assert_eq!(points.len(), 360);
        for bp in points {
            assert!(bounds.on_perimeter(bp), "{} isn't on the perimeter", bp);
        }
    }

    #[test]
    fn degenerate_bounds() {
        // A single point: every corner angle is 0, so everything lands on the east side, at the
        // middle of a zero-length edge
        let bounds = Bounds::from(&[pt(5, 5)]);
        assert_eq!(
            find_border_points(&bounds, &angles(&[0.0, 1.0, 4.0])),
            vec![pt(5, 5), pt(5, 5), pt(5, 5)]
        );

        // Nothing at all
        assert!(find_border_points(&Bounds::new(), &angles(&[0.0])).is_empty());
    }

    #[test]
    fn along_edge_fallbacks() {
        assert_eq!(along_edge(3, 0, 1.0, 1.0, (-10, 20)), 5);
        assert_eq!(along_edge(3, 10, 1.0, 0.0, (-10, 20)), 5);
        assert_eq!(along_edge(3, 10, 1.0, -1.0, (-10, 20)), 5);
        assert_eq!(along_edge(3, 10, 1.0, 1.0, (-10, 20)), 13);
        // Clamped
        assert_eq!(along_edge(3, 10, 100.0, 1.0, (-10, 20)), 20);
    }

    #[test]
    fn nearest_ties_pick_smallest() {
        let mut intersections = MultiMap::new();
        let road = Road::new(pt(10, 0), pt(-10, 0), 5);
        intersections.insert(pt(10, 0), road);
        intersections.insert(pt(-10, 0), road);
        assert_eq!(
            nearest_intersection(&intersections, pt(0, 10)),
            Some(pt(-10, 0))
        );
        assert_eq!(
            nearest_intersection(&intersections, pt(1, 10)),
            Some(pt(10, 0))
        );
        assert_eq!(nearest_intersection(&MultiMap::new(), pt(0, 0)), None);
    }
}
