use crate::City;

impl City {
    /// A plain-text description of the bounds, border points, roads, and intersections.
    pub fn summary(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.summary_of_city());
        output.push_str(&self.summary_of_roads());
        output.push_str(&self.summary_of_intersections());
        output
    }

    fn summary_of_city(&self) -> String {
        let mut output = format!("City: {}\n", self.name());
        output.push_str("City Bounds:\n");
        let b = self.bounds();
        if b.is_empty() {
            output.push_str("  (empty)\n");
        } else {
            output.push_str(&format!("  minX: {}, maxX: {}\n", b.min_x, b.max_x));
            output.push_str(&format!("  minY: {}, maxY: {}\n", b.min_y, b.max_y));
        }

        output.push_str("City Border Points:\n");
        for bp in self.border_points() {
            output.push_str(&format!("  Location:{}\n", bp));
        }
        output
    }

    fn summary_of_roads(&self) -> String {
        let mut output = "Roads:\n".to_string();
        for road in self.roads() {
            output.push_str(&format!(
                "  s:{}, e:{} q:({})\n",
                road.a, road.b, road.quality
            ));
        }
        output
    }

    fn summary_of_intersections(&self) -> String {
        let mut output = "Intersections:\n".to_string();
        for pt in self.intersections().keys() {
            output.push_str(&format!("  i:{}\n", pt));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use crate::City;
    use geom::Pt;

    #[test]
    fn small_city() {
        let mut city = City::new("Tiny");
        city.add_border_point_angle(0.0).unwrap();
        city.add_road(Pt::new(0, 0), Pt::new(20, 0)).unwrap();
        city.finalize().unwrap();

        assert_eq!(
            city.summary(),
            "City: Tiny
City Bounds:
  minX: -10, maxX: 30
  minY: -10, maxY: 10
City Border Points:
  Location:(30,0)
Roads:
  s:(0,0), e:(20,0) q:(5)
  s:(20,0), e:(30,0) q:(1)
Intersections:
  i:(0,0)
  i:(20,0)
  i:(30,0)
"
        );
    }

    #[test]
    fn empty_city() {
        let city = City::new("Nowhere");
        assert_eq!(
            city.summary(),
            "City: Nowhere\nCity Bounds:\n  (empty)\nCity Border Points:\nRoads:\nIntersections:\n"
        );
    }
}
