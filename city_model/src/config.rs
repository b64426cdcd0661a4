use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use geom::Pt;

use crate::{City, DEFAULT_ROAD_QUALITY};

/// Everything needed to build a city, usually read from a JSON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityConfig {
    pub name: String,
    /// Where to attach the network to the boundary, clockwise from east, in the order the
    /// border points should be generated.
    #[serde(default)]
    pub border_angles_degrees: Vec<f64>,
    pub roads: Vec<RoadConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadConfig {
    pub a: Pt,
    pub b: Pt,
    #[serde(default = "default_quality")]
    pub quality: u32,
}

fn default_quality() -> u32 {
    DEFAULT_ROAD_QUALITY
}

impl CityConfig {
    pub fn load(path: &str) -> Result<CityConfig> {
        abstutil::read_json(path).with_context(|| format!("loading city config from {}", path))
    }

    /// A small demo city, attached to the boundary in all four directions.
    pub fn alpha() -> CityConfig {
        let road = |a: (i32, i32), b: (i32, i32)| RoadConfig {
            a: a.into(),
            b: b.into(),
            quality: DEFAULT_ROAD_QUALITY,
        };
        CityConfig {
            name: "Alpha".to_string(),
            border_angles_degrees: vec![0.0, 90.0, 180.0, -90.0],
            roads: vec![
                road((-100, -100), (0, 0)),
                road((0, -10), (100, 100)),
                road((0, 0), (-50, 0)),
            ],
        }
    }

    /// Builds the city, but doesn't finalize it yet.
    pub fn build(&self) -> Result<City> {
        let mut city = City::new(self.name.clone());
        for degrees in &self.border_angles_degrees {
            city.add_border_point_angle(degrees.to_radians())?;
        }
        for road in &self.roads {
            city.add_road_with_quality(road.a, road.b, road.quality)?;
        }
        info!(
            "Built {} with {} roads and {} border point angles",
            city.name(),
            city.roads().len(),
            city.border_point_angles().len()
        );
        Ok(city)
    }

    pub fn build_finalized(&self) -> Result<City> {
        let mut city = self.build()?;
        city.finalize()?;
        Ok(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_defaults() {
        let config: CityConfig = serde_json::from_str(
            r#"{
                "name": "Beta",
                "roads": [
                    { "a": { "x": 0, "y": 0 }, "b": { "x": 10, "y": 0 } },
                    { "a": { "x": 10, "y": 0 }, "b": { "x": 10, "y": 10 }, "quality": 2 }
                ]
            }"#,
        )
        .unwrap();
        assert!(config.border_angles_degrees.is_empty());
        assert_eq!(config.roads[0].quality, DEFAULT_ROAD_QUALITY);
        assert_eq!(config.roads[1].quality, 2);

        let city = config.build().unwrap();
        assert_eq!(city.name(), "Beta");
        assert_eq!(city.roads().len(), 2);
        assert_eq!(city.intersections().len(), 3);
        assert!(!city.is_finalized());
    }

    #[test]
    fn bad_roads_fail_the_build() {
        let mut config = CityConfig::alpha();
        config.roads[1].quality = 0;
        assert!(config.build().is_err());
    }

    #[test]
    fn alpha_round_trips_through_json() {
        let config = CityConfig::alpha();
        let json = abstutil::to_json(&config).unwrap();
        let parsed: CityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
