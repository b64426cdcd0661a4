//! A procedurally built road network for one city. Roads are added between lattice points while
//! the bounds of the city grow to cover them. Finalizing the city pushes the boundary outwards
//! and connects the network to points on that boundary, picked by angle from the center.

#[macro_use]
extern crate log;

use std::collections::BTreeSet;

use anyhow::{bail, Result};

use abstutil::MultiMap;
use geom::{Angle, Bounds, Pt};

pub use crate::config::{CityConfig, RoadConfig};
pub use crate::road::{Road, BORDER_ROAD_QUALITY, DEFAULT_ROAD_QUALITY};

pub mod border;
mod config;
mod road;
mod summary;

/// When finalizing, the boundary moves out by at least this much on every side.
pub const MIN_BORDER_MARGIN: i32 = 10;

pub struct City {
    name: String,
    bounds: Bounds,
    /// Every endpoint of every road, mapped to the roads touching it
    intersections: MultiMap<Pt, Road>,
    roads: BTreeSet<Road>,
    /// Normalized, in the order they were added
    border_point_angles: Vec<Angle>,
    /// The connectors added by finalize
    border_roads: BTreeSet<Road>,
    finalized: bool,
}

impl City {
    pub fn new<S: Into<String>>(name: S) -> City {
        City {
            name: name.into(),
            bounds: Bounds::new(),
            intersections: MultiMap::new(),
            roads: BTreeSet::new(),
            border_point_angles: Vec::new(),
            border_roads: BTreeSet::new(),
            finalized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Empty until the first road is added.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn roads(&self) -> &BTreeSet<Road> {
        &self.roads
    }

    pub fn intersections(&self) -> &MultiMap<Pt, Road> {
        &self.intersections
    }

    /// All roads with an endpoint at this point, or nothing if it isn't an intersection.
    pub fn roads_at(&self, pt: Pt) -> &BTreeSet<Road> {
        self.intersections.get(pt)
    }

    pub fn border_point_angles(&self) -> &[Angle] {
        &self.border_point_angles
    }

    pub fn border_roads(&self) -> &BTreeSet<Road> {
        &self.border_roads
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Adds a road with the default quality. See `add_road_with_quality`.
    pub fn add_road(&mut self, a: Pt, b: Pt) -> Result<bool> {
        self.add_road_with_quality(a, b, DEFAULT_ROAD_QUALITY)
    }

    /// Returns false without changing anything if this exact road is already present. Roads
    /// can't be added once the city is finalized.
    pub fn add_road_with_quality(&mut self, a: Pt, b: Pt, quality: u32) -> Result<bool> {
        if self.finalized {
            bail!("Can't add a road to {} after it's finalized", self.name);
        }
        if quality < BORDER_ROAD_QUALITY {
            bail!(
                "Road from {} to {} has quality {}, but the minimum is {}",
                a,
                b,
                quality,
                BORDER_ROAD_QUALITY
            );
        }
        Ok(self.insert_road(Road::new(a, b, quality)))
    }

    /// Stores the angle, normalized to [0, 2π). The angles are later turned into border points,
    /// in this order.
    pub fn add_border_point_angle(&mut self, radians: f64) -> Result<()> {
        if self.finalized {
            bail!(
                "Can't add a border point angle to {} after it's finalized",
                self.name
            );
        }
        match Angle::new(radians) {
            Some(angle) => {
                self.border_point_angles.push(angle);
                Ok(())
            }
            None => bail!("Border point angle {} isn't a finite number", radians),
        }
    }

    /// The midpoint of the current bounds, rounding toward zero. None before any roads exist.
    pub fn get_center(&self) -> Option<Pt> {
        self.bounds.center()
    }

    /// Where each border point angle meets the current boundary. Angles that don't fall into
    /// any side of the boundary are skipped.
    pub fn border_points(&self) -> Vec<Pt> {
        border::find_border_points(&self.bounds, &self.border_point_angles)
    }

    /// Expands the bounds by `MIN_BORDER_MARGIN` or 10% of the extent, whichever is larger, then
    /// connects every border point to the nearest intersection. This can only happen once, and
    /// the city must have at least one road.
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            bail!("{} has already been finalized", self.name);
        }
        if self.bounds.is_empty() {
            bail!("{} has no roads, so it has no boundary to expand", self.name);
        }
        info!("Finalizing {}", self.name);

        let dx = border_margin(self.bounds.width());
        let dy = border_margin(self.bounds.height());
        self.bounds.expand(dx, dy);
        self.finalized = true;

        let connectors = border::attach_border_points(self);
        info!(
            "{} now spans x from {} to {}, y from {} to {}, with {} border roads",
            self.name,
            self.bounds.min_x,
            self.bounds.max_x,
            self.bounds.min_y,
            self.bounds.max_y,
            connectors.len()
        );
        self.border_roads.extend(connectors);
        Ok(())
    }

    /// Skips the finalize check; the border attachment uses this directly.
    fn insert_road(&mut self, road: Road) -> bool {
        if !self.roads.insert(road) {
            return false;
        }
        for pt in road.endpoints() {
            self.bounds.update(pt);
            self.intersections.insert(pt, road);
        }
        true
    }
}

/// How far to push the boundary out along an axis with this extent.
pub fn border_margin(extent: i64) -> i32 {
    let margin = (extent / 10).max(i64::from(MIN_BORDER_MARGIN));
    i32::try_from(margin).unwrap_or(i32::MAX)
}
