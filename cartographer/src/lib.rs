//! Draws a finalized city as an SVG image.

#[macro_use]
extern crate log;

use std::fmt::Write;
use std::path::Path;

use anyhow::{bail, Result};

use city_model::City;
use geom::{Bounds, Pt};

pub const BACKGROUND_STYLE: &str = "fill:rgb(227, 203, 168)";
pub const ROAD_COLOR: &str = "rgb(77, 42, 24)";
pub const GRID_COLOR: &str = "gray";
pub const MIN_ROAD_WIDTH: u32 = 1;
pub const MIN_GRID_WIDTH: f64 = 0.1;

pub struct SvgOptions {
    /// Distance in world units between grid lines. 0 disables the grid.
    pub grid_spacing: i32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions { grid_spacing: 10 }
    }
}

/// Renders the whole city, cropped to its bounds. The city must be finalized.
pub fn render_svg(city: &City, opts: &SvgOptions) -> Result<String> {
    if !city.is_finalized() {
        bail!("Finalize {} before drawing it", city.name());
    }
    let bounds = city.bounds();
    if bounds.is_empty() {
        bail!("{} has nothing to draw", city.name());
    }
    let width = bounds.width();
    let height = bounds.height();

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<?xml version="1.0"?>
<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
        w = width,
        h = height
    )?;
    writeln!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" style="{}"/>"#,
        width, height, BACKGROUND_STYLE
    )?;

    if opts.grid_spacing > 0 {
        draw_grid(&mut svg, bounds, opts.grid_spacing)?;
    }

    for road in city.roads() {
        let (x1, y1) = to_svg(bounds, road.a);
        let (x2, y2) = to_svg(bounds, road.b);
        writeln!(
            svg,
            r#"<polyline points="{},{} {},{}" style="fill:none;stroke:{};stroke-width:{}"/>"#,
            x1,
            y1,
            x2,
            y2,
            ROAD_COLOR,
            road.quality.max(MIN_ROAD_WIDTH)
        )?;
    }

    writeln!(svg, "</svg>")?;
    Ok(svg)
}

/// Writes `<dir>/<city name>.svg` and returns the path.
pub fn save_svg(city: &City, dir: &str, opts: &SvgOptions) -> Result<String> {
    let svg = render_svg(city, opts)?;
    let path = Path::new(dir)
        .join(format!("{}.svg", city.name()))
        .to_string_lossy()
        .into_owned();
    abstutil::write_file(&path, &svg)?;
    info!("Wrote {}", path);
    Ok(path)
}

/// World coordinates have y pointing up; SVG has the origin in the top-left with y pointing
/// down.
fn to_svg(bounds: &Bounds, pt: Pt) -> (i64, i64) {
    (
        i64::from(pt.x()) - i64::from(bounds.min_x),
        i64::from(bounds.max_y) - i64::from(pt.y()),
    )
}

/// Lines at every multiple of `spacing` in world coordinates.
fn draw_grid(svg: &mut String, bounds: &Bounds, spacing: i32) -> Result<()> {
    let stroke_width = MIN_GRID_WIDTH.max(bounds.width().max(bounds.height()) as f64 / 1000.0);
    let style = format!("stroke:{};stroke-width:{}", GRID_COLOR, stroke_width);
    let height = bounds.height();
    let width = bounds.width();

    writeln!(svg, r#"<g style="{}">"#, style)?;
    for x in grid_lines(bounds.min_x, bounds.max_x, spacing) {
        let (sx, _) = to_svg(bounds, Pt::new(x, bounds.max_y));
        writeln!(
            svg,
            r#"<line x1="{x}" y1="0" x2="{x}" y2="{h}"/>"#,
            x = sx,
            h = height
        )?;
    }
    for y in grid_lines(bounds.min_y, bounds.max_y, spacing) {
        let (_, sy) = to_svg(bounds, Pt::new(bounds.min_x, y));
        writeln!(
            svg,
            r#"<line x1="0" y1="{y}" x2="{w}" y2="{y}"/>"#,
            y = sy,
            w = width
        )?;
    }
    writeln!(svg, "</g>")?;
    Ok(())
}

/// Every multiple of `spacing` in [min, max].
fn grid_lines(min: i32, max: i32, spacing: i32) -> impl Iterator<Item = i32> {
    let spacing = i64::from(spacing);
    let first = i64::from(min).div_euclid(spacing) * spacing;
    let first = if first < i64::from(min) {
        first + spacing
    } else {
        first
    };
    (0..)
        .map(move |i| first + i * spacing)
        .take_while(move |v| *v <= i64::from(max))
        .map(|v| v as i32)
}
