//! Scalar-to-pixel mapping, cumulative stacking, and arc/polygon point generation.
//!
//! Angle conventions:
//! - *screen degrees*: 0° points right (3 o'clock) and positive angles turn clockwise,
//!   because the y axis grows downward. -90° is 12 o'clock.
//! - *bearings*: 0° points up (12 o'clock), clockwise positive. `bearing = screen + 90`.

mod path;

pub use path::{PathCommand, PathData, Point, points_attr};

use crate::error::{PlotError, Result};

/// Axis-aligned rectangle in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Position of item `index` out of `count` evenly spread across `span`.
///
/// A single item sits in the middle of the span.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Indices are small
pub fn linear_position(index: usize, count: usize, start: f64, span: f64) -> f64 {
    if count <= 1 {
        return start + span / 2.0;
    }
    start + index as f64 * (span / (count - 1) as f64)
}

/// Scale `value` into `[0, 1]` against `[min, max]`, or return `flat` when the range is empty.
#[must_use]
pub fn normalize(value: f64, min: f64, max: f64, flat: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        flat
    } else {
        (value - min) / range
    }
}

/// Minimum and maximum of a slice, or `None` when empty.
#[must_use]
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Point at `radius` from the center along a screen-degree angle.
#[must_use]
pub fn polar_point(cx: f64, cy: f64, radius: f64, screen_deg: f64) -> Point {
    let rad = screen_deg.to_radians();
    Point::new(cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Screen angle of radial axis `index` out of `count`, starting at 12 o'clock.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn axis_angle(index: usize, count: usize) -> f64 {
    index as f64 * 360.0 / count.max(1) as f64 - 90.0
}

/// Stacked band geometry for a set of series sharing one domain.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBands {
    /// One closed polygon per series, bottom band first.
    pub paths: Vec<PathData>,
    /// Pixel height of each band at each domain position, indexed `[series][position]`.
    pub heights: Vec<Vec<f64>>,
    /// Maximum of the final cumulative total; every band is scaled against it.
    pub max_total: f64,
}

/// Build one closed band polygon per series between consecutive cumulative levels.
///
/// # Errors
/// - `DimensionMismatch` if a series length differs from `domain_len`.
/// - `DegenerateData` if there are no series or positions, or the largest stacked total
///   is not positive.
pub fn stacked_band_paths(series: &[Vec<f64>], domain_len: usize, frame: Rect) -> Result<StackedBands> {
    if series.is_empty() || domain_len == 0 {
        return Err(PlotError::DegenerateData(
            "stacked chart needs at least one series and one position".to_string(),
        ));
    }
    for (i, values) in series.iter().enumerate() {
        if values.len() != domain_len {
            return Err(PlotError::mismatch(
                format!("series {i}"),
                domain_len,
                values.len(),
            ));
        }
    }

    let totals: Vec<f64> = (0..domain_len)
        .map(|j| series.iter().map(|s| s[j]).sum())
        .collect();
    let max_total = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max_total.is_finite() || max_total <= 0.0 {
        return Err(PlotError::DegenerateData(
            "stacked total is zero at every position".to_string(),
        ));
    }

    let bottom = frame.bottom();
    let to_y = |level: f64| bottom - (level / max_total * frame.height);
    let x_at = |j: usize| linear_position(j, domain_len, frame.x, frame.width);

    let mut cumulative = vec![0.0_f64; domain_len];
    let mut paths = Vec::with_capacity(series.len());
    let mut heights = Vec::with_capacity(series.len());

    for values in series {
        let baseline = cumulative.clone();
        for (level, v) in cumulative.iter_mut().zip(values) {
            *level += v;
        }

        let mut path = PathData::new().move_to(Point::new(frame.x, to_y(baseline[0])));
        for (j, level) in baseline.iter().enumerate() {
            path = path.line_to(Point::new(x_at(j), to_y(*level)));
        }
        for j in (0..domain_len).rev() {
            path = path.line_to(Point::new(x_at(j), to_y(cumulative[j])));
        }
        paths.push(path.close());
        heights.push(
            values
                .iter()
                .map(|v| v / max_total * frame.height)
                .collect(),
        );
    }

    Ok(StackedBands {
        paths,
        heights,
        max_total,
    })
}

/// Endpoints and large-arc flag of a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcEndpoints {
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

/// Endpoints of an arc starting at a bearing (0° = 12 o'clock) and sweeping clockwise.
#[must_use]
pub fn arc_points(cx: f64, cy: f64, radius: f64, start_bearing: f64, sweep: f64) -> ArcEndpoints {
    let start_screen = start_bearing - 90.0;
    ArcEndpoints {
        start: polar_point(cx, cy, radius, start_screen),
        end: polar_point(cx, cy, radius, start_screen + sweep),
        large_arc: sweep > 180.0,
    }
}

/// Closed annular slice: outer arc, radial line in, inner arc back, close.
///
/// `start_deg` is in screen degrees (-90° = 12 o'clock). Returns `None` when the sweep
/// is not positive, so zero-valued slices leave no artifact. A full turn becomes a ring
/// of two half arcs per circle, since an arc back to its own start point draws nothing.
#[must_use]
pub fn donut_slice_path(
    cx: f64,
    cy: f64,
    outer_r: f64,
    inner_r: f64,
    start_deg: f64,
    sweep: f64,
) -> Option<PathData> {
    if sweep <= 0.0 || !sweep.is_finite() {
        return None;
    }
    if sweep >= FULL_TURN - 1e-9 {
        return Some(donut_ring_path(cx, cy, outer_r, inner_r, start_deg));
    }
    let outer = arc_points(cx, cy, outer_r, start_deg + 90.0, sweep);
    let inner = arc_points(cx, cy, inner_r, start_deg + 90.0, sweep);
    Some(
        PathData::new()
            .move_to(outer.start)
            .arc_to(outer_r, outer.large_arc, true, outer.end)
            .line_to(inner.end)
            .arc_to(inner_r, inner.large_arc, false, inner.start)
            .close(),
    )
}

const FULL_TURN: f64 = 360.0;

fn donut_ring_path(cx: f64, cy: f64, outer_r: f64, inner_r: f64, start_deg: f64) -> PathData {
    let outer_start = polar_point(cx, cy, outer_r, start_deg);
    let outer_mid = polar_point(cx, cy, outer_r, start_deg + 180.0);
    let inner_start = polar_point(cx, cy, inner_r, start_deg);
    let inner_mid = polar_point(cx, cy, inner_r, start_deg + 180.0);
    PathData::new()
        .move_to(outer_start)
        .arc_to(outer_r, false, true, outer_mid)
        .arc_to(outer_r, false, true, outer_start)
        .line_to(inner_start)
        .arc_to(inner_r, false, false, inner_mid)
        .arc_to(inner_r, false, false, inner_start)
        .close()
}

/// Vertices of a radar polygon.
///
/// Value `v` on axis `i` lies at screen angle `i*360/num_axes - 90` and radius
/// `v/100 * max_radius`. Values outside `0..=100` extrapolate past the outer ring rather
/// than being clamped; callers normalize upstream.
#[must_use]
pub fn radial_polygon_points(
    values: &[f64],
    num_axes: usize,
    cx: f64,
    cy: f64,
    max_radius: f64,
) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| polar_point(cx, cy, v / 100.0 * max_radius, axis_angle(i, num_axes)))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
