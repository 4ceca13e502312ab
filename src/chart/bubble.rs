//! Bubble charts: Cartesian (x/y) and radial (angle/distance).
//!
//! Bubble radii are interpolated from each size normalized against the sizes of the
//! same call, so two calls with different data do not share a scale.

use crate::error::{PlotError, Result};
use crate::geometry::{Point, axis_angle, min_max, normalize, polar_point};
use crate::layout::{HeaderFlavor, LegendEntry};
use crate::pattern::TileSource;
use crate::style::{ChartParams, StyleRecord, Theme, resolve_style};
use crate::svg::{Document, Element, Paint, TextAnchor, zero_pad};

use super::{
    Chart, ChartKind, anchored_label, check_finite, check_len, grid_line, header, start_document,
    wrong_params,
};

const PLOT_X: f64 = 72.0;
const RIGHT_MARGIN: f64 = 114.0 - PLOT_X;
/// Space under the plot for the x labels.
const BOTTOM_MARGIN: f64 = 50.0;
const GRID_STEPS: usize = 5;
const BUBBLE_OPACITY: f64 = 0.7;
const GRID_OPACITY: f64 = 0.3;
const AXIS_OPACITY: f64 = 0.5;
const PALETTE_SIZE: usize = 9;
const RING_LABEL_SIZE: u16 = 10;
/// Gap between the outer ring and the chart edge.
const RADIAL_MARGIN: f64 = 60.0;

/// Cartesian bubble data. `categories`, when given, holds one category index per bubble.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub sizes: Vec<f64>,
    pub categories: Option<Vec<usize>>,
    /// Legend labels indexed by category.
    pub category_labels: Vec<String>,
    pub title: String,
    /// Minimum and maximum bubble radius.
    pub size_range: Option<(f64, f64)>,
}

impl BubbleData {
    #[must_use]
    pub fn new(title: impl Into<String>, x: Vec<f64>, y: Vec<f64>, sizes: Vec<f64>) -> Self {
        Self {
            x,
            y,
            sizes,
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: Vec<usize>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories = Some(categories);
        self.category_labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// Radial bubble data: angles in degrees (0 = 12 o'clock), distances on a 0-100 scale.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarBubbleData {
    pub angles: Vec<f64>,
    pub distances: Vec<f64>,
    pub sizes: Vec<f64>,
    pub categories: Option<Vec<usize>>,
    pub category_labels: Vec<String>,
    pub title: String,
    pub size_range: Option<(f64, f64)>,
    pub num_rings: usize,
    pub num_axes: usize,
}

impl Default for RadarBubbleData {
    fn default() -> Self {
        Self {
            angles: Vec::new(),
            distances: Vec::new(),
            sizes: Vec::new(),
            categories: None,
            category_labels: Vec::new(),
            title: String::new(),
            size_range: None,
            num_rings: 5,
            num_axes: 8,
        }
    }
}

impl RadarBubbleData {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        angles: Vec<f64>,
        distances: Vec<f64>,
        sizes: Vec<f64>,
    ) -> Self {
        Self {
            angles,
            distances,
            sizes,
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: Vec<usize>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories = Some(categories);
        self.category_labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// Distinct categories present in the data, ascending.
#[must_use]
pub fn legend_categories(categories: &[usize]) -> Vec<usize> {
    let mut distinct = categories.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct
}

fn bubble_color(style: &StyleRecord, category: usize) -> &'static str {
    style
        .palette
        .color(&format!("bubble{}", category % PALETTE_SIZE + 1))
}

fn bubble_legend(
    style: &StyleRecord,
    categories: Option<&[usize]>,
    labels: &[String],
) -> Vec<LegendEntry> {
    match categories {
        Some(categories) => legend_categories(categories)
            .into_iter()
            .filter_map(|cat| {
                labels.get(cat).map(|label| {
                    LegendEntry::new(label.as_str(), Paint::solid(bubble_color(style, cat)))
                })
            })
            .collect(),
        None => labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                LegendEntry::new(label.as_str(), Paint::solid(bubble_color(style, i)))
            })
            .collect(),
    }
}

/// Checks shared by both variants: equal lengths, finite values, at least one bubble.
fn validate_points(
    kind: ChartKind,
    coords: [(&str, &[f64]); 3],
    categories: Option<&[usize]>,
) -> Result<()> {
    let count = coords[0].1.len();
    if count == 0 {
        return Err(PlotError::DegenerateData(format!("{kind} chart has no bubbles")));
    }
    for (name, values) in coords {
        check_len(name, count, values.len())?;
        check_finite(name, values)?;
    }
    if let Some(categories) = categories {
        check_len("categories", count, categories.len())?;
    }
    Ok(())
}

/// Bubble radius per size, interpolated across `range`.
fn radii(sizes: &[f64], range: (f64, f64)) -> Vec<f64> {
    let (lo, hi) = min_max(sizes).unwrap_or((0.0, 0.0));
    sizes
        .iter()
        .map(|&s| range.0 + normalize(s, lo, hi, 0.5) * (range.1 - range.0))
        .collect()
}

fn bubble(center: Point, radius: f64, fill: &str) -> Element {
    Element::circle()
        .num("cx", center.x)
        .num("cy", center.y)
        .num("r", radius)
        .attr("fill", fill)
        .num("opacity", BUBBLE_OPACITY)
}

fn resolve(theme: Theme, kind: ChartKind) -> Result<&'static StyleRecord> {
    let style = resolve_style(theme.bubble_id())?;
    if style.params == ChartParams::Bubble {
        Ok(style)
    } else {
        Err(wrong_params(kind, style))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BubbleChart {
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
}

impl Default for BubbleChart {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            width: 456.0,
            height: 383.0,
        }
    }
}

impl BubbleChart {
    pub const DEFAULT_SIZE_RANGE: (f64, f64) = (5.0, 20.0);

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Chart for BubbleChart {
    type Data = BubbleData;

    fn kind(&self) -> ChartKind {
        ChartKind::Bubble
    }

    fn render(&self, data: &BubbleData, _tiles: &dyn TileSource) -> Result<Document> {
        let style = resolve(self.theme, ChartKind::Bubble)?;
        let categories = data.categories.as_deref();
        validate_points(
            ChartKind::Bubble,
            [
                ("x values", data.x.as_slice()),
                ("y values", data.y.as_slice()),
                ("sizes", data.sizes.as_slice()),
            ],
            categories,
        )?;
        tracing::debug!(theme = style.id, bubbles = data.x.len(), "rendering bubble chart");

        let legend = bubble_legend(style, categories, &data.category_labels);
        let head = header(HeaderFlavor::Bubble, self.width, style, &data.title, &legend);
        let top = head.chart_start_y;
        let width = self.width - PLOT_X - RIGHT_MARGIN;
        let height = self.height - BOTTOM_MARGIN - top;

        let mut builder = start_document(self.width, self.height, style);
        builder.extend(head.elements);
        builder.extend(cartesian_grid(top, width, height, style));

        let (x_lo, x_hi) = min_max(&data.x).unwrap_or((0.0, 0.0));
        let (y_lo, y_hi) = min_max(&data.y).unwrap_or((0.0, 0.0));
        let radii = radii(&data.sizes, data.size_range.unwrap_or(Self::DEFAULT_SIZE_RANGE));

        for (i, radius) in radii.into_iter().enumerate() {
            let center = Point::new(
                PLOT_X + normalize(data.x[i], x_lo, x_hi, 0.5) * width,
                top + height - normalize(data.y[i], y_lo, y_hi, 0.5) * height,
            );
            let category = categories.map_or(0, |c| c[i]);
            builder.push(bubble(center, radius, bubble_color(style, category)));
        }

        Ok(builder.build())
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)] // Grid indices are small
fn cartesian_grid(top: f64, width: f64, height: f64, style: &StyleRecord) -> Vec<Element> {
    let stroke = style.palette.color("grid");
    let text = style.palette.color_or("axis_text", "legend_text");
    let steps = GRID_STEPS as f64;
    let mut elements = Vec::with_capacity((GRID_STEPS + 1) * 4);

    for i in 0..=GRID_STEPS {
        let y = top + i as f64 * height / steps;
        elements.push(
            grid_line(Point::new(PLOT_X, y), Point::new(PLOT_X + width, y), stroke)
                .num("opacity", GRID_OPACITY),
        );
        elements.push(anchored_label(
            (PLOT_X - 10.0, y + 5.0),
            text,
            style.font.tick,
            TextAnchor::End,
            style,
            (1000 - i as i64 * 200).to_string(),
        ));
    }

    for i in 0..=GRID_STEPS {
        let x = PLOT_X + i as f64 * width / steps;
        elements.push(
            grid_line(Point::new(x, top), Point::new(x, top + height), stroke)
                .num("opacity", GRID_OPACITY),
        );
        if i < GRID_STEPS {
            elements.push(anchored_label(
                (x + width / steps / 2.0, top + height + 20.0),
                text,
                style.font.tick,
                TextAnchor::Middle,
                style,
                zero_pad(i as i64 * 20 + 10),
            ));
        }
    }
    elements
}

#[derive(Debug, Clone, Copy)]
pub struct RadarBubbleChart {
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
}

impl Default for RadarBubbleChart {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            width: 456.0,
            height: 383.0,
        }
    }
}

impl RadarBubbleChart {
    pub const DEFAULT_SIZE_RANGE: (f64, f64) = (5.0, 15.0);

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Chart for RadarBubbleChart {
    type Data = RadarBubbleData;

    fn kind(&self) -> ChartKind {
        ChartKind::RadarBubble
    }

    fn render(&self, data: &RadarBubbleData, _tiles: &dyn TileSource) -> Result<Document> {
        let style = resolve(self.theme, ChartKind::RadarBubble)?;
        let categories = data.categories.as_deref();
        validate_points(
            ChartKind::RadarBubble,
            [
                ("angles", data.angles.as_slice()),
                ("distances", data.distances.as_slice()),
                ("sizes", data.sizes.as_slice()),
            ],
            categories,
        )?;
        if data.num_rings == 0 || data.num_axes == 0 {
            return Err(PlotError::DegenerateData(
                "radar bubble chart needs at least one ring and one axis".to_string(),
            ));
        }
        tracing::debug!(
            theme = style.id,
            bubbles = data.angles.len(),
            rings = data.num_rings,
            axes = data.num_axes,
            "rendering radar bubble chart"
        );

        let legend = bubble_legend(style, categories, &data.category_labels);
        let head = header(HeaderFlavor::Bubble, self.width, style, &data.title, &legend);
        let top = head.chart_start_y;
        let center = Point::new(
            (self.width / 2.0).floor(),
            ((self.height + top) / 2.0).floor(),
        );
        let max_radius = (self.width.min(self.height - top) / 2.0).floor() - RADIAL_MARGIN;
        if max_radius <= 0.0 {
            return Err(PlotError::DegenerateData(format!(
                "radar bubble chart of {}x{} leaves no room for rings",
                self.width, self.height
            )));
        }

        let mut builder = start_document(self.width, self.height, style);
        builder.extend(head.elements);
        builder.extend(radial_grid(center, max_radius, data, style));

        let radii = radii(&data.sizes, data.size_range.unwrap_or(Self::DEFAULT_SIZE_RANGE));
        for (i, radius) in radii.into_iter().enumerate() {
            let position = polar_point(
                center.x,
                center.y,
                data.distances[i] / 100.0 * max_radius,
                data.angles[i] - 90.0,
            );
            let category = categories.map_or(0, |c| c[i]);
            builder.push(bubble(position, radius, bubble_color(style, category)));
        }

        Ok(builder.build())
    }
}

/// Anchor of an axis label at screen angle `screen_deg`.
fn axis_anchor(screen_deg: f64) -> TextAnchor {
    if (-45.0..45.0).contains(&screen_deg) || screen_deg >= 315.0 {
        TextAnchor::Start
    } else if (135.0..225.0).contains(&screen_deg) {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)] // Ring and axis counts are small
fn radial_grid(
    center: Point,
    max_radius: f64,
    data: &RadarBubbleData,
    style: &StyleRecord,
) -> Vec<Element> {
    let grid = style.palette.color("grid");
    let axis = style.palette.color_or("axis_line", "grid");
    let text = style.palette.color_or("axis_text", "legend_text");
    let mut elements = Vec::with_capacity((data.num_rings + data.num_axes) * 2);

    for i in 1..=data.num_rings {
        let r = max_radius * i as f64 / data.num_rings as f64;
        elements.push(
            Element::circle()
                .num("cx", center.x)
                .num("cy", center.y)
                .num("r", r)
                .attr("fill", "none")
                .attr("stroke", grid)
                .attr("stroke-width", "1")
                .num("opacity", GRID_OPACITY),
        );
        elements.push(anchored_label(
            (center.x, center.y - r - 5.0),
            text,
            RING_LABEL_SIZE,
            TextAnchor::Middle,
            style,
            zero_pad(i as i64 * 20),
        ));
    }

    let step = 360 / data.num_axes;
    for i in 0..data.num_axes {
        let screen = axis_angle(i, data.num_axes);
        let end = polar_point(center.x, center.y, max_radius, screen);
        elements.push(grid_line(center, end, axis).num("opacity", AXIS_OPACITY));
        let at = polar_point(center.x, center.y, max_radius + 20.0, screen);
        elements.push(anchored_label(
            (at.x, at.y + 5.0),
            text,
            style.font.tick,
            axis_anchor(screen),
            style,
            zero_pad((i * step) as i64),
        ));
    }
    elements
}

#[cfg(test)]
#[path = "bubble_tests.rs"]
mod tests;
