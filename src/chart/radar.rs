//! Radar (spider) chart: one filled polygon per series over a fixed 0-100 value domain.

use crate::error::Result;
use crate::geometry::{Point, axis_angle, points_attr, polar_point, radial_polygon_points};
use crate::layout::{HeaderFlavor, LegendEntry};
use crate::pattern::TileSource;
use crate::style::{ChartParams, StyleRecord, Theme, resolve_style};
use crate::svg::{Document, Element, Paint, TextAnchor};

use super::{
    Chart, ChartKind, anchored_label, check_finite, check_len, grid_line, header, start_document,
    wrong_params,
};

const TITLE_BAND: f64 = 36.0;
const MARGIN: f64 = 32.0;
const RING_OPACITY: f64 = 0.3;
const AXIS_OPACITY: f64 = 0.5;
const STROKE_OPACITY: f64 = 0.8;
const LABEL_DISTANCE: f64 = 20.0;
/// Horizontal dead zone around the center where axis labels stay centered.
const CENTER_BAND: f64 = 10.0;
const RING_LABEL_SIZE: u16 = 10;

/// Input of a radar chart. Every series holds one value per axis, on a 0-100 scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarData {
    pub series: Vec<Vec<f64>>,
    pub labels: Vec<String>,
    pub title: String,
    /// Text at the end of each axis; degrees when absent.
    pub axis_labels: Option<Vec<String>>,
}

impl RadarData {
    #[must_use]
    pub fn new(title: impl Into<String>, series: Vec<Vec<f64>>) -> Self {
        Self {
            series,
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_axis_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.axis_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

/// `(fill, stroke)` of series `index`: the first series has its own pair, the rest use
/// `area{N}` when the palette defines it and `area2` otherwise.
fn series_colors(style: &StyleRecord, index: usize) -> (&'static str, &'static str) {
    let palette = &style.palette;
    if index == 0 {
        return (palette.color("area1"), palette.color_or("area1_stroke", "area1"));
    }
    let n = index + 1;
    (
        palette.color_or(&format!("area{n}"), "area2"),
        palette
            .get(&format!("area{n}_stroke"))
            .unwrap_or_else(|| palette.color_or("area2_stroke", "area2")),
    )
}

/// Degree labels `0, 360/n, 2*360/n, ...` in whole degrees.
fn default_axis_labels(num_axes: usize) -> Vec<String> {
    let step = 360 / num_axes.max(1);
    (0..num_axes).map(|i| (i * step).to_string()).collect()
}

fn axis_label_anchor(x: f64, cx: f64) -> TextAnchor {
    if x < cx - CENTER_BAND {
        TextAnchor::End
    } else if x > cx + CENTER_BAND {
        TextAnchor::Start
    } else {
        TextAnchor::Middle
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RadarChart {
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            width: 328.0,
            height: 328.0,
        }
    }
}

impl RadarChart {
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

/// Resolved radial frame shared by the grid and the polygons.
#[derive(Debug, Clone, Copy)]
struct Frame {
    center: Point,
    radius: f64,
    num_axes: usize,
    num_rings: usize,
}

impl Chart for RadarChart {
    type Data = RadarData;

    fn kind(&self) -> ChartKind {
        ChartKind::Radar
    }

    fn render(&self, data: &RadarData, _tiles: &dyn TileSource) -> Result<Document> {
        let style = resolve_style(self.theme.radar_id())?;
        let ChartParams::Radar {
            num_axes,
            num_rings,
            fill_opacity,
        } = style.params
        else {
            return Err(wrong_params(ChartKind::Radar, style));
        };
        for (i, values) in data.series.iter().enumerate() {
            check_len(&format!("radar series {i}"), num_axes, values.len())?;
        }
        check_finite("radar series", data.series.iter().flatten())?;
        tracing::debug!(
            theme = style.id,
            series = data.series.len(),
            axes = num_axes,
            "rendering radar chart"
        );

        let legend: Vec<LegendEntry> = data
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                LegendEntry::new(label.as_str(), Paint::solid(series_colors(style, i).0))
                    .with_opacity(fill_opacity)
            })
            .collect();
        let head = header(HeaderFlavor::Compact, self.width, style, &data.title, &legend);

        let band = TITLE_BAND + head.offset;
        let available = self.height - band - MARGIN;
        let frame = Frame {
            center: Point::new(self.width / 2.0, band + available / 2.0),
            radius: available.min(self.width - MARGIN) / 2.0,
            num_axes,
            num_rings,
        };

        let mut builder = start_document(self.width, self.height, style);
        builder.extend(head.elements);
        builder.extend(rings(&frame, style));
        let axis_labels = data
            .axis_labels
            .clone()
            .unwrap_or_else(|| default_axis_labels(num_axes));
        builder.extend(axes(&frame, &axis_labels, style));

        for (i, values) in data.series.iter().enumerate() {
            let (fill, stroke) = series_colors(style, i);
            let points = radial_polygon_points(
                values,
                num_axes,
                frame.center.x,
                frame.center.y,
                frame.radius,
            );
            builder.push(
                Element::polygon()
                    .attr("points", points_attr(&points))
                    .attr("fill", fill)
                    .num("fill-opacity", fill_opacity)
                    .attr("stroke", stroke)
                    .attr("stroke-width", "2")
                    .num("stroke-opacity", STROKE_OPACITY),
            );
        }

        Ok(builder.build())
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)] // Ring counts are small
fn rings(frame: &Frame, style: &StyleRecord) -> Vec<Element> {
    let grid = style.palette.color("grid");
    let text = style.palette.color_or("axis_text", "legend_text");
    let Point { x: cx, y: cy } = frame.center;
    let mut elements = Vec::with_capacity(frame.num_rings * 2);

    for i in 1..=frame.num_rings {
        let share = i as f64 / frame.num_rings as f64;
        let r = share * frame.radius;
        elements.push(
            Element::circle()
                .num("cx", cx)
                .num("cy", cy)
                .num("r", r)
                .attr("fill", "none")
                .attr("stroke", grid)
                .attr("stroke-width", "1")
                .num("opacity", RING_OPACITY),
        );
        elements.push(anchored_label(
            (cx, cy - r - 5.0),
            text,
            RING_LABEL_SIZE,
            TextAnchor::Middle,
            style,
            ((share * 100.0) as i64).to_string(),
        ));
    }
    elements
}

fn axes(frame: &Frame, labels: &[String], style: &StyleRecord) -> Vec<Element> {
    let stroke = style.palette.color_or("axis", "grid");
    let text = style.palette.color_or("axis_text", "legend_text");
    let Point { x: cx, y: cy } = frame.center;
    let mut elements = Vec::with_capacity(frame.num_axes * 2);

    for i in 0..frame.num_axes {
        let angle = axis_angle(i, frame.num_axes);
        let end = polar_point(cx, cy, frame.radius, angle);
        elements.push(grid_line(frame.center, end, stroke).num("opacity", AXIS_OPACITY));

        if let Some(label) = labels.get(i) {
            let at = polar_point(cx, cy, frame.radius + LABEL_DISTANCE, angle);
            elements.push(anchored_label(
                (at.x, at.y + 4.0),
                text,
                style.font.label,
                axis_label_anchor(at.x, cx),
                style,
                label.as_str(),
            ));
        }
    }
    elements
}

#[cfg(test)]
#[path = "radar_tests.rs"]
mod tests;
