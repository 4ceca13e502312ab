//! Multi-series line chart with optional point markers.

use crate::error::{PlotError, Result};
use crate::geometry::{PathData, Point, linear_position, min_max, normalize, points_attr};
use crate::layout::{HeaderFlavor, LegendEntry};
use crate::pattern::TileSource;
use crate::style::{ChartParams, LineStyle, LineTheme, MarkerShape, StyleRecord, resolve_style};
use crate::svg::{Document, Element, Paint, TextAnchor, zero_pad};

use super::{
    Chart, ChartKind, anchored_label, check_finite, check_len, grid_line, header, start_document,
    wrong_params,
};

const CHART_X: f64 = 32.0;
const CHART_WIDTH: f64 = 938.0;
const PLOT_HEIGHT: f64 = 430.0;
const VERTICAL_LINES: usize = 9;
const VERTICAL_SPACING: f64 = 117.0;
const HORIZONTAL_LINES: usize = 5;
const HORIZONTAL_SPACING: f64 = 110.0;
/// Bottom of the horizontal grid relative to the chart top.
const GRID_DEPTH: f64 = 440.0;
const COLOR_CYCLE: [&str; 5] = ["primary", "secondary", "accent", "quaternary", "quinary"];

/// Input of a line chart: one series per line, all sharing the `x` domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineData {
    pub x: Vec<f64>,
    pub series: Vec<Vec<f64>>,
    pub labels: Vec<String>,
    pub title: String,
    /// Explicit per-series colors, replacing the style palette.
    pub colors: Option<Vec<String>>,
    /// Reject explicit colors that do not cover every series instead of cycling them.
    pub strict_colors: bool,
    /// Stroke width override.
    pub line_width: Option<f64>,
}

impl LineData {
    #[must_use]
    pub fn new(title: impl Into<String>, x: Vec<f64>, series: Vec<Vec<f64>>) -> Self {
        Self {
            x,
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
    pub fn with_colors<S: Into<String>>(
        mut self,
        colors: impl IntoIterator<Item = S>,
        strict: bool,
    ) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self.strict_colors = strict;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LineChart {
    pub style: LineStyle,
    pub theme: LineTheme,
    pub width: f64,
    pub height: f64,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            style: LineStyle::default(),
            theme: LineTheme::default(),
            width: 1002.0,
            height: 580.0,
        }
    }
}

impl LineChart {
    #[must_use]
    pub fn new(style: LineStyle, theme: LineTheme) -> Self {
        Self {
            style,
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

impl Chart for LineChart {
    type Data = LineData;

    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn render(&self, data: &LineData, _tiles: &dyn TileSource) -> Result<Document> {
        let style = resolve_style(self.style.style_id(self.theme))?;
        let ChartParams::Line { markers } = style.params else {
            return Err(wrong_params(ChartKind::Line, style));
        };
        validate(data)?;
        let colors = series_colors(data, style)?;
        let line_width = data.line_width.unwrap_or(style.line_width);
        tracing::debug!(
            style = style.id,
            series = data.series.len(),
            points = data.x.len(),
            markers = markers.is_some(),
            "rendering line chart"
        );

        let legend: Vec<LegendEntry> = data
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| LegendEntry::new(label.as_str(), Paint::solid(&colors[i % colors.len()])))
            .collect();
        let head = header(HeaderFlavor::Wide, self.width, style, &data.title, &legend);
        let top = head.chart_start_y;

        let mut builder = start_document(self.width, self.height, style);
        builder.extend(head.elements);
        builder.extend(grid(top, style));

        let (min, max) = min_max(&data.series.concat()).unwrap_or((0.0, 1.0));
        let to_point = |j: usize, v: f64| {
            Point::new(
                linear_position(j, data.x.len(), CHART_X, CHART_WIDTH),
                top + PLOT_HEIGHT - normalize(v, min, max, 0.0) * PLOT_HEIGHT,
            )
        };

        for (s, values) in data.series.iter().enumerate() {
            let color = colors[s % colors.len()].as_str();
            let points: Vec<Point> = values
                .iter()
                .enumerate()
                .map(|(j, &v)| to_point(j, v))
                .collect();

            let path = points
                .iter()
                .skip(1)
                .fold(PathData::new().move_to(points[0]), |path, &p| path.line_to(p));
            builder.push(
                Element::path()
                    .attr("d", path.to_string())
                    .attr("stroke", color)
                    .num("stroke-width", line_width)
                    .attr("fill", "none")
                    .attr("stroke-linecap", "round")
                    .attr("stroke-linejoin", "round"),
            );

            if let Some(spec) = markers
                && !spec.shapes.is_empty()
            {
                let shape = spec.shapes[s % spec.shapes.len()];
                builder.extend(points.iter().map(|&p| marker(shape, p, spec.size / 2.0, color)));
            }
        }

        Ok(builder.build())
    }
}

fn validate(data: &LineData) -> Result<()> {
    if data.x.is_empty() || data.series.is_empty() {
        return Err(PlotError::DegenerateData(
            "line chart needs at least one series and one position".to_string(),
        ));
    }
    for (i, values) in data.series.iter().enumerate() {
        check_len(&format!("series {i}"), data.x.len(), values.len())?;
    }
    check_finite("line x values", &data.x)?;
    check_finite("line series", data.series.iter().flatten())
}

/// Stroke color per series slot: explicit colors when given, else the palette cycle.
fn series_colors(data: &LineData, style: &StyleRecord) -> Result<Vec<String>> {
    if let Some(colors) = &data.colors {
        if data.strict_colors && colors.len() < data.series.len() {
            return Err(PlotError::mismatch(
                "line colors",
                data.series.len(),
                colors.len(),
            ));
        }
        if !colors.is_empty() {
            return Ok(colors.clone());
        }
    }

    let palette = &style.palette;
    let cycle: Vec<String> = COLOR_CYCLE
        .into_iter()
        .filter_map(|role| palette.get(role))
        .map(str::to_string)
        .collect();
    if cycle.is_empty() {
        Ok(vec![palette.color("primary").to_string()])
    } else {
        Ok(cycle)
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)] // Grid indices are small
fn grid(top: f64, style: &StyleRecord) -> Vec<Element> {
    let stroke = style.palette.color("grid");
    let text = style.palette.color("legend_text");
    let mut elements = Vec::with_capacity(VERTICAL_LINES * 2 + HORIZONTAL_LINES);

    for i in 0..VERTICAL_LINES {
        let x = CHART_X + i as f64 * VERTICAL_SPACING;
        elements.push(
            grid_line(Point::new(x, top), Point::new(x, top + PLOT_HEIGHT), stroke)
                .attr("stroke-dasharray", "4,4"),
        );
        elements.push(anchored_label(
            (x, top + PLOT_HEIGHT + 23.0),
            text,
            style.font.tick,
            TextAnchor::Start,
            style,
            zero_pad(i as i64 + 1),
        ));
    }

    for i in 0..HORIZONTAL_LINES {
        let y = top + i as f64 * HORIZONTAL_SPACING;
        if y > top + GRID_DEPTH {
            break;
        }
        elements.push(grid_line(
            Point::new(CHART_X, y),
            Point::new(CHART_X + CHART_WIDTH, y),
            stroke,
        ));
    }
    elements
}

/// Marker centered on `p`; `half` is half the marker size.
fn marker(shape: MarkerShape, p: Point, half: f64, color: &str) -> Element {
    match shape {
        MarkerShape::Circle => Element::circle()
            .num("cx", p.x)
            .num("cy", p.y)
            .num("r", half)
            .attr("fill", color),
        MarkerShape::Square => Element::rect()
            .num("x", p.x - half)
            .num("y", p.y - half)
            .num("width", half * 2.0)
            .num("height", half * 2.0)
            .attr("fill", color)
            .attr("rx", "2")
            .attr("ry", "2"),
        MarkerShape::Diamond => Element::polygon()
            .attr(
                "points",
                points_attr(&[
                    Point::new(p.x, p.y - half),
                    Point::new(p.x + half, p.y),
                    Point::new(p.x, p.y + half),
                    Point::new(p.x - half, p.y),
                ]),
            )
            .attr("fill", color),
        MarkerShape::Triangle => {
            let h = half * 1.732;
            Element::polygon()
                .attr(
                    "points",
                    points_attr(&[
                        Point::new(p.x, p.y - h * 0.67),
                        Point::new(p.x + half, p.y + h * 0.33),
                        Point::new(p.x - half, p.y + h * 0.33),
                    ]),
                )
                .attr("fill", color)
        }
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
