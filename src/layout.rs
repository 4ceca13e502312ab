//! Title, legend and chart-area placement.
//!
//! Three header flavors cover every chart type. Each renders the title and one legend
//! item per entry, left to right, wrapping to a new row only when an item would cross the
//! right padding. The chart area starts below the last legend row.

use crate::geometry::Rect;
use crate::style::FontSpec;
use crate::svg::{Element, Paint};

/// Header geometry shared by a group of chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFlavor {
    /// Area, bar, column and line charts.
    Wide,
    /// Cartesian and radial bubble charts.
    Bubble,
    /// Pie and radar charts.
    Compact,
}

/// Fixed offsets of one header flavor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderMetrics {
    pub padding_x: f64,
    pub title_y: f64,
    pub legend_y: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub box_radius: f64,
    pub text_dx: f64,
    pub text_dy: f64,
    pub text_size: u16,
    /// Estimated glyph width used to advance past a label.
    pub char_width: f64,
    /// Space after the label before the next item.
    pub trailing_gap: f64,
    /// Constant advance, ignoring label length.
    pub fixed_advance: Option<f64>,
    pub row_pitch: f64,
    /// Top of the chart area for a single legend row.
    pub chart_top: f64,
}

const WIDE: HeaderMetrics = HeaderMetrics {
    padding_x: 32.0,
    title_y: 16.0 + 20.0,
    legend_y: 16.0 + 20.0 + 10.0 + 4.0,
    box_width: 20.0,
    box_height: 10.0,
    box_radius: 2.0,
    text_dx: 28.0,
    text_dy: 9.0,
    text_size: 14,
    char_width: 8.0,
    trailing_gap: 20.0,
    fixed_advance: None,
    row_pitch: 24.0,
    chart_top: 16.0 + 20.0 + 10.0 + 24.0 + 24.0,
};

const BUBBLE: HeaderMetrics = HeaderMetrics {
    padding_x: 32.0,
    title_y: 16.0 + 20.0,
    legend_y: 16.0 + 36.0,
    box_width: 20.0,
    box_height: 10.0,
    box_radius: 2.0,
    text_dx: 28.0,
    text_dy: 9.0,
    text_size: 12,
    char_width: 7.0,
    trailing_gap: 0.0,
    fixed_advance: Some(60.0),
    row_pitch: 20.0,
    chart_top: 60.0,
};

const COMPACT: HeaderMetrics = HeaderMetrics {
    padding_x: 16.0,
    title_y: 16.0 + 16.0,
    legend_y: 16.0 + 20.0,
    box_width: 8.0,
    box_height: 8.0,
    box_radius: 1.0,
    text_dx: 12.0,
    text_dy: 7.0,
    text_size: 10,
    char_width: 6.0,
    trailing_gap: 8.0,
    fixed_advance: None,
    row_pitch: 16.0,
    chart_top: 36.0 + 24.0,
};

impl HeaderFlavor {
    #[must_use]
    pub const fn metrics(self) -> &'static HeaderMetrics {
        match self {
            Self::Wide => &WIDE,
            Self::Bubble => &BUBBLE,
            Self::Compact => &COMPACT,
        }
    }
}

impl HeaderMetrics {
    /// Horizontal distance from one item's box to the next.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Label lengths are small
    pub fn advance(&self, label: &str) -> f64 {
        self.fixed_advance.unwrap_or_else(|| {
            self.text_dx + label.chars().count() as f64 * self.char_width + self.trailing_gap
        })
    }

    /// Right edge of an item's visible content relative to its box.
    fn extent(&self, label: &str) -> f64 {
        self.fixed_advance
            .unwrap_or_else(|| self.advance(label) - self.trailing_gap)
    }
}

/// One legend item.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub paint: Paint,
    /// Extra `opacity` on the swatch.
    pub opacity: Option<f64>,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, paint: Paint) -> Self {
        Self {
            label: label.into(),
            paint,
            opacity: None,
        }
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Colors the header draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColors<'a> {
    pub title: &'a str,
    pub legend_text: &'a str,
}

/// Rendered header and the vertical space it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub elements: Vec<Element>,
    pub rows: usize,
    /// Extra height taken by wrapped legend rows.
    pub offset: f64,
    pub chart_start_y: f64,
}

/// Chart area in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    pub chart_x: f64,
    pub chart_start_y: f64,
    pub chart_width: f64,
    pub chart_height: f64,
}

impl LayoutBox {
    #[must_use]
    pub const fn new(chart_x: f64, chart_start_y: f64, chart_width: f64, chart_height: f64) -> Self {
        Self {
            chart_x,
            chart_start_y,
            chart_width,
            chart_height,
        }
    }

    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect::new(
            self.chart_x,
            self.chart_start_y,
            self.chart_width,
            self.chart_height,
        )
    }
}

/// Title and legend layout for a document of the given width.
#[derive(Debug, Clone, Copy)]
pub struct HeaderLayout<'a> {
    flavor: HeaderFlavor,
    width: f64,
    font: &'a FontSpec,
    colors: HeaderColors<'a>,
}

impl<'a> HeaderLayout<'a> {
    #[must_use]
    pub const fn new(
        flavor: HeaderFlavor,
        width: f64,
        font: &'a FontSpec,
        colors: HeaderColors<'a>,
    ) -> Self {
        Self {
            flavor,
            width,
            font,
            colors,
        }
    }

    /// Swatch positions for each entry, wrapping rows that would overflow.
    #[must_use]
    pub fn legend_positions(&self, entries: &[LegendEntry]) -> Vec<(f64, f64)> {
        let m = self.flavor.metrics();
        let limit = self.width - m.padding_x;
        let mut x = m.padding_x;
        let mut y = m.legend_y;
        let mut positions = Vec::with_capacity(entries.len());

        for entry in entries {
            if x > m.padding_x && x + m.extent(&entry.label) > limit {
                x = m.padding_x;
                y += m.row_pitch;
            }
            positions.push((x, y));
            x += m.advance(&entry.label);
        }
        positions
    }

    /// Render the title followed by the legend items.
    #[must_use]
    pub fn render(&self, title: &str, entries: &[LegendEntry]) -> Header {
        let m = self.flavor.metrics();
        let mut elements = Vec::with_capacity(1 + entries.len() * 2);

        elements.push(
            Element::text()
                .num("x", m.padding_x)
                .num("y", m.title_y)
                .attr("fill", self.colors.title)
                .attr("font-size", self.font.title.to_string())
                .attr("font-weight", self.font.weight.to_string())
                .content(title),
        );

        let positions = self.legend_positions(entries);
        for (entry, &(x, y)) in entries.iter().zip(&positions) {
            let mut swatch = Element::rect()
                .num("x", x)
                .num("y", y)
                .num("width", m.box_width)
                .num("height", m.box_height)
                .paint("fill", &entry.paint);
            if let Some(opacity) = entry.opacity {
                swatch = swatch.num("opacity", opacity);
            }
            elements.push(
                swatch
                    .num("rx", m.box_radius)
                    .num("ry", m.box_radius),
            );
            elements.push(
                Element::text()
                    .num("x", x + m.text_dx)
                    .num("y", y + m.text_dy)
                    .attr("fill", self.colors.legend_text)
                    .attr("font-size", m.text_size.to_string())
                    .attr("font-weight", self.font.weight.to_string())
                    .content(entry.label.as_str()),
            );
        }

        let rows = positions
            .iter()
            .map(|&(_, y)| y)
            .fold(Vec::<f64>::new(), |mut seen, y| {
                if seen.last().is_none_or(|&last| last < y) {
                    seen.push(y);
                }
                seen
            })
            .len()
            .max(1);
        #[allow(clippy::cast_precision_loss)]
        let offset = (rows - 1) as f64 * m.row_pitch;

        Header {
            elements,
            rows,
            offset,
            chart_start_y: m.chart_top + offset,
        }
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
