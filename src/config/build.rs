//! Conversion of manifest entries into configured chart jobs.

use crate::chart::{
    AreaChart, AreaData, BarChart, BarData, BubbleChart, BubbleData, ChartKind, ColumnChart,
    LineChart, LineData, PieChart, PieData, RadarBubbleChart, RadarBubbleData, RadarChart,
    RadarData,
};
use crate::error::{PlotError, Result};
use crate::render::{ChartJob, NamedJob};
use crate::style::{StyleName, StyleSelector};

use super::model::{Categories, ChartEntry, Manifest};

impl Manifest {
    /// Build every entry, in manifest order.
    ///
    /// # Errors
    /// Returns the first entry error, prefixed with the chart name.
    pub fn jobs(&self) -> Result<Vec<NamedJob>> {
        self.charts.iter().map(ChartEntry::named_job).collect()
    }
}

fn selector<T: StyleName + Default>(value: Option<&StyleSelector>) -> Result<T> {
    value.map_or_else(|| Ok(T::default()), |s| s.resolve())
}

impl ChartEntry {
    /// Build the entry, naming errors after the chart.
    ///
    /// # Errors
    /// See [`ChartEntry::to_job`].
    pub fn named_job(&self) -> Result<NamedJob> {
        let job = self.to_job().map_err(|e| match e {
            PlotError::Config(msg) => PlotError::Config(format!("chart '{}': {msg}", self.name)),
            other => other,
        })?;
        Ok(NamedJob {
            name: self.name.clone(),
            job,
        })
    }

    /// Resolve the style selectors and assemble the chart and its data.
    ///
    /// # Errors
    /// Returns `InvalidStyle` for an unknown style or theme, or a `Config` error when a
    /// field does not fit the chart kind.
    pub fn to_job(&self) -> Result<ChartJob> {
        let title = self.display_title();

        let job = match self.kind {
            ChartKind::Area => {
                let chart = AreaChart::new(selector(self.style.as_ref())?);
                let (w, h) = self.size_or(chart.width, chart.height);
                let data = AreaData::new(title, self.x.clone(), self.series.clone())
                    .with_labels(self.labels.iter().cloned());
                ChartJob::Area(chart.with_size(w, h), data)
            }
            ChartKind::Bar | ChartKind::Column => self.bar_column_job()?,
            ChartKind::Line => {
                let chart = LineChart::new(
                    selector(self.style.as_ref())?,
                    selector(self.theme.as_ref())?,
                );
                let (w, h) = self.size_or(chart.width, chart.height);
                let mut data = LineData::new(title, self.x.clone(), self.series.clone())
                    .with_labels(self.labels.iter().cloned());
                if let Some(colors) = &self.colors {
                    data = data.with_colors(colors.iter().cloned(), self.strict_colors);
                }
                data.line_width = self.line_width;
                ChartJob::Line(chart.with_size(w, h), data)
            }
            ChartKind::Bubble | ChartKind::RadarBubble => self.bubble_job()?,
            ChartKind::Pie => {
                self.reject_style()?;
                let chart = PieChart::new(selector(self.theme.as_ref())?);
                let (w, h) = self.size_or(chart.width, chart.height);
                let mut data = PieData::new(title, self.values.clone(), self.labels.iter().cloned());
                data.center_label.clone_from(&self.center_label);
                data.center_value.clone_from(&self.center_value);
                ChartJob::Pie(chart.with_size(w, h), data)
            }
            ChartKind::Radar => {
                self.reject_style()?;
                let chart = RadarChart::new(selector(self.theme.as_ref())?);
                let (w, h) = self.size_or(chart.width, chart.height);
                let mut data = RadarData::new(title, self.series.clone())
                    .with_labels(self.labels.iter().cloned());
                data.axis_labels.clone_from(&self.axis_labels);
                ChartJob::Radar(chart.with_size(w, h), data)
            }
        };
        Ok(job)
    }

    /// Entry size, falling back to the chart's default.
    fn size_or(&self, width: f64, height: f64) -> (f64, f64) {
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }

    /// Theme-only chart kinds have no `style` field.
    fn reject_style(&self) -> Result<()> {
        match &self.style {
            Some(style) => Err(PlotError::Config(format!(
                "{} charts take a theme, not a style (got style '{style}')",
                self.kind
            ))),
            None => Ok(()),
        }
    }

    fn bar_column_job(&self) -> Result<ChartJob> {
        let style = selector(self.style.as_ref())?;
        let theme = selector(self.theme.as_ref())?;
        let categories: Vec<String> = match &self.categories {
            None => Vec::new(),
            Some(Categories::Names(names)) => names.clone(),
            Some(Categories::Indices(numbers)) => numbers.iter().map(ToString::to_string).collect(),
        };
        let data = BarData::new(self.display_title(), categories, self.series.clone())
            .with_labels(self.labels.iter().cloned());

        Ok(if self.kind == ChartKind::Bar {
            let chart = BarChart::new(style, theme);
            let (w, h) = self.size_or(chart.width, chart.height);
            ChartJob::Bar(chart.with_size(w, h), data)
        } else {
            let chart = ColumnChart::new(style, theme);
            let (w, h) = self.size_or(chart.width, chart.height);
            ChartJob::Column(chart.with_size(w, h), data)
        })
    }

    fn bubble_job(&self) -> Result<ChartJob> {
        self.reject_style()?;
        let theme = selector(self.theme.as_ref())?;
        let categories = match &self.categories {
            None => None,
            Some(Categories::Indices(indices)) => Some(indices.clone()),
            Some(Categories::Names(_)) => {
                return Err(PlotError::Config(
                    "bubble categories must be indices into category_labels".to_string(),
                ));
            }
        };

        if self.kind == ChartKind::Bubble {
            let chart = BubbleChart::new(theme);
            let mut data = BubbleData::new(
                self.display_title(),
                self.x.clone(),
                self.y.clone(),
                self.sizes.clone(),
            );
            data.categories = categories;
            data.category_labels.clone_from(&self.category_labels);
            data.size_range = self.size_range;
            let (w, h) = self.size_or(chart.width, chart.height);
            return Ok(ChartJob::Bubble(chart.with_size(w, h), data));
        }

        let chart = RadarBubbleChart::new(theme);
        let mut data = RadarBubbleData::new(
            self.display_title(),
            self.angles.clone(),
            self.distances.clone(),
            self.sizes.clone(),
        );
        data.categories = categories;
        data.category_labels.clone_from(&self.category_labels);
        data.size_range = self.size_range;
        data.num_rings = self.num_rings.unwrap_or(data.num_rings);
        data.num_axes = self.num_axes.unwrap_or(data.num_axes);
        let (w, h) = self.size_or(chart.width, chart.height);
        Ok(ChartJob::RadarBubble(chart.with_size(w, h), data))
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
