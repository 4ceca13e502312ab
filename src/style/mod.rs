//! Style resolution: closed style selectors per chart type and the immutable style table.
//!
//! Every chart type has its own selector enum. Names and numbers are parsed at construction
//! time; anything outside the closed set is rejected with `InvalidStyle` listing what is
//! available. Records are `'static` and never mutated.

mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

pub use table::STYLES;

/// Ordered color roles of a style (`primary`, `background`, `slice3`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    roles: &'static [(&'static str, &'static str)],
    default_role: &'static str,
}

impl Palette {
    #[must_use]
    pub const fn new(
        roles: &'static [(&'static str, &'static str)],
        default_role: &'static str,
    ) -> Self {
        Self {
            roles,
            default_role,
        }
    }

    #[must_use]
    pub fn get(&self, role: &str) -> Option<&'static str> {
        self.roles
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, color)| *color)
    }

    /// Color for `role`, falling back to the palette's default role.
    #[must_use]
    pub fn color(&self, role: &str) -> &'static str {
        self.get(role)
            .or_else(|| self.get(self.default_role))
            .unwrap_or("#000000")
    }

    /// Color for `role`, falling back to `fallback_role`, then to the default role.
    #[must_use]
    pub fn color_or(&self, role: &str, fallback_role: &str) -> &'static str {
        self.get(role).unwrap_or_else(|| self.color(fallback_role))
    }

    #[must_use]
    pub const fn default_role(&self) -> &'static str {
        self.default_role
    }

    pub fn roles(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.roles.iter().copied()
    }
}

/// Font sizes and weight of a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    pub title: u16,
    pub label: u16,
    pub tick: u16,
    pub weight: u16,
}

/// Marker shapes for line chart data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSpec {
    pub size: f64,
    /// Assigned to series cyclically, independent of color.
    pub shapes: &'static [MarkerShape],
}

/// How stacked area bands are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaFill {
    /// One color with per-band opacity.
    Opacity,
    /// One linear gradient per band.
    Gradient,
    /// Solid bottom band, pattern middle and top bands.
    Pattern,
    /// Pattern on every band.
    TwoPatterns,
    /// Distinct solid color per band.
    Solid,
}

/// Chart-specific part of a style record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartParams {
    Area {
        fill: AreaFill,
    },
    Line {
        markers: Option<MarkerSpec>,
    },
    Bubble,
    Pie {
        inner_radius: f64,
        separator_width: f64,
    },
    Radar {
        num_axes: usize,
        num_rings: usize,
        fill_opacity: f64,
    },
    BarColumn,
}

/// Resolved, immutable bundle of colors, fonts and chart parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRecord {
    pub id: u16,
    pub name: &'static str,
    pub palette: Palette,
    pub font: FontSpec,
    pub line_width: f64,
    pub params: ChartParams,
}

/// Look up a style record by id.
///
/// # Errors
/// Returns `InvalidStyle` listing every known id if `id` is not in the table.
pub fn resolve_style(id: u16) -> Result<&'static StyleRecord> {
    STYLES.iter().find(|s| s.id == id).ok_or_else(|| {
        PlotError::InvalidStyle {
            requested: id.to_string(),
            available: STYLES
                .iter()
                .map(|s| s.id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    })
}

/// A closed set of named styles for one chart type.
///
/// Numbers are 1-based positions in `ALL`; names match case-insensitively.
pub trait StyleName: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// Parse a style name.
    ///
    /// # Errors
    /// Returns `InvalidStyle` listing the valid names.
    fn parse_name(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlotError::InvalidStyle {
                requested: s.to_string(),
                available: Self::ALL
                    .iter()
                    .map(|v| v.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Select a style by its 1-based number.
    ///
    /// # Errors
    /// Returns `InvalidStyle` listing the valid numbers.
    fn from_number(n: u16) -> Result<Self> {
        usize::from(n)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
            .ok_or_else(|| PlotError::InvalidStyle {
                requested: n.to_string(),
                available: (1..=Self::ALL.len())
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// A style given either by number or by name, as found in manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSelector {
    Number(u16),
    Name(String),
}

impl StyleSelector {
    /// Resolve into a closed style enum.
    ///
    /// # Errors
    /// Returns `InvalidStyle` if the number or name is not part of `T`.
    pub fn resolve<T: StyleName>(&self) -> Result<T> {
        match self {
            Self::Number(n) => T::from_number(*n),
            Self::Name(name) => name
                .trim()
                .parse::<u16>()
                .map_or_else(|_| T::parse_name(name), T::from_number),
        }
    }
}

impl Default for StyleSelector {
    fn default() -> Self {
        Self::Number(1)
    }
}

impl fmt::Display for StyleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),*) => {
        $(impl FromStr for $ty {
            type Err = PlotError;

            fn from_str(s: &str) -> Result<Self> {
                StyleSelector::Name(s.to_string()).resolve()
            }
        })*
    };
}

/// Area chart styles (ids 1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaStyle {
    #[default]
    Solid,
    Gradient,
    Pattern,
    TwoPatterns,
    Minimal,
}

impl StyleName for AreaStyle {
    const ALL: &'static [Self] = &[
        Self::Solid,
        Self::Gradient,
        Self::Pattern,
        Self::TwoPatterns,
        Self::Minimal,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
            Self::Pattern => "pattern",
            Self::TwoPatterns => "2patterns",
            Self::Minimal => "minimal",
        }
    }
}

impl AreaStyle {
    #[must_use]
    pub const fn style_id(self) -> u16 {
        match self {
            Self::Solid => 1,
            Self::Gradient => 2,
            Self::Pattern => 3,
            Self::TwoPatterns => 4,
            Self::Minimal => 5,
        }
    }
}

/// Line chart styles; combined with a [`LineTheme`] to pick ids 10-12 or 20-22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Markers,
    Shapes,
}

impl StyleName for LineStyle {
    const ALL: &'static [Self] = &[Self::Solid, Self::Markers, Self::Shapes];

    fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Markers => "markers",
            Self::Shapes => "shapes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTheme {
    #[default]
    Dark,
    White,
}

impl StyleName for LineTheme {
    const ALL: &'static [Self] = &[Self::Dark, Self::White];

    fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::White => "white",
        }
    }
}

impl LineStyle {
    #[must_use]
    pub const fn style_id(self, theme: LineTheme) -> u16 {
        let base = match theme {
            LineTheme::Dark => 10,
            LineTheme::White => 20,
        };
        base + match self {
            Self::Solid => 0,
            Self::Markers => 1,
            Self::Shapes => 2,
        }
    }
}

/// Color theme shared by bubble, pie, radar, bar and column charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Brand,
    Black,
    White,
}

impl StyleName for Theme {
    const ALL: &'static [Self] = &[Self::Brand, Self::Black, Self::White];

    fn name(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl Theme {
    const fn offset(self) -> u16 {
        match self {
            Self::Brand => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }

    #[must_use]
    pub const fn bubble_id(self) -> u16 {
        30 + self.offset()
    }

    #[must_use]
    pub const fn pie_id(self) -> u16 {
        40 + self.offset()
    }

    #[must_use]
    pub const fn radar_id(self) -> u16 {
        50 + self.offset()
    }

    /// Bar and column charts share one record per theme.
    #[must_use]
    pub const fn bar_column_id(self) -> u16 {
        60 + self.offset()
    }
}

/// Fill arrangement for bar and column charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStyle {
    #[default]
    Solid,
    Pattern1,
    Pattern2,
    Pattern3,
    Multicolor,
}

impl StyleName for BarStyle {
    const ALL: &'static [Self] = &[
        Self::Solid,
        Self::Pattern1,
        Self::Pattern2,
        Self::Pattern3,
        Self::Multicolor,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Pattern1 => "pattern1",
            Self::Pattern2 => "pattern2",
            Self::Pattern3 => "pattern3",
            Self::Multicolor => "multicolor",
        }
    }
}

impl_from_str!(AreaStyle, LineStyle, LineTheme, Theme, BarStyle);

/// Chart family of a style id, used for listings.
#[must_use]
pub const fn family_of(id: u16) -> &'static str {
    match id {
        1..=5 => "area",
        10..=12 | 20..=22 => "line",
        30..=32 => "bubble",
        40..=42 => "pie",
        50..=52 => "radar",
        60..=62 => "bar/column",
        _ => "unknown",
    }
}

/// Style records, optionally restricted to one family (`area`, `line`, `bar`, ...).
///
/// `bar` and `column` both select the shared bar/column themes.
#[must_use]
pub fn list_styles(family: Option<&str>) -> Vec<&'static StyleRecord> {
    STYLES
        .iter()
        .filter(|s| {
            family.is_none_or(|wanted| {
                let wanted = wanted.to_lowercase();
                let actual = family_of(s.id);
                actual == wanted || actual.split('/').any(|part| part == wanted)
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
