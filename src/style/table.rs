//! Built-in style records.
//!
//! Ids: 1-5 area, 10-12 and 20-22 line (dark and white), 30-32 bubble, 40-42 pie,
//! 50-52 radar, 60-62 bar/column themes.

use super::{AreaFill, ChartParams, FontSpec, MarkerShape, MarkerSpec, Palette, StyleRecord};

const FAMILY: &str = "Hubot Sans";

const WIDE_FONT: FontSpec = FontSpec {
    family: FAMILY,
    title: 20,
    label: 14,
    tick: 14,
    weight: 400,
};

const BUBBLE_FONT: FontSpec = FontSpec {
    family: FAMILY,
    title: 20,
    label: 14,
    tick: 12,
    weight: 400,
};

const BAR_FONT: FontSpec = FontSpec {
    family: FAMILY,
    title: 20,
    label: 14,
    tick: 12,
    weight: 400,
};

const PIE_FONT: FontSpec = FontSpec {
    family: FAMILY,
    title: 16,
    label: 12,
    tick: 12,
    weight: 400,
};

const RADAR_FONT: FontSpec = FontSpec {
    family: FAMILY,
    title: 16,
    label: 12,
    tick: 10,
    weight: 400,
};

const CIRCLE_MARKERS: MarkerSpec = MarkerSpec {
    size: 11.0,
    shapes: &[MarkerShape::Circle],
};

const MIXED_MARKERS: MarkerSpec = MarkerSpec {
    size: 11.0,
    shapes: &[
        MarkerShape::Circle,
        MarkerShape::Triangle,
        MarkerShape::Square,
        MarkerShape::Diamond,
        MarkerShape::Triangle,
    ],
};

const PIE: ChartParams = ChartParams::Pie {
    inner_radius: 0.55,
    separator_width: 2.0,
};

const RADAR: ChartParams = ChartParams::Radar {
    num_axes: 8,
    num_rings: 5,
    fill_opacity: 0.6,
};

const AREA_BASE: &[(&str, &str)] = &[
    ("primary", "#B0E3B3"),
    ("secondary", "#90B892"),
    ("accent", "#5A715B"),
    ("area", "#C5FFC8"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("legend_text", "#769978"),
    ("grid", "#2D3130"),
];

const AREA_GRADIENT: &[(&str, &str)] = &[
    ("primary", "#B0E3B3"),
    ("secondary", "#90B892"),
    ("accent", "#5A715B"),
    ("area", "#C5FFC8"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("legend_text", "#769978"),
    ("grid", "#2D3130"),
    ("gradient_bottom_start", "#C5FFC8"),
    ("gradient_bottom_end", "#7FA682"),
    ("gradient_middle_start", "#90B892"),
    ("gradient_middle_end", "#5F7861"),
    ("gradient_top_start", "#5A715B"),
    ("gradient_top_end", "#3D4D3E"),
];

const AREA_SOLID: &[(&str, &str)] = &[
    ("primary", "#C5FFC8"),
    ("secondary", "#FA5A46"),
    ("accent", "#B19ECC"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("legend_text", "#769978"),
    ("grid", "#2D3130"),
];

const LINE_DARK: &[(&str, &str)] = &[
    ("primary", "#C5FFC8"),
    ("secondary", "#FA5A46"),
    ("accent", "#B19ECC"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("grid", "#2D3130"),
    ("legend_text", "#769978"),
];

const LINE_DARK_SHAPES: &[(&str, &str)] = &[
    ("primary", "#FFFFFF"),
    ("secondary", "#FA5A46"),
    ("accent", "#FF8C00"),
    ("quaternary", "#90EE90"),
    ("quinary", "#87CEEB"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("grid", "#2D3130"),
    ("legend_text", "#769978"),
];

const LINE_WHITE: &[(&str, &str)] = &[
    ("primary", "#333333"),
    ("secondary", "#666666"),
    ("accent", "#999999"),
    ("background", "#FFFFFF"),
    ("title", "#000000"),
    ("grid", "#E5E5E5"),
    ("legend_text", "#666666"),
];

const LINE_WHITE_MARKERS: &[(&str, &str)] = &[
    ("primary", "#00C896"),
    ("secondary", "#FF6B6B"),
    ("accent", "#C8C8C8"),
    ("background", "#FFFFFF"),
    ("title", "#000000"),
    ("grid", "#E5E5E5"),
    ("legend_text", "#666666"),
];

const LINE_WHITE_SHAPES: &[(&str, &str)] = &[
    ("primary", "#000000"),
    ("secondary", "#FF6B6B"),
    ("accent", "#FF8C00"),
    ("quaternary", "#C8C8FF"),
    ("quinary", "#C8C8C8"),
    ("background", "#FFFFFF"),
    ("title", "#000000"),
    ("grid", "#E5E5E5"),
    ("legend_text", "#666666"),
];

const BUBBLE_BRAND: &[(&str, &str)] = &[
    ("bubble1", "#FA5A46"),
    ("bubble2", "#FF8C00"),
    ("bubble3", "#FFD700"),
    ("bubble4", "#C5FFC8"),
    ("bubble5", "#00CED1"),
    ("bubble6", "#87CEEB"),
    ("bubble7", "#B19ECC"),
    ("bubble8", "#FFB6C1"),
    ("bubble9", "#A9A9A9"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("grid", "#2D3130"),
    ("legend_text", "#769978"),
    ("axis_line", "#4A4A4A"),
];

const BUBBLE_BLACK: &[(&str, &str)] = &[
    ("bubble1", "#FFFFFF"),
    ("bubble2", "#E0E0E0"),
    ("bubble3", "#C8C8C8"),
    ("bubble4", "#A9A9A9"),
    ("bubble5", "#909090"),
    ("bubble6", "#787878"),
    ("bubble7", "#606060"),
    ("bubble8", "#484848"),
    ("bubble9", "#303030"),
    ("background", "#121212"),
    ("title", "#FFFFFF"),
    ("grid", "#2D3130"),
    ("legend_text", "#A9A9A9"),
    ("axis_line", "#4A4A4A"),
];

const BUBBLE_WHITE: &[(&str, &str)] = &[
    ("bubble1", "#FA5A46"),
    ("bubble2", "#FF8C00"),
    ("bubble3", "#FFD700"),
    ("bubble4", "#00C896"),
    ("bubble5", "#00CED1"),
    ("bubble6", "#87CEEB"),
    ("bubble7", "#B19ECC"),
    ("bubble8", "#FFB6C1"),
    ("bubble9", "#666666"),
    ("background", "#FFFFFF"),
    ("title", "#000000"),
    ("grid", "#E5E5E5"),
    ("legend_text", "#666666"),
    ("axis_line", "#4A4A4A"),
];

const PIE_BRAND: &[(&str, &str)] = &[
    ("slice1", "#C5FFC8"),
    ("slice2", "#FA5A46"),
    ("slice3", "#FFB366"),
    ("slice4", "#FFD699"),
    ("slice5", "#B19ECC"),
    ("slice6", "#A4C2F4"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("legend_text", "#769978"),
    ("center_text", "#FFFFFF"),
    ("separator", "#000000"),
];

const PIE_BLACK: &[(&str, &str)] = &[
    ("slice1", "#FFFFFF"),
    ("slice2", "#E0E0E0"),
    ("slice3", "#C8C8C8"),
    ("slice4", "#A9A9A9"),
    ("slice5", "#909090"),
    ("slice6", "#787878"),
    ("background", "#121212"),
    ("title", "#FFFFFF"),
    ("legend_text", "#A9A9A9"),
    ("center_text", "#FFFFFF"),
    ("separator", "#000000"),
];

const PIE_WHITE: &[(&str, &str)] = &[
    ("slice1", "#303030"),
    ("slice2", "#484848"),
    ("slice3", "#606060"),
    ("slice4", "#787878"),
    ("slice5", "#909090"),
    ("slice6", "#C8C8C8"),
    ("background", "#FFFFFF"),
    ("title", "#000000"),
    ("legend_text", "#666666"),
    ("center_text", "#000000"),
    ("separator", "#FFFFFF"),
];

const RADAR_BRAND: &[(&str, &str)] = &[
    ("area1", "#90B892"),
    ("area1_stroke", "#5A715B"),
    ("area2", "#FA5A46"),
    ("area2_stroke", "#D94435"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("legend_text", "#769978"),
    ("axis_text", "#A9A9A9"),
    ("grid", "#2D3130"),
    ("axis", "#4A4A4A"),
];

const RADAR_BLACK: &[(&str, &str)] = &[
    ("area1", "#C8C8C8"),
    ("area1_stroke", "#909090"),
    ("area2", "#606060"),
    ("area2_stroke", "#303030"),
    ("background", "#121212"),
    ("title", "#FFFFFF"),
    ("legend_text", "#A9A9A9"),
    ("axis_text", "#A9A9A9"),
    ("grid", "#2D3130"),
    ("axis", "#4A4A4A"),
];

const RADAR_WHITE: &[(&str, &str)] = &[
    ("area1", "#484848"),
    ("area1_stroke", "#303030"),
    ("area2", "#909090"),
    ("area2_stroke", "#606060"),
    ("background", "#FFFFFF"),
    ("title", "#000000"),
    ("legend_text", "#666666"),
    ("axis_text", "#666666"),
    ("grid", "#E5E5E5"),
    ("axis", "#CCCCCC"),
];

const BAR_BRAND: &[(&str, &str)] = &[
    ("one", "#C5FFC8"),
    ("two", "#90B892"),
    ("three", "#5A715B"),
    ("multi_one", "#C5FFC8"),
    ("multi_two", "#FF4444"),
    ("multi_three", "#B19CD9"),
    ("background", "#121212"),
    ("title", "#C5FFC8"),
    ("legend_text", "#769978"),
    ("grid", "#2D3130"),
];

const BAR_BLACK: &[(&str, &str)] = &[
    ("one", "#FFFFFF"),
    ("two", "#808080"),
    ("three", "#4D4D4D"),
    ("multi_one", "#C5FFC8"),
    ("multi_two", "#FF4444"),
    ("multi_three", "#B19CD9"),
    ("background", "#121212"),
    ("title", "#FFFFFF"),
    ("legend_text", "#999999"),
    ("grid", "#2D3130"),
];

const BAR_WHITE: &[(&str, &str)] = &[
    ("one", "#000000"),
    ("two", "#808080"),
    ("three", "#CCCCCC"),
    ("multi_one", "#C5FFC8"),
    ("multi_two", "#FF4444"),
    ("multi_three", "#B19CD9"),
    ("background", "#FFFFFF"),
    ("title", "#000000"),
    ("legend_text", "#666666"),
    ("grid", "#E0E0E0"),
];

const fn area(id: u16, name: &'static str, roles: &'static [(&'static str, &'static str)], fill: AreaFill) -> StyleRecord {
    StyleRecord {
        id,
        name,
        palette: Palette::new(roles, "primary"),
        font: WIDE_FONT,
        line_width: 1.0,
        params: ChartParams::Area { fill },
    }
}

const fn line(
    id: u16,
    name: &'static str,
    roles: &'static [(&'static str, &'static str)],
    markers: Option<MarkerSpec>,
) -> StyleRecord {
    StyleRecord {
        id,
        name,
        palette: Palette::new(roles, "primary"),
        font: WIDE_FONT,
        line_width: 2.0,
        params: ChartParams::Line { markers },
    }
}

const fn record(
    id: u16,
    name: &'static str,
    palette: Palette,
    font: FontSpec,
    params: ChartParams,
) -> StyleRecord {
    StyleRecord {
        id,
        name,
        palette,
        font,
        line_width: 1.0,
        params,
    }
}

/// Every built-in style, ordered by id.
pub static STYLES: &[StyleRecord] = &[
    area(1, "Area Chart - Edge - Style 1", AREA_BASE, AreaFill::Opacity),
    area(2, "Area Chart - Edge - Style 2 (Gradient)", AREA_GRADIENT, AreaFill::Gradient),
    area(3, "Area Chart - Edge - Style 3 (Pattern)", AREA_BASE, AreaFill::Pattern),
    area(4, "Area Chart - Edge - Style 4 (2 Patterns)", AREA_BASE, AreaFill::TwoPatterns),
    area(5, "Area Chart - Edge - Solid Colors", AREA_SOLID, AreaFill::Solid),
    line(10, "Line Chart - Solid Palette", LINE_DARK, None),
    line(11, "Line Chart - Solid Color (with markers)", LINE_DARK, Some(CIRCLE_MARKERS)),
    line(12, "Line Chart - Solid Shapes (different markers)", LINE_DARK_SHAPES, Some(MIXED_MARKERS)),
    line(20, "Line Chart - Solid Palette (White Theme)", LINE_WHITE, None),
    line(21, "Line Chart - Solid Color (White Theme with markers)", LINE_WHITE_MARKERS, Some(CIRCLE_MARKERS)),
    line(22, "Line Chart - Solid Shapes (White Theme different markers)", LINE_WHITE_SHAPES, Some(MIXED_MARKERS)),
    record(30, "Bubble Chart - Brand Colors (Dark Theme)", Palette::new(BUBBLE_BRAND, "bubble1"), BUBBLE_FONT, ChartParams::Bubble),
    record(31, "Bubble Chart - Black Theme (Grayscale)", Palette::new(BUBBLE_BLACK, "bubble1"), BUBBLE_FONT, ChartParams::Bubble),
    record(32, "Bubble Chart - White Theme (Light Background)", Palette::new(BUBBLE_WHITE, "bubble1"), BUBBLE_FONT, ChartParams::Bubble),
    record(40, "Pie Chart - Brand Colors", Palette::new(PIE_BRAND, "slice1"), PIE_FONT, PIE),
    record(41, "Pie Chart - Black/Grayscale Theme", Palette::new(PIE_BLACK, "slice1"), PIE_FONT, PIE),
    record(42, "Pie Chart - White Theme", Palette::new(PIE_WHITE, "slice1"), PIE_FONT, PIE),
    record(50, "Radar Chart - Brand Colors", Palette::new(RADAR_BRAND, "area1"), RADAR_FONT, RADAR),
    record(51, "Radar Chart - Black/Grayscale Theme", Palette::new(RADAR_BLACK, "area1"), RADAR_FONT, RADAR),
    record(52, "Radar Chart - White Theme", Palette::new(RADAR_WHITE, "area1"), RADAR_FONT, RADAR),
    record(60, "Bar/Column - Brand Theme", Palette::new(BAR_BRAND, "one"), BAR_FONT, ChartParams::BarColumn),
    record(61, "Bar/Column - Black Theme", Palette::new(BAR_BLACK, "one"), BAR_FONT, ChartParams::BarColumn),
    record(62, "Bar/Column - White Theme", Palette::new(BAR_WHITE, "one"), BAR_FONT, ChartParams::BarColumn),
];
