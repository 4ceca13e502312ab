//! Tests for header layout.

use super::*;
use crate::style::resolve_style;
use crate::svg::{SvgElement, Tag};

const COLORS: HeaderColors<'static> = HeaderColors {
    title: "#C5FFC8",
    legend_text: "#769978",
};

fn entries(labels: &[&str]) -> Vec<LegendEntry> {
    labels
        .iter()
        .map(|l| LegendEntry::new(*l, Paint::solid("#FFFFFF")))
        .collect()
}

fn wide_font() -> FontSpec {
    resolve_style(1).unwrap().font
}

#[test]
fn wide_header_starts_chart_at_94() {
    let font = wide_font();
    let layout = HeaderLayout::new(HeaderFlavor::Wide, 1002.0, &font, COLORS);
    let header = layout.render("Area Chart", &entries(&["One", "Two", "Three"]));
    assert_eq!(header.rows, 1);
    assert!((header.chart_start_y - 94.0).abs() < f64::EPSILON);
    // title + (rect, text) per entry
    assert_eq!(header.elements.len(), 7);
}

#[test]
fn wide_legend_advances_by_label_length() {
    let font = wide_font();
    let layout = HeaderLayout::new(HeaderFlavor::Wide, 1002.0, &font, COLORS);
    let positions = layout.legend_positions(&entries(&["One", "Three", "X"]));
    assert_eq!(positions[0], (32.0, 50.0));
    // 32 + 20 + 8 + 3*8 + 20
    assert_eq!(positions[1], (104.0, 50.0));
    // 104 + 20 + 8 + 5*8 + 20
    assert_eq!(positions[2], (192.0, 50.0));
}

#[test]
fn title_markup_is_exact() {
    let font = wide_font();
    let layout = HeaderLayout::new(HeaderFlavor::Wide, 1002.0, &font, COLORS);
    let header = layout.render("Area Chart", &[]);
    assert_eq!(
        header.elements[0].render(),
        "<text x=\"32\" y=\"36\" fill=\"#C5FFC8\" font-size=\"20\" font-weight=\"400\">Area Chart</text>\n"
    );
}

#[test]
fn legend_item_markup_is_exact() {
    let font = wide_font();
    let layout = HeaderLayout::new(HeaderFlavor::Wide, 1002.0, &font, COLORS);
    let header = layout.render("t", &entries(&["One"]));
    assert_eq!(
        header.elements[1].render(),
        "<rect x=\"32\" y=\"50\" width=\"20\" height=\"10\" fill=\"#FFFFFF\" rx=\"2\" ry=\"2\"/>\n"
    );
    assert_eq!(
        header.elements[2].render(),
        "<text x=\"60\" y=\"59\" fill=\"#769978\" font-size=\"14\" font-weight=\"400\">One</text>\n"
    );
}

#[test]
fn bubble_legend_uses_fixed_advance() {
    let font = resolve_style(30).unwrap().font;
    let layout = HeaderLayout::new(HeaderFlavor::Bubble, 456.0, &font, COLORS);
    let positions = layout.legend_positions(&entries(&["Category A", "Category B", "Category C"]));
    assert_eq!(positions, vec![(32.0, 52.0), (92.0, 52.0), (152.0, 52.0)]);
}

#[test]
fn compact_legend_matches_pie_fixture() {
    let font = resolve_style(40).unwrap().font;
    let layout = HeaderLayout::new(HeaderFlavor::Compact, 328.0, &font, COLORS);
    let items = entries(&["One", "Two", "Three", "Four", "Five", "Six"]);
    let positions = layout.legend_positions(&items);
    assert!(positions.iter().all(|&(_, y)| (y - 36.0).abs() < f64::EPSILON));
    // 16 + 8 + 4 + 3*6 + 8
    assert_eq!(positions[1].0, 54.0);
    let header = layout.render("Pie chart", &items);
    assert!((header.chart_start_y - 60.0).abs() < f64::EPSILON);
}

#[test]
fn overflowing_legend_wraps_and_pushes_chart_down() {
    let font = resolve_style(40).unwrap().font;
    let layout = HeaderLayout::new(HeaderFlavor::Compact, 328.0, &font, COLORS);
    let items = entries(&[
        "A fairly long label",
        "Another long label",
        "Third long label",
    ]);
    let header = layout.render("Pie chart", &items);
    assert_eq!(header.rows, 2);
    assert!((header.offset - 16.0).abs() < f64::EPSILON);
    assert!((header.chart_start_y - 76.0).abs() < f64::EPSILON);

    let positions = layout.legend_positions(&items);
    assert_eq!(positions[0], (16.0, 36.0));
    assert_eq!(positions[2].0, 16.0);
}

#[test]
fn first_item_never_wraps() {
    let font = wide_font();
    let layout = HeaderLayout::new(HeaderFlavor::Wide, 100.0, &font, COLORS);
    let positions = layout.legend_positions(&entries(&["A label wider than the document"]));
    assert_eq!(positions, vec![(32.0, 50.0)]);
}

#[test]
fn swatch_opacity_is_appended() {
    let font = resolve_style(50).unwrap().font;
    let layout = HeaderLayout::new(HeaderFlavor::Compact, 328.0, &font, COLORS);
    let items = vec![LegendEntry::new("One", Paint::solid("#90B892")).with_opacity(0.6)];
    let header = layout.render("Radar", &items);
    let swatch = &header.elements[1];
    assert_eq!(swatch.tag(), &Tag::Rect);
    assert_eq!(swatch.get("opacity"), Some("0.6"));
    assert_eq!(swatch.get("width"), Some("8"));
    let keys: Vec<&str> = swatch.attrs().keys().map(String::as_str).collect();
    assert_eq!(keys, ["x", "y", "width", "height", "fill", "opacity", "rx", "ry"]);
}

#[test]
fn layout_box_frame() {
    let frame = LayoutBox::new(32.0, 94.0, 938.0, 385.0).frame();
    assert!((frame.bottom() - 479.0).abs() < f64::EPSILON);
}
