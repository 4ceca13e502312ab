//! Tests for SVG styling primitives.

use super::*;

#[test]
fn solid_paint_renders_color() {
    let paint = Paint::solid("#C5FFC8");
    assert_eq!(paint.to_css(), "#C5FFC8");
    assert_eq!(paint.reference(), None);
}

#[test]
fn pattern_paint_renders_url() {
    let paint = Paint::pattern("pattern-top");
    assert_eq!(paint.to_css(), "url(#pattern-top)");
    assert_eq!(paint.reference(), Some("pattern-top"));
}

#[test]
fn gradient_paint_display() {
    let paint = Paint::gradient("grad-bottom");
    assert_eq!(paint.to_string(), "url(#grad-bottom)");
}

#[test]
fn text_anchor_display() {
    assert_eq!(TextAnchor::Start.to_string(), "start");
    assert_eq!(TextAnchor::Middle.to_string(), "middle");
    assert_eq!(TextAnchor::End.to_string(), "end");
    assert_eq!(TextAnchor::default(), TextAnchor::Start);
}
