//! Tests for the stacked area chart.

use super::*;
use crate::error::PlotError;
use crate::pattern::{BuiltinTiles, MemoryTileSource};
use crate::svg::SvgElement;

fn sample() -> AreaData {
    AreaData::new(
        "Area Chart",
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![
            vec![10.0, 20.0, 15.0, 25.0, 30.0],
            vec![5.0, 10.0, 10.0, 5.0, 10.0],
            vec![5.0, 5.0, 10.0, 10.0, 5.0],
        ],
    )
    .with_labels(["One", "Two", "Three"])
}

fn render(style: AreaStyle, data: &AreaData) -> Document {
    AreaChart::new(style).render(data, &BuiltinTiles).unwrap()
}

fn paths(doc: &Document) -> Vec<&Element> {
    doc.body_elements(&Tag::Path).collect()
}

mod layout_tests {
    use super::*;

    #[test]
    fn solid_style_uses_literal_chart_height() {
        let doc = render(AreaStyle::Solid, &sample());
        let clip = doc.defs().get("chart-clip").unwrap();
        let rect = clip.child_elements().next().unwrap();
        assert_eq!(
            rect.render(),
            "<rect x=\"32\" y=\"94\" width=\"938\" height=\"345\"/>\n"
        );
    }

    #[test]
    fn gradient_style_derives_chart_height() {
        let doc = render(AreaStyle::Gradient, &sample());
        let clip = doc.defs().get("chart-clip-gradient").unwrap();
        let rect = clip.child_elements().next().unwrap();
        // 499 - 16 - 94 - 40
        assert_eq!(rect.get("height"), Some("349"));
    }

    #[test]
    fn grid_has_fifteen_dashed_lines_and_fourteen_labels() {
        let doc = render(AreaStyle::Solid, &sample());
        let lines: Vec<_> = doc.body_elements(&Tag::Line).collect();
        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|l| l.get("stroke-dasharray") == Some("4,4")));
        assert_eq!(lines[14].get("x1"), Some("970"));

        let labels: Vec<String> = doc
            .body_elements(&Tag::Text)
            .filter(|t| t.get("text-anchor") == Some("middle"))
            .map(Element::text_content)
            .collect();
        assert_eq!(labels.len(), 14);
        assert_eq!(labels[0], "01");
        assert_eq!(labels[13], "14");
    }

    #[test]
    fn grid_label_markup() {
        let doc = render(AreaStyle::Solid, &sample());
        let first = doc
            .body_elements(&Tag::Text)
            .find(|t| t.text_content() == "01")
            .unwrap();
        assert_eq!(
            first.render(),
            "<text x=\"42\" y=\"469\" fill=\"#769978\" font-size=\"14\" font-weight=\"400\" text-anchor=\"middle\">01</text>\n"
        );
    }
}

mod fill_tests {
    use super::*;

    #[test]
    fn opacity_style_paints_bottom_band_last() {
        let doc = render(AreaStyle::Solid, &sample());
        let bands = paths(&doc);
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].get("opacity"), Some("0.4"));
        assert_eq!(bands[1].get("opacity"), Some("0.5"));
        assert_eq!(bands[2].get("opacity"), None);
        assert!(bands.iter().all(|b| b.get("fill") == Some("#C5FFC8")));
        assert!(bands.iter().all(|b| b.get("clip-path") == Some("url(#chart-clip)")));
    }

    #[test]
    fn band_attribute_order() {
        let doc = render(AreaStyle::Solid, &sample());
        let top = paths(&doc)[0];
        let keys: Vec<&str> = top.attrs().keys().map(String::as_str).collect();
        assert_eq!(keys, ["d", "fill", "opacity", "fill-rule", "clip-path"]);
    }

    #[test]
    fn gradient_style_defines_gradients_before_clip() {
        let doc = render(AreaStyle::Gradient, &sample());
        let ids: Vec<&str> = doc.defs().ids().collect();
        assert_eq!(
            ids,
            ["grad-bottom", "grad-middle", "grad-top", "chart-clip-gradient"]
        );
        let bands = paths(&doc);
        assert_eq!(bands[0].get("fill"), Some("url(#grad-bottom)"));
        assert_eq!(bands[2].get("fill"), Some("url(#grad-top)"));
        assert_eq!(bands[0].get("opacity"), None);
    }

    #[test]
    fn gradient_markup() {
        let doc = render(AreaStyle::Gradient, &sample());
        let gradient = doc.defs().get("grad-bottom").unwrap();
        assert_eq!(
            gradient.render(),
            "<linearGradient id=\"grad-bottom\" x1=\"0%\" y1=\"100%\" x2=\"0%\" y2=\"0%\">\n    <stop offset=\"0%\" style=\"stop-color:#C5FFC8;stop-opacity:1\"/>\n    <stop offset=\"100%\" style=\"stop-color:#7FA682;stop-opacity:1\"/>\n</linearGradient>\n"
        );
    }

    #[test]
    fn pattern_style_keeps_bottom_band_solid() {
        let doc = render(AreaStyle::Pattern, &sample());
        let ids: Vec<&str> = doc.defs().ids().collect();
        assert_eq!(ids, ["pattern-middle", "pattern-top", "chart-clip-pattern"]);
        let bands = paths(&doc);
        assert_eq!(bands[0].get("fill"), Some("#C5FFC8"));
        assert_eq!(bands[1].get("fill"), Some("url(#pattern-middle)"));
    }

    #[test]
    fn two_pattern_style_defines_only_bands_in_use() {
        let mut data = sample();
        data.series.truncate(2);
        let doc = render(AreaStyle::TwoPatterns, &data);
        let ids: Vec<&str> = doc.defs().ids().collect();
        assert_eq!(ids, ["pattern-bottom", "pattern-middle", "chart-clip-2patterns"]);
        // The third legend entry has no band, so it falls back to a solid color.
        let swatches: Vec<_> = doc.body_elements(&Tag::Rect).collect();
        assert_eq!(swatches[2].get("fill"), Some("#B0E3B3"));
    }

    #[test]
    fn solid_style_uses_distinct_colors() {
        let doc = render(AreaStyle::Minimal, &sample());
        let fills: Vec<_> = paths(&doc).iter().map(|b| b.get("fill").unwrap()).collect();
        assert_eq!(fills, ["#B19ECC", "#FA5A46", "#C5FFC8"]);
        assert!(paths(&doc).iter().all(|b| b.get("opacity").is_none()));
    }

    #[test]
    fn extra_bands_fall_back_to_primary() {
        let mut data = sample();
        data.series.push(vec![1.0; 5]);
        let doc = render(AreaStyle::Gradient, &data);
        let bands = paths(&doc);
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[3].get("fill"), Some("#B0E3B3"));
    }

    #[test]
    fn legend_follows_style() {
        let doc = render(AreaStyle::Gradient, &sample());
        let swatches: Vec<_> = doc.body_elements(&Tag::Rect).collect();
        assert_eq!(swatches[0].get("fill"), Some("url(#grad-bottom)"));

        let doc = render(AreaStyle::Solid, &sample());
        let swatches: Vec<_> = doc.body_elements(&Tag::Rect).collect();
        assert_eq!(swatches[0].get("fill"), Some("#B0E3B3"));
        assert_eq!(swatches[1].get("fill"), Some("#90B892"));
    }
}

mod data_tests {
    use super::*;

    #[test]
    fn local_zero_position_collapses_bands() {
        let data = AreaData::new(
            "Local zero",
            vec![1.0, 2.0, 3.0],
            vec![vec![0.0, 4.0, 2.0], vec![0.0, 3.0, 1.0], vec![0.0, 1.0, 5.0]],
        );
        let doc = render(AreaStyle::Solid, &data);
        for band in paths(&doc) {
            let d = band.get("d").unwrap();
            assert!(d.starts_with("M 32,439 L 32,439"), "{d}");
            assert!(d.ends_with("L 32,439 Z"), "{d}");
        }
    }

    #[test]
    fn all_zero_is_degenerate() {
        let data = AreaData::new("Zero", vec![1.0, 2.0], vec![vec![0.0, 0.0]]);
        let err = AreaChart::new(AreaStyle::Solid)
            .render(&data, &BuiltinTiles)
            .unwrap_err();
        assert!(matches!(err, PlotError::DegenerateData(_)));
    }

    #[test]
    fn series_length_must_match_domain() {
        let data = AreaData::new("Bad", vec![1.0, 2.0, 3.0], vec![vec![1.0, 2.0]]);
        let err = AreaChart::new(AreaStyle::Solid)
            .render(&data, &BuiltinTiles)
            .unwrap_err();
        assert!(matches!(
            err,
            PlotError::DimensionMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let data = AreaData::new("NaN", vec![1.0, 2.0], vec![vec![1.0, f64::NAN]]);
        let err = AreaChart::new(AreaStyle::Solid)
            .render(&data, &BuiltinTiles)
            .unwrap_err();
        assert!(matches!(err, PlotError::DegenerateData(_)));
    }

    #[test]
    fn missing_tile_fails_whole_render() {
        let err = AreaChart::new(AreaStyle::Pattern)
            .render(&sample(), &MemoryTileSource::new())
            .unwrap_err();
        assert!(matches!(err, PlotError::MissingAsset { .. }));
    }

    #[test]
    fn rendering_is_deterministic_and_self_contained() {
        for style in [
            AreaStyle::Solid,
            AreaStyle::Gradient,
            AreaStyle::Pattern,
            AreaStyle::TwoPatterns,
            AreaStyle::Minimal,
        ] {
            let first = render(style, &sample());
            let second = render(style, &sample());
            assert_eq!(first.render(), second.render());
            assert!(first.dangling_references().is_empty(), "{style:?}");
        }
    }

    #[test]
    fn custom_size_changes_root() {
        let doc = AreaChart::new(AreaStyle::Solid)
            .with_size(800.0, 400.0)
            .render(&sample(), &BuiltinTiles)
            .unwrap();
        assert!(doc.render().starts_with("<svg width=\"800\" height=\"400\""));
    }
}
