//! Tests for chart kinds and the shared renderer helpers.

use super::*;
use crate::pattern::BuiltinTiles;
use crate::style::{AreaStyle, BarStyle, LineStyle, LineTheme, Theme, resolve_style};
use crate::svg::SvgElement;

mod kind_tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("area".parse::<ChartKind>().unwrap(), ChartKind::Area);
        assert_eq!(" Radar_Bubble ".parse::<ChartKind>().unwrap(), ChartKind::RadarBubble);
        assert_eq!("PIE".parse::<ChartKind>().unwrap(), ChartKind::Pie);
    }

    #[test]
    fn unknown_kind_lists_choices() {
        let err = "donut".parse::<ChartKind>().unwrap_err();
        assert!(err.is_config_error());
        let message = err.to_string();
        assert!(message.contains("donut"));
        assert!(message.contains("radar_bubble"));
    }

    #[test]
    fn display_round_trips_every_kind() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.to_string().parse::<ChartKind>().unwrap(), kind);
        }
    }

    #[test]
    fn style_families() {
        assert_eq!(ChartKind::Bar.style_family(), "bar/column");
        assert_eq!(ChartKind::Column.style_family(), "bar/column");
        assert_eq!(ChartKind::RadarBubble.style_family(), "bubble");
        assert_eq!(ChartKind::Radar.style_family(), "radar");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ChartKind::RadarBubble).unwrap();
        assert_eq!(json, "\"radar_bubble\"");
        let kind: ChartKind = serde_json::from_str("\"column\"").unwrap();
        assert_eq!(kind, ChartKind::Column);
    }
}

mod helper_tests {
    use super::*;

    #[test]
    fn check_len_reports_both_sizes() {
        assert!(check_len("series 0", 3, 3).is_ok());
        let err = check_len("series 1", 3, 2).unwrap_err();
        assert!(matches!(
            err,
            PlotError::DimensionMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
        assert!(err.to_string().contains("series 1"));
    }

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert!(check_finite("values", &[1.0, -2.5, 0.0]).is_ok());
        assert!(check_finite("values", &Vec::<f64>::new()).is_ok());
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = check_finite("values", &[1.0, bad]).unwrap_err();
            assert!(matches!(err, PlotError::DegenerateData(_)));
        }
    }

    #[test]
    fn label_attribute_order() {
        let style = resolve_style(1).unwrap();
        let text = label(10.0, 20.5, "#FFFFFF", 14, style, "a < b");
        assert_eq!(
            text.render(),
            "<text x=\"10\" y=\"20.5\" fill=\"#FFFFFF\" font-size=\"14\" font-weight=\"400\">a &lt; b</text>\n"
        );
        let anchored = anchored_label((1.0, 2.0), "#000000", 12, TextAnchor::End, style, "x");
        assert_eq!(anchored.get("text-anchor"), Some("end"));
    }

    #[test]
    fn grid_line_markup() {
        let line = grid_line(Point::new(0.0, 1.0), Point::new(2.0, 3.0), "#2D3130");
        assert_eq!(
            line.render(),
            "<line x1=\"0\" y1=\"1\" x2=\"2\" y2=\"3\" stroke=\"#2D3130\" stroke-width=\"1\"/>\n"
        );
    }

    #[test]
    fn wrong_params_lists_the_family() {
        let style = resolve_style(40).unwrap();
        let err = wrong_params(ChartKind::Pie, style);
        let PlotError::InvalidStyle {
            requested,
            available,
        } = err
        else {
            panic!("expected InvalidStyle");
        };
        assert_eq!(requested, "40");
        assert_eq!(available, "40, 41, 42");
    }
}

mod document_tests {
    use super::*;

    fn every_chart() -> Vec<Document> {
        let area = AreaData::new(
            "Area",
            vec![1.0, 2.0, 3.0],
            vec![vec![1.0, 2.0, 3.0], vec![2.0, 1.0, 2.0], vec![1.0, 1.0, 1.0]],
        )
        .with_labels(["a", "b", "c"]);
        let bars = BarData::new("Bars", ["Q1", "Q2"], vec![vec![1.0, 2.0], vec![3.0, 4.0]])
            .with_labels(["a", "b"]);
        let line = LineData::new("Line", vec![1.0, 2.0], vec![vec![1.0, 3.0]]).with_labels(["a"]);
        let bubble = BubbleData::new("Bubble", vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]);
        let radial = RadarBubbleData::new("Radial", vec![0.0, 90.0], vec![20.0, 80.0], vec![1.0, 2.0]);
        let pie = PieData::new("Pie", vec![25.0, 75.0], ["a", "b"]);
        let radar = RadarData::new("Radar", vec![vec![50.0; 8]]).with_labels(["a"]);
        let tiles = &BuiltinTiles;

        let mut docs = Vec::new();
        for style in [AreaStyle::Solid, AreaStyle::Gradient, AreaStyle::Pattern, AreaStyle::TwoPatterns] {
            docs.push(AreaChart::new(style).render(&area, tiles).unwrap());
        }
        docs.push(BarChart::new(BarStyle::Pattern3, Theme::Brand).render(&bars, tiles).unwrap());
        docs.push(ColumnChart::new(BarStyle::Pattern1, Theme::White).render(&bars, tiles).unwrap());
        docs.push(LineChart::new(LineStyle::Shapes, LineTheme::White).render(&line, tiles).unwrap());
        docs.push(BubbleChart::new(Theme::Black).render(&bubble, tiles).unwrap());
        docs.push(RadarBubbleChart::default().render(&radial, tiles).unwrap());
        docs.push(PieChart::default().render(&pie, tiles).unwrap());
        docs.push(RadarChart::default().render(&radar, tiles).unwrap());
        docs
    }

    #[test]
    fn rendering_is_deterministic() {
        let first: Vec<String> = every_chart().iter().map(Document::render).collect();
        let second: Vec<String> = every_chart().iter().map(Document::render).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn every_reference_is_defined() {
        for doc in every_chart() {
            assert!(doc.dangling_references().is_empty(), "{:?}", doc.dangling_references());
        }
    }

    #[test]
    fn kinds_match_renderers() {
        assert_eq!(AreaChart::default().kind(), ChartKind::Area);
        assert_eq!(ColumnChart::default().kind(), ChartKind::Column);
        assert_eq!(RadarBubbleChart::default().kind(), ChartKind::RadarBubble);
        assert_eq!(PieChart::default().kind(), ChartKind::Pie);
    }
}
