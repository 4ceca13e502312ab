//! Tests for the line chart.

use super::*;
use crate::pattern::BuiltinTiles;
use crate::svg::{SvgElement, Tag};

fn sample() -> LineData {
    LineData::new(
        "Line Chart",
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![
            vec![10.0, 20.0, 15.0, 25.0, 30.0],
            vec![5.0, 10.0, 20.0, 15.0, 10.0],
        ],
    )
    .with_labels(["One", "Two"])
}

fn render(style: LineStyle, theme: LineTheme, data: &LineData) -> Document {
    LineChart::new(style, theme).render(data, &BuiltinTiles).unwrap()
}

mod grid_tests {
    use super::*;

    #[test]
    fn dashed_verticals_and_solid_horizontals() {
        let doc = render(LineStyle::Solid, LineTheme::Dark, &sample());
        let lines: Vec<_> = doc.body_elements(&Tag::Line).collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(
            lines.iter().filter(|l| l.get("stroke-dasharray").is_some()).count(),
            9
        );
        let last = lines[13];
        assert_eq!(
            last.render(),
            "<line x1=\"32\" y1=\"534\" x2=\"970\" y2=\"534\" stroke=\"#2D3130\" stroke-width=\"1\"/>\n"
        );
    }

    #[test]
    fn x_labels_are_start_anchored() {
        let doc = render(LineStyle::Solid, LineTheme::Dark, &sample());
        let labels: Vec<_> = doc
            .body_elements(&Tag::Text)
            .filter(|t| t.get("text-anchor") == Some("start"))
            .collect();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0].text_content(), "01");
        assert_eq!(labels[8].text_content(), "09");
        assert_eq!(labels[8].get("x"), Some("968"));
        assert_eq!(labels[0].get("y"), Some("547"));
    }
}

mod series_tests {
    use super::*;

    #[test]
    fn path_scales_against_global_min_max() {
        let doc = render(LineStyle::Solid, LineTheme::Dark, &sample());
        let paths: Vec<_> = doc.body_elements(&Tag::Path).collect();
        assert_eq!(paths.len(), 2);
        let d = paths[0].get("d").unwrap();
        assert!(d.starts_with("M 32,438 L 266.5,266"), "{d}");
        let keys: Vec<&str> = paths[0].attrs().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["d", "stroke", "stroke-width", "fill", "stroke-linecap", "stroke-linejoin"]
        );
        assert_eq!(paths[0].get("stroke"), Some("#C5FFC8"));
        assert_eq!(paths[1].get("stroke"), Some("#FA5A46"));
        assert_eq!(paths[0].get("stroke-width"), Some("2"));
    }

    #[test]
    fn flat_series_sits_on_the_baseline() {
        let data = LineData::new("Flat", vec![1.0, 2.0], vec![vec![5.0, 5.0]]);
        let doc = render(LineStyle::Solid, LineTheme::Dark, &data);
        let path = doc.body_elements(&Tag::Path).next().unwrap();
        assert_eq!(path.get("d"), Some("M 32,524 L 970,524"));
    }

    #[test]
    fn line_width_override() {
        let mut data = sample();
        data.line_width = Some(3.5);
        let doc = render(LineStyle::Solid, LineTheme::White, &data);
        let path = doc.body_elements(&Tag::Path).next().unwrap();
        assert_eq!(path.get("stroke-width"), Some("3.5"));
        assert!(doc.render().contains("fill=\"#FFFFFF\" rx=\"20\""));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let data = LineData::new("Bad", vec![1.0, 2.0], vec![vec![1.0]]);
        let err = LineChart::default().render(&data, &BuiltinTiles).unwrap_err();
        assert!(matches!(err, PlotError::DimensionMismatch { .. }));
    }
}

mod color_tests {
    use super::*;

    #[test]
    fn strict_colors_must_cover_every_series() {
        let data = sample().with_colors(["#111111"], true);
        let err = LineChart::default().render(&data, &BuiltinTiles).unwrap_err();
        assert!(matches!(
            err,
            PlotError::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn lenient_colors_cycle() {
        let data = sample().with_colors(["#111111"], false);
        let doc = render(LineStyle::Solid, LineTheme::Dark, &data);
        assert!(doc
            .body_elements(&Tag::Path)
            .all(|p| p.get("stroke") == Some("#111111")));
        let swatch = doc.body_elements(&Tag::Rect).nth(1).unwrap();
        assert_eq!(swatch.get("fill"), Some("#111111"));
    }

    #[test]
    fn empty_lenient_colors_use_palette() {
        let data = sample().with_colors(Vec::<String>::new(), false);
        let doc = render(LineStyle::Solid, LineTheme::Dark, &data);
        let path = doc.body_elements(&Tag::Path).next().unwrap();
        assert_eq!(path.get("stroke"), Some("#C5FFC8"));
    }
}

mod marker_tests {
    use super::*;

    #[test]
    fn circle_markers_follow_each_line() {
        let doc = render(LineStyle::Markers, LineTheme::Dark, &sample());
        let circles: Vec<_> = doc.body_elements(&Tag::Circle).collect();
        assert_eq!(circles.len(), 10);
        assert_eq!(
            circles[0].render(),
            "<circle cx=\"32\" cy=\"438\" r=\"5.5\" fill=\"#C5FFC8\"/>\n"
        );

        // Markers come right after their own path.
        let body = doc.body();
        let first_path = body.iter().position(|e| e.tag() == &Tag::Path).unwrap();
        assert_eq!(body[first_path + 1].tag(), &Tag::Circle);
    }

    #[test]
    fn shape_cycle_is_independent_of_color() {
        let data = LineData::new(
            "Shapes",
            vec![1.0],
            vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
        );
        let doc = render(LineStyle::Shapes, LineTheme::Dark, &data);
        let markers: Vec<_> = doc
            .body()
            .iter()
            .filter(|e| e.tag() != &Tag::Path && e.tag() != &Tag::Line && e.tag() != &Tag::Text)
            .collect();
        let tags: Vec<&Tag> = markers.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, [&Tag::Circle, &Tag::Polygon, &Tag::Rect, &Tag::Polygon]);

        assert_eq!(
            markers[2].render(),
            "<rect x=\"495.5\" y=\"231.8333\" width=\"11\" height=\"11\" fill=\"#FF8C00\" rx=\"2\" ry=\"2\"/>\n"
        );
        assert_eq!(
            markers[3].get("points"),
            Some("501,88.5 506.5,94 501,99.5 495.5,94")
        );
    }

    #[test]
    fn triangle_marker_points() {
        let data = LineData::new("Tri", vec![1.0, 2.0], vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        let doc = render(LineStyle::Shapes, LineTheme::Dark, &data);
        let triangle = doc.body_elements(&Tag::Polygon).next().unwrap();
        assert_eq!(
            triangle.get("points"),
            Some("32,517.6176 37.5,527.1436 26.5,527.1436")
        );
    }
}
