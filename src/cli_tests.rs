use std::path::PathBuf;

use super::*;

#[test]
fn cli_render_defaults() {
    let cli = Cli::parse_from(["wisent-plots", "render", "charts.toml"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.manifest, PathBuf::from("charts.toml"));
            assert_eq!(args.format, OutputFormat::Svg);
            assert!(args.output_dir.is_none());
            assert!(args.assets.is_none());
            assert!(args.only.is_empty());
        }
        Commands::Styles(_) => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_with_overrides() {
    let cli = Cli::parse_from([
        "wisent-plots",
        "render",
        "charts.json",
        "-o",
        "out",
        "--assets",
        "tiles",
        "--only",
        "share,trend",
        "--only",
        "skills",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.output_dir, Some(PathBuf::from("out")));
            assert_eq!(args.assets, Some(PathBuf::from("tiles")));
            assert_eq!(args.only, vec!["share", "trend", "skills"]);
        }
        Commands::Styles(_) => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_format_is_case_insensitive() {
    let cli = Cli::parse_from(["wisent-plots", "render", "c.toml", "--format", "PNG"]);
    match cli.command {
        Commands::Render(args) => assert_eq!(args.format, OutputFormat::Png),
        Commands::Styles(_) => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_rejects_unknown_format() {
    let result = Cli::try_parse_from(["wisent-plots", "render", "c.toml", "--format", "pdf"]);
    assert!(result.is_err());
}

#[test]
fn cli_render_requires_manifest() {
    assert!(Cli::try_parse_from(["wisent-plots", "render"]).is_err());
}

#[test]
fn cli_styles_with_kind() {
    let cli = Cli::parse_from(["wisent-plots", "styles", "--kind", "radar_bubble"]);
    match cli.command {
        Commands::Styles(args) => assert_eq!(args.kind, Some(ChartKind::RadarBubble)),
        Commands::Render(_) => panic!("Expected Styles command"),
    }
}

#[test]
fn cli_styles_rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["wisent-plots", "styles", "--kind", "donut"]).is_err());
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["wisent-plots", "styles", "-vv"]);
    assert_eq!(cli.verbose, 2);
    assert!(!cli.quiet);

    let cli = Cli::parse_from(["wisent-plots", "--quiet", "styles"]);
    assert!(cli.quiet);
}
