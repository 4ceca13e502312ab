use std::path::PathBuf;

use wisent_plots::chart::ChartKind;
use wisent_plots::cli::RenderArgs;
use wisent_plots::config::{ChartEntry, Manifest, Settings};
use wisent_plots::svg::OutputFormat;
use wisent_plots::{EXIT_CONFIG_ERROR, EXIT_RENDER_FAILED, EXIT_SUCCESS};

use crate::{format_styles, output_dir, select_charts};

fn manifest(names: &[&str]) -> Manifest {
    Manifest {
        charts: names
            .iter()
            .map(|n| ChartEntry::new(ChartKind::Pie, *n))
            .collect(),
        ..Default::default()
    }
}

fn render_args(output_dir: Option<&str>) -> RenderArgs {
    RenderArgs {
        manifest: PathBuf::from("charts.toml"),
        output_dir: output_dir.map(PathBuf::from),
        assets: None,
        format: OutputFormat::Svg,
        only: Vec::new(),
    }
}

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_RENDER_FAILED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn select_charts_without_filter_keeps_everything() {
    let mut m = manifest(&["a", "b"]);
    select_charts(&mut m, &[]).unwrap();
    assert_eq!(m.charts.len(), 2);
}

#[test]
fn select_charts_keeps_manifest_order() {
    let mut m = manifest(&["a", "b", "c"]);
    select_charts(&mut m, &["c".to_string(), "a".to_string()]).unwrap();
    let names: Vec<&str> = m.charts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["a", "c"]);
}

#[test]
fn select_charts_rejects_unknown_names() {
    let mut m = manifest(&["a"]);
    let err = select_charts(&mut m, &["a".to_string(), "zzz".to_string()]).unwrap_err();
    assert!(err.is_config_error());
    assert!(err.to_string().contains("zzz"));
    assert_eq!(m.charts.len(), 1);
}

#[test]
fn output_dir_prefers_cli_then_manifest() {
    let mut m = manifest(&["a"]);
    m.settings = Settings {
        assets_dir: None,
        output_dir: Some(PathBuf::from("/from/manifest")),
    };
    assert_eq!(output_dir(&render_args(Some("cli")), &m), PathBuf::from("cli"));
    assert_eq!(
        output_dir(&render_args(None), &m),
        PathBuf::from("/from/manifest")
    );
    assert_eq!(
        output_dir(&render_args(None), &manifest(&["a"])),
        PathBuf::from(".")
    );
}

#[test]
fn format_styles_filters_by_kind() {
    let pies = format_styles(Some(ChartKind::Pie));
    let ids: Vec<&str> = pies
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(ids, ["40", "41", "42"]);
    assert!(pies.contains("Pie Chart - White Theme"));

    let columns = format_styles(Some(ChartKind::Column));
    assert_eq!(columns.lines().count(), 3);
    assert!(columns.contains("bar/column"));
}

#[test]
fn format_styles_lists_everything_without_kind() {
    assert_eq!(format_styles(None).lines().count(), 23);
}
