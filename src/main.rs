use std::path::{Path, PathBuf};

use clap::Parser;

use wisent_plots::chart::ChartKind;
use wisent_plots::cli::{Cli, Commands, RenderArgs, StylesArgs};
use wisent_plots::config::{FileManifestLoader, Manifest, ManifestLoader};
use wisent_plots::render::{RenderOutcome, output_path, render_all, tile_source, write_document};
use wisent_plots::style::{family_of, list_styles};
use wisent_plots::svg::OutputFormat;
use wisent_plots::{EXIT_CONFIG_ERROR, EXIT_RENDER_FAILED, EXIT_SUCCESS, PlotError, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Styles(args) => run_styles(args),
    };

    std::process::exit(exit_code);
}

fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_render_impl(args: &RenderArgs, cli: &Cli) -> wisent_plots::Result<i32> {
    // 1. Reject formats we cannot write before doing any work
    if args.format != OutputFormat::Svg {
        return Err(PlotError::UnsupportedOutput(args.format.to_string()));
    }

    // 2. Load and narrow the manifest
    let mut manifest = FileManifestLoader::new().load(&args.manifest)?;
    select_charts(&mut manifest, &args.only)?;

    // 3. Resolve styles and data into jobs
    let jobs = manifest.jobs()?;

    // 4. Render in parallel
    let assets = args
        .assets
        .as_deref()
        .or(manifest.settings.assets_dir.as_deref());
    let tiles = tile_source(assets);
    let outcomes = render_all(&jobs, tiles.as_ref());

    // 5. Write documents
    let out_dir = output_dir(args, &manifest);
    let failures = write_outcomes(outcomes, &out_dir, args.format, cli.quiet);

    if !cli.quiet {
        println!(
            "Rendered {} of {} chart(s) into {}",
            jobs.len() - failures,
            jobs.len(),
            out_dir.display()
        );
    }

    if failures > 0 {
        Ok(EXIT_RENDER_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Keep only the charts named by `--only`; every name must exist.
fn select_charts(manifest: &mut Manifest, only: &[String]) -> wisent_plots::Result<()> {
    if only.is_empty() {
        return Ok(());
    }

    let unknown: Vec<&str> = only
        .iter()
        .map(String::as_str)
        .filter(|name| !manifest.charts.iter().any(|c| c.name == *name))
        .collect();
    if !unknown.is_empty() {
        return Err(PlotError::Config(format!(
            "--only names charts not in the manifest: {}",
            unknown.join(", ")
        )));
    }

    manifest.charts.retain(|c| only.contains(&c.name));
    Ok(())
}

fn output_dir(args: &RenderArgs, manifest: &Manifest) -> PathBuf {
    args.output_dir
        .clone()
        .or_else(|| manifest.settings.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write every successful outcome and report failures. Returns the failure count.
fn write_outcomes(
    outcomes: Vec<RenderOutcome>,
    out_dir: &Path,
    format: OutputFormat,
    quiet: bool,
) -> usize {
    let mut failures = 0;
    for outcome in outcomes {
        let path = output_path(out_dir, &outcome.name, format);
        let written = outcome
            .result
            .and_then(|doc| write_document(&doc, &path, format));
        match written {
            Ok(()) => {
                if !quiet {
                    println!("{:<12} {}", outcome.kind.name(), path.display());
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("Error: chart '{}' [{}]: {e}", outcome.name, e.error_type());
            }
        }
    }
    failures
}

fn run_styles(args: &StylesArgs) -> i32 {
    print!("{}", format_styles(args.kind));
    EXIT_SUCCESS
}

fn format_styles(kind: Option<ChartKind>) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    for record in list_styles(kind.map(ChartKind::style_family)) {
        let _ = writeln!(
            output,
            "{:>3}  {:<11} {}",
            record.id,
            family_of(record.id),
            record.name
        );
    }
    output
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
