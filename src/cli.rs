use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::chart::ChartKind;
use crate::svg::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wisent-plots")]
#[command(author, version, about = "Render design-system charts to SVG documents")]
#[command(long_about = "Renders the charts described in a TOML or JSON manifest to SVG files.\n\n\
    Exit codes:\n  \
    0 - Every chart was written\n  \
    1 - At least one chart failed to render or write\n  \
    2 - Manifest, style or usage error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every chart of a manifest
    Render(RenderArgs),

    /// List the built-in styles
    Styles(StylesArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Manifest file (.toml or .json)
    pub manifest: PathBuf,

    /// Output directory (overrides the manifest's `output_dir`)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Pattern tile directory (overrides the manifest's `assets_dir`)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Output format [possible values: svg, png]
    #[arg(short, long, default_value = "svg")]
    pub format: OutputFormat,

    /// Render only the named charts (can be specified multiple times)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct StylesArgs {
    /// Only list styles usable by this chart kind
    #[arg(short, long)]
    pub kind: Option<ChartKind>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
