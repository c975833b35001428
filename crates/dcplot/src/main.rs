// File: crates/dcplot/src/main.rs
// Summary: CLI that renders daily time stats from a directory of JSON files into a PNG chart.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use dcplot_core::{parse_start_date, theme, ErrorKind, Mode, PlotConfig, PlotError, RenderOptions};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "dcplot",
    version,
    about = "Renders a PNG with the plotted data of the given stats files."
)]
struct Cli {
    /// Show time total (otherwise shows time per day)
    #[arg(short = 't', long = "total")]
    total: bool,

    /// Starting date in format yyyy-MM-dd
    #[arg(short = 's', long = "start")]
    start: String,

    /// Last day to plot, yyyy-MM-dd (defaults to today)
    #[arg(long)]
    today: Option<String>,

    /// Image width
    #[arg(short = 'm', long = "width", default_value_t = dcplot_core::types::WIDTH)]
    width: u32,

    /// Image height
    #[arg(short = 'n', long = "height", default_value_t = dcplot_core::types::HEIGHT)]
    height: u32,

    /// Number of date labels
    #[arg(short = 'x', long = "x-labels", default_value_t = 7)]
    x_labels: u32,

    /// Number of time labels
    #[arg(short = 'y', long = "y-labels", default_value_t = 6)]
    y_labels: u32,

    /// Color theme (paper, dark)
    #[arg(long, default_value = "paper")]
    theme: String,

    /// Log debug output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Source dir
    dir: PathBuf,

    /// Output image path
    out: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let start = parse_start_date(&cli.start)?;
    let today = match &cli.today {
        Some(s) => NaiveDate::parse_from_str(s.trim(), dcplot_core::snapshot::DATE_FORMAT)
            .with_context(|| format!("invalid --today date '{s}'"))?,
        None => Local::now().date_naive(),
    };
    let theme = theme::find(&cli.theme).with_context(|| format!("unknown theme '{}'", cli.theme))?;

    let render = RenderOptions {
        width: cli.width,
        height: cli.height,
        x_labels: cli.x_labels,
        y_labels: cli.y_labels,
        theme,
        ..RenderOptions::default()
    };
    let mode = if cli.total { Mode::Cumulative } else { Mode::Delta };
    let config = PlotConfig::new(&cli.dir, &cli.out, start, today)
        .with_mode(mode)
        .with_render(render);

    dcplot_core::plot(&config)
        .with_context(|| format!("plotting {} into {}", cli.dir.display(), cli.out.display()))?;
    Ok(())
}

/// 1: bad starting date, 2: missing name mapping, 3: other configuration,
/// 4: unusable date range, 5: i/o or render failure.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<PlotError>() {
        Some(PlotError::InvalidStartDate(_)) => 1,
        Some(PlotError::MissingNames(_)) => 2,
        Some(e) => match e.kind() {
            ErrorKind::Config => 3,
            ErrorKind::Range => 4,
            ErrorKind::Io => 5,
        },
        None => 3,
    }
}
