// File: crates/dcplot-core/src/plot.rs
// Summary: End-to-end pipeline: source directory -> series -> chart -> PNG file.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::chart::{Chart, RenderOptions};
use crate::error::Result;
use crate::series::{Mode, SeriesBuilder, SeriesSet};
use crate::snapshot::{DateRange, SnapshotStore};

/// One invocation's worth of settings.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub source_dir: PathBuf,
    pub output: PathBuf,
    pub start: NaiveDate,
    /// Last day of the range, normally the local date.
    pub today: NaiveDate,
    pub mode: Mode,
    pub render: RenderOptions,
}

impl PlotConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output: impl Into<PathBuf>, start: NaiveDate, today: NaiveDate) -> Self {
        Self {
            source_dir: source_dir.into(),
            output: output.into(),
            start,
            today,
            mode: Mode::Delta,
            render: RenderOptions::default(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Sweep every day of `range` through a builder, one snapshot at a time.
pub fn build_series(store: &SnapshotStore, range: DateRange, mode: Mode) -> Result<SeriesSet> {
    let mut builder = SeriesBuilder::new(range, mode)?;
    let mut present = 0usize;
    for day in store.days(range) {
        let (date, snapshot) = day?;
        match snapshot {
            Some(snapshot) => {
                present += 1;
                builder.push(snapshot)?;
            }
            None => debug!(%date, "no stats file"),
        }
    }
    let set = builder.finish();
    info!(days = range.span_days() + 1, present, entities = set.len(), y_max = set.y_max, "built series");
    Ok(set)
}

/// Load, build and lay out a chart without touching the output path.
pub fn prepare(config: &PlotConfig) -> Result<Chart> {
    let store = SnapshotStore::open(&config.source_dir)?;
    config.render.validate()?;
    let range = DateRange::new(config.start, config.today)?;
    let names = store.names()?;
    let series = build_series(&store, range, config.mode)?;
    Ok(Chart::new(range, series, &names))
}

/// Run the whole pipeline and write the PNG. Either the full image is written or nothing is.
pub fn plot(config: &PlotConfig) -> Result<Chart> {
    let chart = prepare(config)?;
    chart.render_to_png(&config.render, &config.output)?;
    info!(output = %config.output.display(), "wrote chart");
    Ok(chart)
}
