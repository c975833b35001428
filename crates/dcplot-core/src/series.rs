// File: crates/dcplot-core/src/series.rs
// Summary: Turns dated cumulative snapshots into per-entity sample series, normalized to [0, 1].
// Notes:
// - Two passes: samples are collected with raw y values first, and the y scale
//   is only decided in `finish` once every entity has been seen.
// - Only the previous day's values are retained between pushes.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::error::{PlotError, Result};
use crate::snapshot::{DateRange, Snapshot};
use crate::types::{EntityId, SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// Headroom above the largest cumulative value.
const CUMULATIVE_HEADROOM: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Total-to-date counter per entity.
    Cumulative,
    /// Day-over-day increment per entity.
    Delta,
}

impl Mode {
    /// Days dropped from the front of the range: delta mode has no value for the first day.
    pub const fn day_offset(self) -> i64 {
        match self {
            Mode::Cumulative => 0,
            Mode::Delta => 1,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Mode::Cumulative => "Time total",
            Mode::Delta => "Time per Day",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Cumulative => "cumulative",
            Mode::Delta => "delta",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Chronological samples of one entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub id: EntityId,
    pub samples: Vec<Sample>,
}

/// Normalized output of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSet {
    pub mode: Mode,
    /// Raw value that maps to y = 1.0.
    pub y_max: f64,
    /// Ordered by id; never holds an empty series.
    pub series: BTreeMap<EntityId, Series>,
}

impl SeriesSet {
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    pub fn get(&self, id: EntityId) -> Option<&Series> {
        self.series.get(&id)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Forward sweep over snapshots in date order.
pub struct SeriesBuilder {
    range: DateRange,
    mode: Mode,
    x_span: f64,
    last_date: Option<NaiveDate>,
    previous: BTreeMap<EntityId, i64>,
    raw: BTreeMap<EntityId, Vec<Sample>>,
}

impl SeriesBuilder {
    /// Fails when the range is too short to normalize x for `mode`.
    pub fn new(range: DateRange, mode: Mode) -> Result<Self> {
        let span = range.span_days() - mode.day_offset();
        if span <= 0 {
            return Err(PlotError::DegenerateRange {
                start: range.start,
                end: range.end,
                days: range.span_days(),
                mode,
            });
        }
        Ok(Self {
            range,
            mode,
            x_span: span as f64,
            last_date: None,
            previous: BTreeMap::new(),
            raw: BTreeMap::new(),
        })
    }

    /// Add the next present snapshot. Dates must be strictly ascending and inside the range.
    pub fn push(&mut self, snapshot: Snapshot) -> Result<()> {
        let date = snapshot.date;
        if !self.range.contains(date) || self.last_date.is_some_and(|last| date <= last) {
            return Err(PlotError::DateOutOfOrder { date });
        }
        self.last_date = Some(date);

        let day = self.range.days_to(date);
        match self.mode {
            Mode::Cumulative => {
                let x = day as f64 / self.x_span;
                for (&id, &count) in &snapshot.values {
                    self.sample(id, x, count as f64);
                }
            }
            Mode::Delta => {
                if day > 0 {
                    let x = (day - 1) as f64 / self.x_span;
                    for (&id, &count) in &snapshot.values {
                        // An entity without a baseline contributes its raw counter for the day.
                        let delta = match self.previous.get(&id) {
                            Some(&prev) => count.saturating_sub(prev),
                            None => count,
                        };
                        self.sample(id, x, delta as f64);
                    }
                }
                // The baseline is replaced, not merged: an entity missing today loses
                // its baseline and its next appearance is counted from zero. This may
                // not be what users expect but it is how existing charts were produced.
                self.previous = snapshot.values;
            }
        }
        Ok(())
    }

    fn sample(&mut self, id: EntityId, x: f64, y: f64) {
        self.raw.entry(id).or_default().push(Sample::new(x, y));
    }

    /// Decide the y scale over all samples, then divide.
    pub fn finish(self) -> SeriesSet {
        let y_max = match self.mode {
            Mode::Delta => SECONDS_PER_DAY,
            Mode::Cumulative => {
                let peak = self
                    .raw
                    .values()
                    .flatten()
                    .map(|s| s.y)
                    .fold(0.0f64, f64::max);
                if peak > 0.0 {
                    peak * CUMULATIVE_HEADROOM
                } else {
                    SECONDS_PER_HOUR
                }
            }
        };

        let series = self
            .raw
            .into_iter()
            .filter(|(_, samples)| !samples.is_empty())
            .map(|(id, samples)| {
                let samples = samples
                    .into_iter()
                    .map(|s| Sample::new(s.x, s.y / y_max))
                    .collect();
                (id, Series { id, samples })
            })
            .collect();

        SeriesSet { mode: self.mode, y_max, series }
    }
}
