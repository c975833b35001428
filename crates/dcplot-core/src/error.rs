// File: crates/dcplot-core/src/error.rs
// Summary: Error taxonomy for the plotting pipeline (configuration, range, I/O).

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::series::Mode;

pub type Result<T, E = PlotError> = std::result::Result<T, E>;

/// Coarse classification used by callers to pick an exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Range,
    Io,
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid starting date '{0}' (expected yyyy-MM-dd)")]
    InvalidStartDate(String),

    #[error("name mapping file not found: {}", .0.display())]
    MissingNames(PathBuf),

    #[error("{axis} label count must be positive")]
    InvalidLabelCount { axis: &'static str },

    #[error("image size must be positive, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("starting date {start} is after {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("{days} day(s) between {start} and {end} is too short for {mode} mode")]
    DegenerateRange {
        start: NaiveDate,
        end: NaiveDate,
        days: i64,
        mode: Mode,
    },

    #[error("snapshot for {date} is out of order or outside the date range")]
    DateOutOfOrder { date: NaiveDate },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render failed: {0}")]
    Render(String),
}

impl PlotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlotError::InvalidStartDate(_)
            | PlotError::MissingNames(_)
            | PlotError::InvalidLabelCount { .. }
            | PlotError::InvalidImageSize { .. } => ErrorKind::Config,
            PlotError::InvertedRange { .. }
            | PlotError::DegenerateRange { .. }
            | PlotError::DateOutOfOrder { .. } => ErrorKind::Range,
            PlotError::Io { .. } | PlotError::Render(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::Io { path: path.into(), source }
    }
}
