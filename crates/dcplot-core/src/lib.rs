// File: crates/dcplot-core/src/lib.rs
// Summary: Core library entry point; daily stats -> normalized series -> PNG chart.

pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod plot;
pub mod series;
pub mod snapshot;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Chart, RenderOptions};
pub use color::color_of;
pub use error::{ErrorKind, PlotError, Result};
pub use layout::{ChartLayout, DrawingArea, Tick};
pub use plot::{build_series, plot, prepare, PlotConfig};
pub use series::{Mode, Sample, Series, SeriesBuilder, SeriesSet};
pub use snapshot::{parse_start_date, DateRange, Snapshot, SnapshotStore};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{EntityId, EntityMeta, Rgb};
