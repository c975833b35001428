// File: crates/dcplot-core/src/snapshot.rs
// Summary: Loads the id -> name mapping and the per-day cumulative stats files from a source directory.
// Layout:
// - <dir>/trans.json               { "<id>": "<name>", ... }   required
// - <dir>/stats_<yyyy-MM-dd>.json  { "<id>": <count>, ... }    optional, one per day

use std::collections::BTreeMap;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{PlotError, Result};
use crate::types::EntityId;

pub const NAMES_FILE: &str = "trans.json";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` starting date.
pub fn parse_start_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| PlotError::InvalidStartDate(s.to_string()))
}

/// Inclusive calendar range `[start, end]`; `end` is normally today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(PlotError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whole days from `start` to `end`.
    pub fn span_days(&self) -> i64 {
        self.days_to(self.end)
    }

    /// Whole days from `start` to `date` (negative before start).
    pub fn days_to(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every date of the range in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// `start + days`, saturating at the calendar limits.
    pub fn date_at(&self, days: u64) -> NaiveDate {
        self.start.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
    }
}

/// One day's cumulative counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub values: BTreeMap<EntityId, i64>,
}

/// Read-only view over a directory of stats files.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open `dir`; the name mapping must exist or the store is unusable.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let names = dir.join(NAMES_FILE);
        if !names.is_file() {
            return Err(PlotError::MissingNames(names));
        }
        Ok(Self { dir })
    }

    pub fn snapshot_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("stats_{}.json", date.format(DATE_FORMAT)))
    }

    /// Id -> display name. Non-string names read as empty.
    pub fn names(&self) -> Result<BTreeMap<EntityId, String>> {
        let path = self.dir.join(NAMES_FILE);
        let text = std::fs::read_to_string(&path).map_err(|e| PlotError::io(&path, e))?;
        let object = parse_object(&path, &text);

        let mut names = BTreeMap::new();
        for (key, value) in object {
            let Some(id) = parse_id(&path, &key) else { continue };
            names.insert(id, value.as_str().unwrap_or_default().to_string());
        }
        debug!(path = %path.display(), entries = names.len(), "loaded name mapping");
        Ok(names)
    }

    /// Snapshot for `date`, or `None` when no file exists for that day.
    pub fn load(&self, date: NaiveDate) -> Result<Option<Snapshot>> {
        let path = self.snapshot_path(date);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PlotError::io(&path, e)),
        };

        let mut values = BTreeMap::new();
        for (key, value) in parse_object(&path, &text) {
            let Some(id) = parse_id(&path, &key) else { continue };
            values.insert(id, count_of(&path, &key, &value));
        }
        debug!(%date, entities = values.len(), "loaded snapshot");
        Ok(Some(Snapshot { date, values }))
    }

    /// Walk `range` in order, loading each day on demand.
    pub fn days(&self, range: DateRange) -> impl Iterator<Item = Result<(NaiveDate, Option<Snapshot>)>> + '_ {
        range.dates().map(move |date| self.load(date).map(|s| (date, s)))
    }
}

/// Malformed or non-object JSON reads as an empty object.
fn parse_object(path: &Path, text: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            warn!(path = %path.display(), "expected a JSON object; treating as empty");
            Map::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed JSON; treating as empty");
            Map::new()
        }
    }
}

fn parse_id(path: &Path, key: &str) -> Option<EntityId> {
    match key.parse::<EntityId>() {
        Ok(id) => Some(id),
        Err(_) => {
            warn!(path = %path.display(), key, "skipping non-numeric entity id");
            None
        }
    }
}

/// Counters are non-negative: integers are taken as-is (saturating at
/// `i64::MAX`), floats truncate, negatives and anything else count as zero.
fn count_of(path: &Path, key: &str, value: &Value) -> i64 {
    let count = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    };
    if count < 0 {
        warn!(path = %path.display(), key, count, "negative counter; treating as zero");
        return 0;
    }
    count
}
