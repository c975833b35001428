// File: crates/dcplot-core/src/types.rs
// Summary: Shared types and constants (ids, colors, entity metadata, default sizes).

use std::fmt;
use std::str::FromStr;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Seconds in a day; the fixed scale ceiling for day-over-day deltas.
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Seconds in an hour; y tick labels are always expressed in hours.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Opaque numeric id of a tracked entity (task, activity, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(EntityId)
    }
}

/// 8-bit RGB triple, independent of the rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Display information for one entity. `color` is derived from the id, never read from input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityMeta {
    pub id: EntityId,
    pub name: String,
    pub color: Rgb,
}
