// File: crates/dcplot-core/src/color.rs
// Summary: Deterministic id -> RGB mapping used for series strokes and inline names.

use crate::types::{EntityId, Rgb};

/// Ids are treated as drawn from `[0, ID_SPACE)`.
const ID_SPACE: u64 = 1_000_000_000_000_000_000;
const CHANNELS: u64 = 256;
/// Width of one cell when the id space is cut into a 256x256x256 cube.
const CELL: u64 = ID_SPACE / (CHANNELS * CHANNELS * CHANNELS) + 1;

/// Map an entity id onto a color by slicing the id space into a 256^3 cube.
///
/// Pure and stable across runs. This is a lossy hash, not a palette: ids that
/// fall in the same cell share a color, and ids close to each other get
/// near-identical colors. Ids at or above 10^18 wrap around before slicing.
pub fn color_of(id: EntityId) -> Rgb {
    let n = (id.0 % ID_SPACE) / CELL;
    let r = n / (CHANNELS * CHANNELS);
    let g = (n % (CHANNELS * CHANNELS)) / CHANNELS;
    let b = n % CHANNELS;
    Rgb::new(r as u8, g as u8, b as u8)
}
