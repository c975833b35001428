// File: crates/dcplot-core/src/grid.rs
// Summary: Tick spacing helpers.

/// `count + 1` evenly spaced fractions from 0.0 to 1.0 inclusive.
pub fn tick_fractions(count: u32) -> Vec<f32> {
    if count == 0 { return vec![0.0]; }
    (0..=count).map(|i| i as f32 / count as f32).collect()
}
