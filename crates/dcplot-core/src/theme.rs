// File: crates/dcplot-core/src/theme.rs
// Summary: Colors for the non-data parts of the chart (background, frame, labels).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub label: skia::Color,
    pub title: skia::Color,
}

impl Theme {
    /// White page, black frame and text.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::WHITE,
            frame: skia::Color::BLACK,
            label: skia::Color::BLACK,
            title: skia::Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::paper() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
