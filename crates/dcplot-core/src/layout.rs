// File: crates/dcplot-core/src/layout.rs
// Summary: Maps normalized samples into image pixels and places axis tick labels.
// Notes:
// - Pixel y grows downward; data y = 0 sits on the bottom edge of the drawing rect.
// - Tick anchors are positions before text centering. The renderer measures each
//   label and shifts it; see `Tick` for the expected offsets.

use crate::error::{PlotError, Result};
use crate::geometry::{PointF, RectF};
use crate::grid::tick_fractions;
use crate::series::{Mode, Sample};
use crate::snapshot::DateRange;
use crate::types::SECONDS_PER_HOUR;

/// Long date form used on the x axis, e.g. "Mon Jan 1 2024".
pub const X_LABEL_FORMAT: &str = "%a %b %-d %Y";

/// Plot region as fractions of the image size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawingArea {
    pub origin: (f32, f32),
    pub size: (f32, f32),
}

impl Default for DrawingArea {
    /// 10% margin on every side.
    fn default() -> Self {
        Self { origin: (0.1, 0.1), size: (0.8, 0.8) }
    }
}

/// A label and the point it hangs off.
///
/// X ticks: `anchor` is on the bottom edge of the drawing rect; center the text
/// horizontally and drop it by 1.5 text heights. Y ticks: `anchor` is on the
/// left edge; right-align the text against it and drop it by half a text height.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub label: String,
    pub anchor: PointF,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub area: DrawingArea,
}

impl ChartLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, area: DrawingArea::default() }
    }

    pub fn with_area(mut self, area: DrawingArea) -> Self {
        self.area = area;
        self
    }

    fn w(&self) -> f64 { self.width as f64 }
    fn h(&self) -> f64 { self.height as f64 }

    /// Affine map from [0,1]x[0,1] into the drawing rect, y flipped.
    pub fn to_pixel(&self, sample: Sample) -> PointF {
        let (ox, oy) = (self.area.origin.0 as f64, self.area.origin.1 as f64);
        let (sx, sy) = (self.area.size.0 as f64, self.area.size.1 as f64);
        let px = ox * self.w() + sample.x * sx * self.w();
        let py = (oy + sy) * self.h() - sample.y * sy * self.h();
        PointF::new(px as f32, py as f32)
    }

    pub fn drawing_rect(&self) -> RectF {
        let (ox, oy) = self.area.origin;
        let (sx, sy) = self.area.size;
        let (w, h) = (self.width as f32, self.height as f32);
        RectF::from_ltwh(ox * w, oy * h, sx * w, sy * h)
    }

    /// Date labels along the bottom edge.
    ///
    /// At most one label per plotted day; `count + 1` labels including both ends.
    pub fn x_ticks(&self, range: DateRange, mode: Mode, requested: u32) -> Result<Vec<Tick>> {
        if requested == 0 {
            return Err(PlotError::InvalidLabelCount { axis: "x" });
        }
        let offset = mode.day_offset();
        let span = range.span_days() - offset;
        if span <= 0 {
            return Err(PlotError::DegenerateRange {
                start: range.start,
                end: range.end,
                days: range.span_days(),
                mode,
            });
        }
        let count = (requested as i64).min(span);

        let bottom = self.drawing_rect().bottom;
        let ticks = tick_fractions(count as u32)
            .into_iter()
            .enumerate()
            .map(|(i, frac)| {
                // Integer division: labels land on whole days, biased toward the start.
                let day = span * i as i64 / count + offset;
                let date = range.date_at(day as u64);
                let x = (self.area.origin.0 + self.area.size.0 * frac) * self.width as f32;
                Tick { label: date.format(X_LABEL_FORMAT).to_string(), anchor: PointF::new(x, bottom) }
            })
            .collect();
        Ok(ticks)
    }

    /// Hour labels along the left edge, from 0 to `y_max`.
    pub fn y_ticks(&self, y_max: f64, requested: u32) -> Result<Vec<Tick>> {
        if requested == 0 {
            return Err(PlotError::InvalidLabelCount { axis: "y" });
        }
        let left = self.drawing_rect().left;
        let ticks = tick_fractions(requested)
            .into_iter()
            .enumerate()
            .map(|(i, frac)| {
                let hours = (y_max * i as f64 / requested as f64 / SECONDS_PER_HOUR).round();
                let y = (self.area.origin.1 + self.area.size.1 - self.area.size.1 * frac) * self.height as f32;
                Tick { label: format!("{}h", hours as i64), anchor: PointF::new(left, y) }
            })
            .collect();
        Ok(ticks)
    }

    /// Top-center point for the chart title (center horizontally on it).
    pub fn title_anchor(&self) -> PointF {
        PointF::new(0.5 * self.width as f32, 0.05 * self.height as f32)
    }
}
