// File: crates/dcplot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering using Skia CPU raster surfaces.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::color::color_of;
use crate::error::{PlotError, Result};
use crate::layout::{ChartLayout, DrawingArea};
use crate::series::{Series, SeriesSet};
use crate::snapshot::DateRange;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{EntityId, EntityMeta, Rgb, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub area: DrawingArea,
    pub theme: Theme,
    pub x_labels: u32,
    pub y_labels: u32,
    /// Disable to get pixel-stable output independent of installed fonts.
    pub draw_labels: bool,
    pub label_size: f32,
    pub title_size: f32,
    pub stroke_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            area: DrawingArea::default(),
            theme: Theme::default(),
            x_labels: 7,
            y_labels: 6,
            draw_labels: true,
            label_size: 13.0,
            title_size: 26.0,
            stroke_width: 1.0,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(PlotError::InvalidImageSize { width: self.width, height: self.height });
        }
        if self.x_labels == 0 {
            return Err(PlotError::InvalidLabelCount { axis: "x" });
        }
        if self.y_labels == 0 {
            return Err(PlotError::InvalidLabelCount { axis: "y" });
        }
        Ok(())
    }

    pub fn layout(&self) -> ChartLayout {
        ChartLayout::new(self.width, self.height).with_area(self.area)
    }
}

/// Everything needed to paint one image.
pub struct Chart {
    pub range: DateRange,
    pub series: SeriesSet,
    pub entities: BTreeMap<EntityId, EntityMeta>,
}

impl Chart {
    /// Pair each series with its name and derived color. Ids missing from
    /// `names` get an empty name.
    pub fn new(range: DateRange, series: SeriesSet, names: &BTreeMap<EntityId, String>) -> Self {
        let entities = series
            .series
            .keys()
            .map(|&id| {
                let name = names.get(&id).cloned().unwrap_or_default();
                (id, EntityMeta { id, name, color: color_of(id) })
            })
            .collect();
        Self { range, series, entities }
    }

    pub fn meta(&self, id: EntityId) -> Option<&EntityMeta> {
        self.entities.get(&id)
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        opts.validate()?;
        let layout = opts.layout();

        let mut surface = skia::surfaces::raster_n32_premul((opts.width as i32, opts.height as i32))
            .ok_or_else(|| PlotError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        draw_frame(canvas, &layout, opts);

        let shaper = opts.draw_labels.then(TextShaper::new);
        for s in self.series.iter() {
            let meta = self.meta(s.id);
            let color = meta.map(|m| m.color).unwrap_or(Rgb::BLACK);
            draw_line_series(canvas, &layout, opts, s, color);
            if let (Some(shaper), Some(meta)) = (&shaper, meta) {
                draw_inline_name(canvas, shaper, &layout, opts, s, meta);
            }
        }

        if let Some(shaper) = &shaper {
            draw_axes_labels(canvas, shaper, &layout, opts, self)?;
            draw_title(canvas, shaper, &layout, opts, self.series.mode.title());
        }

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| PlotError::Render("encode PNG failed".into()))?;
        debug!(bytes = data.as_bytes().len(), series = self.series.len(), "encoded chart");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`. An existing file is only replaced once the
    /// full image has been written.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| PlotError::io(parent, e))?;

        // Write beside the target, then rename over it so readers never see a partial file.
        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| PlotError::io(parent, e))?;
        tmp.write_all(&bytes).map_err(|e| PlotError::io(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| PlotError::io(path, e.error))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

fn draw_frame(canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions) {
    let r = layout.drawing_rect();
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(opts.theme.frame);
    canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), &paint);
}

fn draw_line_series(canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions, series: &Series, color: Rgb) {
    if series.samples.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let p0 = layout.to_pixel(series.samples[0]);
    path.move_to((p0.x, p0.y));
    for &s in series.samples.iter().skip(1) {
        let p = layout.to_pixel(s);
        path.line_to((p.x, p.y));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.stroke_width);
    stroke.set_color(to_skia(color));

    canvas.draw_path(&path, &stroke);
}

/// Entity name at the first point of its line; serves as the legend.
fn draw_inline_name(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    layout: &ChartLayout,
    opts: &RenderOptions,
    series: &Series,
    meta: &EntityMeta,
) {
    let Some(&first) = series.samples.first() else { return };
    if meta.name.is_empty() {
        return;
    }
    let p = layout.to_pixel(first);
    shaper.draw_baseline(canvas, &meta.name, p.x, p.y, opts.label_size, to_skia(meta.color));
}

fn draw_axes_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    layout: &ChartLayout,
    opts: &RenderOptions,
    chart: &Chart,
) -> Result<()> {
    let size = opts.label_size;
    let color = opts.theme.label;

    for tick in layout.x_ticks(chart.range, chart.series.mode, opts.x_labels)? {
        let (w, h) = shaper.measure(&tick.label, size);
        shaper.draw_baseline(canvas, &tick.label, tick.anchor.x - w / 2.0, tick.anchor.y + 1.5 * h, size, color);
    }
    for tick in layout.y_ticks(chart.series.y_max, opts.y_labels)? {
        let (w, h) = shaper.measure(&tick.label, size);
        shaper.draw_baseline(canvas, &tick.label, tick.anchor.x - w, tick.anchor.y + 0.5 * h, size, color);
    }
    Ok(())
}

fn draw_title(canvas: &skia::Canvas, shaper: &TextShaper, layout: &ChartLayout, opts: &RenderOptions, title: &str) {
    let anchor = layout.title_anchor();
    let (w, _) = shaper.measure(title, opts.title_size);
    shaper.draw_baseline(canvas, title, anchor.x - w / 2.0, anchor.y, opts.title_size, opts.theme.title);
}
