/// Chart state machine.
///
/// Holds the host's current inputs and the outputs of the last pass. Setters
/// compare the new value against the stored one and only mark work when it
/// actually changed:
///
/// - data-relevant inputs (items, max visible items, palette, Other colour)
///   mark the reducer dirty, which implies a new layout;
/// - everything else (geometry knobs, label styling, bounds) only marks the
///   layout dirty.
///
/// Nothing is recomputed until the host calls [`MultiBarChart::recompute`].
use crate::config::{non_negative, ChartConfig};
use crate::fallback::{FallbackColors, RandomFallback};
use crate::layout::layout;
use crate::model::{BarItem, Color, DisplaySegment, FontRef, Primitive, Size};
use crate::reduce::reduce;

/// Inputs, dirty flags and outputs of one bar chart.
#[derive(Debug)]
pub struct MultiBarChart<F = RandomFallback> {
    items: Vec<BarItem>,
    config: ChartConfig,
    bounds: Size,
    fallback: F,

    segments: Vec<DisplaySegment>,
    primitives: Vec<Primitive>,

    data_dirty: bool,
    layout_dirty: bool,
}

impl MultiBarChart<RandomFallback> {
    /// Empty chart with the default config and an unseeded fallback source.
    pub fn new() -> Self {
        Self::with_fallback(RandomFallback::new())
    }
}

impl Default for MultiBarChart<RandomFallback> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FallbackColors> MultiBarChart<F> {
    /// Empty chart drawing fallback colours from `fallback`.
    pub fn with_fallback(fallback: F) -> Self {
        Self {
            items: Vec::new(),
            config: ChartConfig::default(),
            bounds: Size::default(),
            fallback,
            segments: Vec::new(),
            primitives: Vec::new(),
            data_dirty: false,
            layout_dirty: false,
        }
    }

    // ── Inputs ──────────────────────────────────────────────────────

    pub fn items(&self) -> &[BarItem] {
        &self.items
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Replace the dataset.
    pub fn set_items(&mut self, items: Vec<BarItem>) {
        let unchanged = self.items.len() == items.len()
            && self.items.iter().zip(&items).all(|(a, b)| a.same_as(b));
        if !unchanged {
            self.items = items;
            self.data_dirty = true;
        }
    }

    /// Replace the whole configuration at once.
    pub fn set_config(&mut self, config: ChartConfig) {
        let config = config.sanitized();
        if self.config == config {
            return;
        }
        if self.config.affects_reduction(&config) {
            self.data_dirty = true;
        }
        self.layout_dirty = true;
        self.config = config;
    }

    pub fn set_max_visible_items(&mut self, max: usize) {
        if self.config.max_visible_items != max {
            self.config.max_visible_items = max;
            self.data_dirty = true;
        }
    }

    pub fn set_color_palette(&mut self, palette: Vec<Color>) {
        if self.config.color_palette != palette {
            self.config.color_palette = palette;
            self.data_dirty = true;
        }
    }

    pub fn set_other_color(&mut self, color: Color) {
        if self.config.other_color != color {
            self.config.other_color = color;
            self.data_dirty = true;
        }
    }

    pub fn set_bar_margin(&mut self, margin: f32) {
        let margin = non_negative(margin);
        if self.config.bar_margin != margin {
            self.config.bar_margin = margin;
            self.layout_dirty = true;
        }
    }

    pub fn set_bar_corner_radius(&mut self, radius: f32) {
        let radius = non_negative(radius);
        if self.config.bar_corner_radius != radius {
            self.config.bar_corner_radius = radius;
            self.layout_dirty = true;
        }
    }

    pub fn set_label_font(&mut self, font: FontRef) {
        let font = FontRef {
            size: non_negative(font.size),
            ..font
        };
        if self.config.label_font != font {
            self.config.label_font = font;
            self.layout_dirty = true;
        }
    }

    pub fn set_label_color(&mut self, color: Color) {
        if self.config.label_color != color {
            self.config.label_color = color;
            self.layout_dirty = true;
        }
    }

    pub fn set_label_height(&mut self, height: f32) {
        let height = non_negative(height);
        if self.config.label_height != height {
            self.config.label_height = height;
            self.layout_dirty = true;
        }
    }

    pub fn set_label_top_padding(&mut self, padding: f32) {
        let padding = non_negative(padding);
        if self.config.label_top_padding != padding {
            self.config.label_top_padding = padding;
            self.layout_dirty = true;
        }
    }

    /// Update the area the host gives the chart, typically on every frame.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        let bounds = Size::new(width, height);
        if self.bounds != bounds {
            self.bounds = bounds;
            self.layout_dirty = true;
        }
    }

    // ── Recompute ───────────────────────────────────────────────────

    /// `true` when a setter changed something since the last `recompute`.
    pub fn is_dirty(&self) -> bool {
        self.data_dirty || self.layout_dirty
    }

    /// Run whatever stages are pending. Returns `true` if anything ran.
    pub fn recompute(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }

        if self.data_dirty {
            self.segments = reduce(
                &self.items,
                self.config.max_visible_items,
                &self.config.color_palette,
                self.config.other_color,
                &mut self.fallback,
            );
            tracing::debug!(
                "Reduced {} items to {} segments",
                self.items.len(),
                self.segments.len()
            );
        }

        self.primitives = layout(&self.segments, self.bounds, &self.config);
        tracing::debug!(
            "Laid out {} segments into {} primitives ({}x{})",
            self.segments.len(),
            self.primitives.len(),
            self.bounds.width,
            self.bounds.height
        );

        self.data_dirty = false;
        self.layout_dirty = false;
        true
    }

    // ── Outputs ─────────────────────────────────────────────────────

    /// Segments from the last `recompute`.
    pub fn segments(&self) -> &[DisplaySegment] {
        &self.segments
    }

    /// Primitives from the last `recompute`. The host replaces everything it
    /// painted before with this list.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Sum of all segment counts, used for percentages. Saturates at
    /// `f64::MAX`.
    pub fn total_count(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.count)
            .sum::<f64>()
            .min(f64::MAX)
    }
}
