/// Demo application state.
///
/// Centralises everything the demo UI reads and writes. The chart itself
/// owns its inputs and dirty flags; this struct only adds the demo-specific
/// knobs (chart height, theme) and the clamped setters the controls use.
use crate::theme::{demo_palette, ThemeMode};
use multibar_core::model::{BarItem, Color, FontRef};
use multibar_core::{ChartConfig, ChartDocument, MultiBarChart};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

/// Range offered by the "Max Visible Items" stepper.
pub const MAX_VISIBLE_RANGE: RangeInclusive<usize> = 1..=5;

/// Range offered by the bar margin slider.
pub const BAR_MARGIN_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Range offered by the chart height slider.
pub const CHART_HEIGHT_RANGE: RangeInclusive<f32> = 30.0..=200.0;

/// Counts drawn by "Shuffle Data".
const SHUFFLE_COUNT_RANGE: RangeInclusive<f64> = 5.0..=50.0;

/// Counts drawn by "Add Item".
const NEW_ITEM_COUNT_RANGE: RangeInclusive<f64> = 5.0..=30.0;

/// Hard cap on demo rows so repeated "Add Item" clicks stay readable.
pub const MAX_DEMO_ITEMS: usize = 40;

/// All demo application state.
pub struct DemoState {
    pub chart: MultiBarChart,
    /// Height given to the chart widget, labels included.
    pub chart_height: f32,
    pub theme: ThemeMode,
    /// Label text tracks the theme's text colour. Off when a document chose
    /// its own label colour.
    pub label_follows_theme: bool,
    pub show_about: bool,
    /// Where the current data came from, shown in the status line.
    pub source: String,
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoState {
    /// Demo state preloaded with the sample portfolio.
    pub fn new() -> Self {
        let mut chart = MultiBarChart::new();
        chart.set_items(sample_items());
        chart.set_max_visible_items(3);
        chart.set_bar_margin(1.0);
        chart.set_color_palette(demo_palette());
        chart.set_label_font(FontRef::proportional(11.0));

        Self {
            chart,
            chart_height: 30.0,
            theme: ThemeMode::Dark,
            label_follows_theme: true,
            show_about: false,
            source: "sample data".to_string(),
        }
    }

    /// Demo state built from a loaded chart document.
    ///
    /// A document keeping the default label colour gets theme-coloured
    /// labels; any other colour is kept as written.
    pub fn from_document(doc: &ChartDocument, source: impl Into<String>) -> Self {
        let mut state = Self::new();
        doc.apply_to(&mut state.chart);
        state.label_follows_theme = doc.config.label_color == ChartConfig::default().label_color;
        state.source = source.into();
        state
    }

    pub fn set_max_visible_items(&mut self, max: usize) {
        let max = max.clamp(*MAX_VISIBLE_RANGE.start(), *MAX_VISIBLE_RANGE.end());
        self.chart.set_max_visible_items(max);
    }

    pub fn set_bar_margin(&mut self, margin: f32) {
        let margin = margin.clamp(*BAR_MARGIN_RANGE.start(), *BAR_MARGIN_RANGE.end());
        self.chart.set_bar_margin(margin);
    }

    pub fn set_chart_height(&mut self, height: f32) {
        self.chart_height = height.clamp(*CHART_HEIGHT_RANGE.start(), *CHART_HEIGHT_RANGE.end());
    }

    /// Shuffle the rows and give each a fresh count. Names and colours stay.
    pub fn shuffle_data(&mut self) {
        self.shuffle_data_with(&mut rand::thread_rng());
    }

    pub fn shuffle_data_with<R: Rng>(&mut self, rng: &mut R) {
        let mut items = self.chart.items().to_vec();
        items.shuffle(rng);
        for item in &mut items {
            item.count = rng.gen_range(SHUFFLE_COUNT_RANGE);
        }
        tracing::debug!("Shuffled {} demo items", items.len());
        self.chart.set_items(items);
    }

    /// Append a randomly named item without a colour.
    pub fn add_item(&mut self) {
        self.add_item_with(&mut rand::thread_rng());
    }

    pub fn add_item_with<R: Rng>(&mut self, rng: &mut R) {
        if self.chart.items().len() >= MAX_DEMO_ITEMS {
            tracing::warn!("Demo item limit ({MAX_DEMO_ITEMS}) reached");
            return;
        }
        let mut items = self.chart.items().to_vec();
        let name = format!("NEW{}", rng.gen_range(1..=100));
        items.push(BarItem::new(name, rng.gen_range(NEW_ITEM_COUNT_RANGE)));
        self.chart.set_items(items);
    }

    /// Remove the row at `index`. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.chart.items().len() {
            return;
        }
        let mut items = self.chart.items().to_vec();
        items.remove(index);
        self.chart.set_items(items);
    }

    /// Match label text to the active theme's text colour, unless the
    /// labels have a colour of their own.
    pub fn sync_label_color(&mut self, color: Color) {
        if self.label_follows_theme {
            self.chart.set_label_color(color);
        }
    }

    /// Snapshot of the current data and configuration.
    pub fn document(&self) -> ChartDocument {
        ChartDocument {
            config: self.chart.config().clone(),
            items: self.chart.items().to_vec(),
        }
    }
}

/// The sample crypto portfolio the demo opens with.
pub fn sample_items() -> Vec<BarItem> {
    vec![
        BarItem::new("BTC", 45.0).with_color(Color::ORANGE),
        BarItem::new("ETH", 35.0).with_color(Color::BLUE.with_alpha(0.7)),
        BarItem::new("ADA", 12.0),
        BarItem::new("SOL", 8.0),
        BarItem::new("XRP", 6.0),
        BarItem::new("LTC", 2.0),
    ]
}
