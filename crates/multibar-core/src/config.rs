/// Chart configuration and the on-disk chart document.
///
/// Every field has a default, and documents are deserialised with
/// `#[serde(default)]`, so a file only needs the knobs it changes.
use crate::chart::MultiBarChart;
use crate::error::{ConfigError, Result};
use crate::fallback::FallbackColors;
use crate::model::{BarItem, Color, FontRef};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of items shown before the rest fold into "Other".
pub const DEFAULT_MAX_VISIBLE_ITEMS: usize = 3;

/// Immutable snapshot of every knob that affects reduction or layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Items shown individually; the rest become "Other". 0 is allowed.
    pub max_visible_items: usize,
    /// Horizontal gap between adjacent bars.
    pub bar_margin: f32,
    pub bar_corner_radius: f32,
    /// Cycled through for items without an explicit colour. May be empty.
    pub color_palette: Vec<Color>,
    pub other_color: Color,
    pub label_font: FontRef,
    pub label_color: Color,
    /// Height reserved under the bars for labels. 0 disables labels.
    pub label_height: f32,
    /// Gap between the bottom of the bars and the top of the label band.
    pub label_top_padding: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
            bar_margin: 6.0,
            bar_corner_radius: 2.0,
            color_palette: default_palette(),
            other_color: Color::GRAY,
            label_font: FontRef::default(),
            label_color: Color::BLACK,
            label_height: 20.0,
            label_top_padding: 2.0,
        }
    }
}

impl ChartConfig {
    /// Replace negative or non-finite geometry with 0.
    pub fn sanitized(mut self) -> Self {
        self.bar_margin = non_negative(self.bar_margin);
        self.bar_corner_radius = non_negative(self.bar_corner_radius);
        self.label_height = non_negative(self.label_height);
        self.label_top_padding = non_negative(self.label_top_padding);
        self.label_font.size = non_negative(self.label_font.size);
        self
    }

    /// Whether switching from `self` to `other` requires re-running the reducer.
    pub fn affects_reduction(&self, other: &Self) -> bool {
        self.max_visible_items != other.max_visible_items
            || self.color_palette != other.color_palette
            || self.other_color != other.other_color
    }
}

/// Blue, green, orange, red, purple.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::BLUE,
        Color::GREEN,
        Color::ORANGE,
        Color::RED,
        Color::PURPLE,
    ]
}

/// Parse a comma-separated list of hex colours, e.g. `"#FF0000, #00FF00"`.
///
/// An empty or all-whitespace string yields an empty palette.
pub fn parse_palette(list: &str) -> Result<Vec<Color>> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| Color::from_hex(part).map_err(ConfigError::from))
        .collect()
}

pub(crate) fn non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// A dataset plus the configuration to render it with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDocument {
    pub config: ChartConfig,
    pub items: Vec<BarItem>,
}

impl ChartDocument {
    /// Push this document's config and items into `chart`.
    pub fn apply_to<F: FallbackColors>(&self, chart: &mut MultiBarChart<F>) {
        chart.set_config(self.config.clone());
        chart.set_items(self.items.clone());
    }
}

/// Read a JSON chart document.
pub fn load_document(path: impl AsRef<Path>) -> Result<ChartDocument> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc: ChartDocument =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    doc.config = doc.config.sanitized();

    tracing::debug!(
        "Loaded chart document {} ({} items)",
        path.display(),
        doc.items.len()
    );
    Ok(doc)
}

/// Write `doc` as pretty-printed JSON.
pub fn save_document(path: impl AsRef<Path>, doc: &ChartDocument) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(doc).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontFamily;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_documented_values() {
        let c = ChartConfig::default();
        assert_eq!(c.max_visible_items, 3);
        assert_eq!(c.bar_margin, 6.0);
        assert_eq!(c.bar_corner_radius, 2.0);
        assert_eq!(c.color_palette.len(), 5);
        assert_eq!(c.other_color, Color::GRAY);
        assert_eq!(c.label_font.size, 10.0);
        assert_eq!(c.label_height, 20.0);
        assert_eq!(c.label_top_padding, 2.0);
    }

    #[test]
    fn sanitized_clamps_negative_and_nan() {
        let c = ChartConfig {
            bar_margin: -4.0,
            bar_corner_radius: f32::NAN,
            label_height: -1.0,
            label_top_padding: f32::INFINITY,
            ..ChartConfig::default()
        }
        .sanitized();
        assert_eq!(c.bar_margin, 0.0);
        assert_eq!(c.bar_corner_radius, 0.0);
        assert_eq!(c.label_height, 0.0);
        assert_eq!(c.label_top_padding, 0.0);
    }

    #[test]
    fn reduction_only_depends_on_data_knobs() {
        let base = ChartConfig::default();
        let margin = ChartConfig {
            bar_margin: 1.0,
            ..base.clone()
        };
        let other = ChartConfig {
            other_color: Color::RED,
            ..base.clone()
        };
        assert!(!base.affects_reduction(&margin));
        assert!(base.affects_reduction(&other));
    }

    #[test]
    fn parse_palette_accepts_lists_and_reports_bad_entries() {
        let p = parse_palette("#FF3B30, 34C759 ,").unwrap();
        assert_eq!(p, vec![Color::RED, Color::GREEN]);
        assert!(parse_palette("  ").unwrap().is_empty());

        let err = parse_palette("#FF3B30,teal").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(ref e) if e.input == "teal"));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chart.json");
        std::fs::write(
            &path,
            r##"{
                "config": { "max_visible_items": 2, "bar_margin": -3, "label_font": { "family": "monospace" } },
                "items": [ { "name": "BTC", "count": 45, "color": "#FF9500" }, { "name": "ADA", "count": 12 } ]
            }"##,
        )
        .unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.config.max_visible_items, 2);
        assert_eq!(doc.config.bar_margin, 0.0, "negative margin sanitised");
        assert_eq!(doc.config.label_font.family, FontFamily::Monospace);
        assert_eq!(doc.config.label_font.size, 10.0);
        assert_eq!(doc.config.label_height, 20.0);
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.items[0].color, Some(Color::ORANGE));
    }

    #[test]
    fn save_then_load_preserves_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("saved.json");
        let doc = ChartDocument {
            config: ChartConfig {
                color_palette: vec![Color::PURPLE],
                ..ChartConfig::default()
            },
            items: vec![BarItem::new("SOL", 8.0).with_color(Color::BLUE.with_alpha(0.5))],
        };
        save_document(&path, &doc).unwrap();
        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.items[0].name, "SOL");
        assert_eq!(loaded.config.color_palette, vec![Color::PURPLE]);
        assert_eq!(
            loaded.items[0].color.map(Color::to_rgba8),
            Some([0x00, 0x7a, 0xff, 0x80])
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_document(tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn bad_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_document(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }
}
