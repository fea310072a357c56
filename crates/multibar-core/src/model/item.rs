/// Raw input rows supplied by the host.
use super::Color;
use serde::{Deserialize, Serialize};

/// One named value in the host's dataset.
///
/// Names need not be unique. Counts that are zero, negative or non-finite
/// are accepted here and dropped by the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarItem {
    pub name: String,
    pub count: f64,
    /// Explicit colour. `None` means "pick one from the palette".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl BarItem {
    /// An item without an explicit colour.
    pub fn new(name: impl Into<String>, count: f64) -> Self {
        Self {
            name: name.into(),
            count,
            color: None,
        }
    }

    /// Attach an explicit colour.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Equality that treats identical counts as equal even when they are NaN.
    pub fn same_as(&self, other: &Self) -> bool {
        self.name == other.name
            && self.count.to_bits() == other.count.to_bits()
            && self.color == other.color
    }

    /// Whether the reducer will keep this item.
    pub fn is_valid(&self) -> bool {
        self.count.is_finite() && self.count > 0.0
    }
}
