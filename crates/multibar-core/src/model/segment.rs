/// Display segments produced by the reducer.
use super::Color;

/// Name given to the synthetic aggregate segment.
pub const OTHER_LABEL: &str = "Other";

/// Whether a segment stands for one input item or for the aggregated tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Shown individually.
    Direct,
    /// Sum of every item past the visible cutoff.
    Other,
}

/// A fully resolved unit of the chart: always has a positive count and a colour.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySegment {
    pub name: String,
    pub count: f64,
    pub color: Color,
    pub kind: SegmentKind,
}

impl DisplaySegment {
    pub fn is_other(&self) -> bool {
        self.kind == SegmentKind::Other
    }
}
