/// Data model for the chart: inputs, resolved segments and drawing output.
pub mod color;
pub mod item;
pub mod primitive;
pub mod segment;
pub mod value;

pub use color::{Color, ColorParseError};
pub use item::BarItem;
pub use primitive::{
    BarPrimitive, FontFamily, FontRef, LabelPrimitive, Primitive, Rect, Size,
};
pub use segment::{DisplaySegment, SegmentKind, OTHER_LABEL};
