/// Drawing primitives handed to the host for painting.
///
/// Coordinates are host pixels with the origin at the chart's top-left
/// corner. Nothing here carries identity between layout passes: the host
/// clears what it painted last time and paints the new list.
use super::Color;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Width and height of the area the host gives the chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Font family hint. Hosts map these onto their own font stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    #[default]
    Proportional,
    Monospace,
}

/// Reference to a font: family plus nominal point size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontRef {
    pub family: FontFamily,
    pub size: f32,
}

impl FontRef {
    pub fn proportional(size: f32) -> Self {
        Self {
            family: FontFamily::Proportional,
            size,
        }
    }
}

impl Default for FontRef {
    /// System proportional font at 10 pt.
    fn default() -> Self {
        Self::proportional(10.0)
    }
}

/// A filled, optionally rounded, bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPrimitive {
    /// Position of the segment this bar draws in the pass's segment list.
    pub segment_index: usize,
    pub rect: Rect,
    pub corner_radius: f32,
    pub color: Color,
}

/// A single line of left-aligned text inside a box.
///
/// Hosts shrink the font (never below `font.size * min_font_scale`) when
/// the text is wider than `rect` instead of truncating it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    pub rect: Rect,
    pub text: String,
    pub font: FontRef,
    pub color: Color,
    pub min_font_scale: f32,
}

/// Something the host has to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bar(BarPrimitive),
    Label(LabelPrimitive),
}

impl Primitive {
    pub fn rect(&self) -> Rect {
        match self {
            Self::Bar(bar) => bar.rect,
            Self::Label(label) => label.rect,
        }
    }

    pub fn as_bar(&self) -> Option<&BarPrimitive> {
        match self {
            Self::Bar(bar) => Some(bar),
            Self::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&LabelPrimitive> {
        match self {
            Self::Label(label) => Some(label),
            Self::Bar(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_containment() {
        let r = Rect::new(10.0, 5.0, 20.0, 8.0);
        assert_eq!(r.right(), 30.0);
        assert_eq!(r.bottom(), 13.0);
        assert!(r.contains(10.0, 5.0));
        assert!(r.contains(29.9, 12.9));
        assert!(!r.contains(30.0, 6.0), "right edge is exclusive");
        assert!(!r.contains(9.9, 6.0));
    }

    #[test]
    fn primitive_accessors() {
        let bar = Primitive::Bar(BarPrimitive {
            segment_index: 0,
            rect: Rect::new(0.0, 0.0, 4.0, 4.0),
            corner_radius: 2.0,
            color: Color::RED,
        });
        assert!(bar.as_bar().is_some());
        assert!(bar.as_label().is_none());
        assert_eq!(bar.rect().width, 4.0);
    }

    #[test]
    fn font_default_is_ten_point_proportional() {
        let f = FontRef::default();
        assert_eq!(f.family, FontFamily::Proportional);
        assert_eq!(f.size, 10.0);
    }
}
