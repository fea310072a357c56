/// Conversions between core chart types and egui, plus the demo's colours.
///
/// The core crate has its own `Color` and `FontRef` so it stays free of UI
/// dependencies. Everything that crosses into egui goes through here.
use egui::{Color32, FontId};
use multibar_core::model::{Color, FontFamily, FontRef};

/// Which theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Toggle between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }

    /// egui visuals for this mode.
    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Dark => egui::Visuals::dark(),
            Self::Light => egui::Visuals::light(),
        }
    }
}

/// Convert a core colour to egui's premultiplied `Color32`.
pub fn to_color32(c: Color) -> Color32 {
    let [r, g, b, a] = c.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Convert an egui colour back to a core colour.
pub fn from_color32(c: Color32) -> Color {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    Color::rgba8(r, g, b, a)
}

/// egui font for a core font reference at `scale` times its nominal size.
pub fn font_id(font: &FontRef, scale: f32) -> FontId {
    let size = (font.size * scale).max(1.0);
    match font.family {
        FontFamily::Proportional => FontId::proportional(size),
        FontFamily::Monospace => FontId::monospace(size),
    }
}

/// Teal, indigo, pink, brown.
pub fn demo_palette() -> Vec<Color> {
    vec![
        Color::rgb8(0x30, 0xb0, 0xc7),
        Color::rgb8(0x58, 0x56, 0xd6),
        Color::rgb8(0xff, 0x2d, 0x55),
        Color::rgb8(0xa2, 0x84, 0x5e),
    ]
}
