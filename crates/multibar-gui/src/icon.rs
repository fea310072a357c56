//! MultiBar application icon generator.
//!
//! The icon is a miniature of the chart itself: four rounded bars laid out
//! by the core layout engine, rasterised with anti-aliased corners onto a
//! transparent square.

use multibar_core::layout::layout;
use multibar_core::model::{BarItem, Color, Primitive, Rect, Size};
use multibar_core::reduce::reduce;
use multibar_core::{ChartConfig, RandomFallback};

/// Generate a MultiBar icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    // Bars occupy the middle band of the square with a small inset.
    let inset = (s * 0.08).round();
    let band_height = s * 0.44;
    let band_top = (s - band_height) * 0.5;

    let items = [
        BarItem::new("a", 45.0),
        BarItem::new("b", 30.0),
        BarItem::new("c", 15.0),
        BarItem::new("d", 6.0),
        BarItem::new("e", 4.0),
    ];
    let config = ChartConfig {
        bar_margin: (s * 0.04).max(1.0),
        bar_corner_radius: s * 0.08,
        label_height: 0.0,
        label_top_padding: 0.0,
        ..ChartConfig::default()
    };
    let segments = reduce(
        &items,
        config.max_visible_items,
        &config.color_palette,
        config.other_color,
        &mut RandomFallback::new(),
    );
    let primitives = layout(&segments, Size::new(s - inset * 2.0, band_height), &config);

    // ── Per-pixel rendering ─────────────────────────────────────
    for prim in &primitives {
        let Primitive::Bar(bar) = prim else {
            continue;
        };
        let rect = Rect::new(
            bar.rect.x + inset,
            bar.rect.y + band_top,
            bar.rect.width,
            bar.rect.height,
        );
        paint_rounded_rect(&mut pixels, size, rect, bar.corner_radius, bar.color);
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Alpha-blend a rounded rectangle into `pixels`.
fn paint_rounded_rect(pixels: &mut [u8], size: u32, rect: Rect, radius: f32, color: Color) {
    let [cr, cg, cb, _] = color.to_rgba8();
    let radius = radius.min(rect.width * 0.5).min(rect.height * 0.5);

    let x0 = rect.x.floor().max(0.0) as u32;
    let y0 = rect.y.floor().max(0.0) as u32;
    let x1 = (rect.right().ceil() as u32).min(size);
    let y1 = (rect.bottom().ceil() as u32).min(size);

    for y in y0..y1 {
        for x in x0..x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let coverage = smooth_edge(rounded_rect_sdf(px, py, rect, radius), 0.0) * color.a;
            if coverage <= 0.0 {
                continue;
            }

            let idx = ((y * size + x) * 4) as usize;
            let dst_a = pixels[idx + 3] as f32 / 255.0;
            pixels[idx] = lerp_c(pixels[idx], cr, coverage);
            pixels[idx + 1] = lerp_c(pixels[idx + 1], cg, coverage);
            pixels[idx + 2] = lerp_c(pixels[idx + 2], cb, coverage);
            pixels[idx + 3] = ((dst_a + (1.0 - dst_a) * coverage) * 255.0).clamp(0.0, 255.0) as u8;
        }
    }
}

/// Signed distance from a point to a rounded rectangle (negative inside).
fn rounded_rect_sdf(px: f32, py: f32, rect: Rect, radius: f32) -> f32 {
    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.5;
    let qx = (px - cx).abs() - (rect.width * 0.5 - radius);
    let qy = (py - cy).abs() - (rect.height * 0.5 - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -0.5 {
        1.0
    } else if d > 0.5 {
        0.0
    } else {
        0.5 - d
    }
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_buffer_has_expected_size() {
        assert_eq!(render_icon(32).len(), 32 * 32 * 4);
    }

    #[test]
    fn corners_are_transparent_and_centre_is_painted() {
        let size = 64;
        let px = render_icon(size);
        let alpha = |x: u32, y: u32| px[((y * size + x) * 4 + 3) as usize];
        assert_eq!(alpha(0, 0), 0);
        assert_eq!(alpha(size - 1, size - 1), 0);
        // The first (widest) bar covers the left part of the middle row.
        assert_eq!(alpha(size / 4, size / 2), 255);
    }
}
