/// MultiBar widget -- paints a `MultiBarChart` into an egui `Ui`.
///
/// The widget is the host side of the chart contract: it hands the chart
/// the allocated size, asks it to recompute, and paints every primitive from
/// scratch each frame. Nothing from previous frames is kept.
///
/// **Labels**: left-aligned, vertically centred in their box, clipped to it.
/// Text wider than its box is shrunk down to `min_font_scale` of the nominal
/// size before clipping kicks in.
/// **Hover**: tooltip with name, count and share of the total.
use crate::theme::{font_id, to_color32};
use egui::{Align2, Pos2, Rect, Response, Sense, Ui, Vec2};
use multibar_core::fallback::FallbackColors;
use multibar_core::model::value::{format_count, format_percent, percent_of};
use multibar_core::model::{BarPrimitive, LabelPrimitive, Primitive};
use multibar_core::MultiBarChart;

/// Draw `chart` across the full available width at the given height.
pub fn multi_bar<F: FallbackColors>(
    ui: &mut Ui,
    chart: &mut MultiBarChart<F>,
    height: f32,
) -> Response {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());

    chart.set_bounds(rect.width(), rect.height());
    chart.recompute();

    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter_at(rect);
    for prim in chart.primitives() {
        match prim {
            Primitive::Bar(bar) => paint_bar(&painter, rect.min, bar),
            Primitive::Label(label) => paint_label(&painter, rect.min, label),
        }
    }

    // ── Hover tooltip ──────────────────────────────────────────────
    let hovered = response.hover_pos().and_then(|pos| {
        let local = pos - rect.min;
        chart
            .primitives()
            .iter()
            .filter_map(Primitive::as_bar)
            .find(|bar| bar.rect.contains(local.x, local.y))
            .and_then(|bar| chart.segments().get(bar.segment_index))
    });

    match hovered {
        Some(segment) => {
            let total = chart.total_count();
            let name = segment.name.clone();
            let detail = format!(
                "{} ({})",
                format_count(segment.count),
                format_percent(percent_of(segment.count, total)),
            );
            response.on_hover_ui_at_pointer(|ui| {
                ui.label(egui::RichText::new(name).strong().size(12.0));
                ui.label(
                    egui::RichText::new(detail)
                        .size(11.0)
                        .color(ui.visuals().weak_text_color()),
                );
            })
        }
        None => response,
    }
}

// ── Painting ────────────────────────────────────────────────────────

fn to_egui_rect(origin: Pos2, r: multibar_core::model::Rect) -> Rect {
    Rect::from_min_size(origin + Vec2::new(r.x, r.y), Vec2::new(r.width, r.height))
}

fn paint_bar(painter: &egui::Painter, origin: Pos2, bar: &BarPrimitive) {
    let rect = to_egui_rect(origin, bar.rect);
    let radius = bar
        .corner_radius
        .min(rect.width() * 0.5)
        .min(rect.height() * 0.5);
    painter.rect_filled(rect, radius, to_color32(bar.color));
}

fn paint_label(painter: &egui::Painter, origin: Pos2, label: &LabelPrimitive) {
    let rect = to_egui_rect(origin, label.rect);
    if rect.width() <= 0.0 || rect.height() <= 0.0 || label.text.is_empty() {
        return;
    }

    let color = to_color32(label.color);
    let mut galley = painter.layout_no_wrap(label.text.clone(), font_id(&label.font, 1.0), color);

    let natural = galley.size().x;
    if natural > rect.width() {
        let scale = fit_scale(natural, rect.width(), label.min_font_scale);
        galley = painter.layout_no_wrap(label.text.clone(), font_id(&label.font, scale), color);
    }

    let text_rect = Align2::LEFT_CENTER.anchor_size(rect.left_center(), galley.size());

    painter
        .with_clip_rect(rect.intersect(painter.clip_rect()))
        .galley(text_rect.min, galley, color);
}

/// Font scale that makes text `natural` px wide fit into `available` px,
/// never below `min_scale` and never above 1.
pub fn fit_scale(natural: f32, available: f32, min_scale: f32) -> f32 {
    if natural <= 0.0 || natural <= available {
        return 1.0;
    }
    let min_scale = min_scale.clamp(0.0, 1.0);
    (available / natural).clamp(min_scale, 1.0)
}
