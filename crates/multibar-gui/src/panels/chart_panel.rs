/// Chart panel -- the MultiBar widget plus a legend of what it shows.
use crate::state::DemoState;
use crate::theme::to_color32;
use crate::widgets::multi_bar::multi_bar;
use egui::{Ui, Vec2};
use multibar_core::model::value::{format_count, format_percent, percent_of};

/// Draw the chart card followed by one legend row per displayed segment.
pub fn chart_panel(ui: &mut Ui, state: &mut DemoState) {
    // Extract theme-adaptive colours once for correct rendering in both
    // dark and light mode.
    let color_normal = ui.visuals().text_color();
    let color_muted = ui.visuals().weak_text_color();

    ui.heading("Portfolio");
    ui.add_space(4.0);

    let height = state.chart_height;
    egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui| {
            multi_bar(ui, &mut state.chart, height);
        });

    ui.add_space(12.0);

    let chart = &state.chart;
    if chart.segments().is_empty() {
        ui.label(
            egui::RichText::new("No items with a positive count.")
                .color(color_muted)
                .size(12.0),
        );
        return;
    }

    let total = chart.total_count();
    for segment in chart.segments() {
        ui.horizontal(|ui| {
            // Segment colour dot.
            let (dot_rect, _) = ui.allocate_exact_size(Vec2::new(10.0, 10.0), egui::Sense::hover());
            ui.painter_at(dot_rect)
                .circle_filled(dot_rect.center(), 4.0, to_color32(segment.color));

            let mut name = egui::RichText::new(&segment.name)
                .color(color_normal)
                .size(12.0);
            if segment.is_other() {
                name = name.italics();
            }
            ui.label(name);

            ui.label(
                egui::RichText::new(format_count(segment.count))
                    .color(color_normal)
                    .size(12.0),
            );

            ui.label(
                egui::RichText::new(format!(
                    "({})",
                    format_percent(percent_of(segment.count, total))
                ))
                .color(color_muted)
                .size(11.0),
            );
        });
    }
}
