/// Bottom status bar -- data source and chart statistics.
use crate::state::DemoState;
use egui::Ui;
use multibar_core::model::value::format_count;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &DemoState) {
    // Extract theme-adaptive colours once for this frame.
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    let chart = &state.chart;
    let shown = chart.segments().len();
    let aggregated = chart.segments().last().is_some_and(|s| s.is_other());

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&state.source)
                .size(12.0)
                .color(color_weak),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(format!("{} items", chart.items().len()))
                .size(12.0)
                .color(color_normal),
        );

        ui.separator();

        let segments_text = if aggregated {
            format!("{shown} segments (incl. Other)")
        } else {
            format!("{shown} segments")
        };
        ui.label(
            egui::RichText::new(segments_text)
                .size(12.0)
                .color(color_normal),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(format!("Total {}", format_count(chart.total_count())))
                .size(12.0)
                .color(color_accent),
        );
    });
}
