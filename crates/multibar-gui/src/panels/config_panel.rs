/// Configuration panel -- the knobs the demo exposes on the chart.
use crate::state::{DemoState, BAR_MARGIN_RANGE, CHART_HEIGHT_RANGE, MAX_VISIBLE_RANGE};
use crate::theme::{from_color32, to_color32};
use egui::Ui;

/// Draw the configuration controls.
pub fn config_panel(ui: &mut Ui, state: &mut DemoState) {
    ui.heading("Configuration");
    ui.add_space(4.0);

    egui::Grid::new("chart_config_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Max visible items");
            let mut max_visible = state.chart.config().max_visible_items;
            if ui
                .add(egui::DragValue::new(&mut max_visible).range(MAX_VISIBLE_RANGE))
                .changed()
            {
                state.set_max_visible_items(max_visible);
            }
            ui.end_row();

            ui.label("Bar margin");
            let mut margin = state.chart.config().bar_margin;
            if ui
                .add(egui::Slider::new(&mut margin, BAR_MARGIN_RANGE).suffix(" px"))
                .changed()
            {
                state.set_bar_margin(margin);
            }
            ui.end_row();

            ui.label("Chart height");
            let mut height = state.chart_height;
            if ui
                .add(egui::Slider::new(&mut height, CHART_HEIGHT_RANGE).suffix(" px"))
                .changed()
            {
                state.set_chart_height(height);
            }
            ui.end_row();

            ui.label("Corner radius");
            let mut radius = state.chart.config().bar_corner_radius;
            if ui
                .add(egui::Slider::new(&mut radius, 0.0..=10.0).suffix(" px"))
                .changed()
            {
                state.chart.set_bar_corner_radius(radius);
            }
            ui.end_row();

            ui.label("Show labels");
            let mut show_labels = state.chart.config().label_height > 0.0;
            if ui.checkbox(&mut show_labels, "").changed() {
                let (height, padding) = if show_labels { (20.0, 2.0) } else { (0.0, 0.0) };
                state.chart.set_label_height(height);
                state.chart.set_label_top_padding(padding);
            }
            ui.end_row();

            ui.label("\"Other\" colour");
            let mut other = to_color32(state.chart.config().other_color);
            if ui.color_edit_button_srgba(&mut other).changed() {
                state.chart.set_other_color(from_color32(other));
            }
            ui.end_row();
        });
}
