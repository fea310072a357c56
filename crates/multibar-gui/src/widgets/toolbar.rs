/// Top action bar -- data actions, theme toggle, and branding.
use crate::state::{DemoState, MAX_DEMO_ITEMS};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut DemoState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("▮▮▯ MultiBar")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        if ui
            .add(egui::Button::new("🔀 Shuffle Data").min_size(egui::vec2(110.0, 28.0)))
            .on_hover_text("Reorder the items and draw new counts")
            .clicked()
        {
            state.shuffle_data();
        }

        let can_add = state.chart.items().len() < MAX_DEMO_ITEMS;
        if ui
            .add_enabled(
                can_add,
                egui::Button::new("➕ Add Item").min_size(egui::vec2(90.0, 28.0)),
            )
            .on_hover_text(if can_add {
                "Append a random item"
            } else {
                "Item limit reached"
            })
            .clicked()
        {
            state.add_item();
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About MultiBar").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let dark = state.theme == crate::theme::ThemeMode::Dark;
            let theme_label = if dark { "☀" } else { "🌙" };
            let theme_tip = if dark {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.theme.toggle();
            }
        });
    });
}
