/// Items panel -- editable table of the chart's input items.
///
/// Counts are edited in place; rows can be removed. Items without an explicit
/// colour show "auto" since their colour comes from the palette.
use crate::state::DemoState;
use crate::theme::to_color32;
use egui::{Ui, Vec2};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 22.0;

/// Draw the items table.
pub fn items_panel(ui: &mut Ui, state: &mut DemoState) {
    let color_muted = ui.visuals().weak_text_color();

    ui.heading("Items");
    ui.add_space(4.0);

    let mut items = state.chart.items().to_vec();
    let mut edited = false;
    let mut remove: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(22.0))
        .column(Column::remainder().at_least(60.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::exact(28.0))
        .header(20.0, |mut header| {
            header.col(|_| {});
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Count");
            });
            header.col(|_| {});
        })
        .body(|mut body| {
            for (idx, item) in items.iter_mut().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| match item.color {
                        Some(color) => {
                            let (rect, _) = ui
                                .allocate_exact_size(Vec2::new(12.0, 12.0), egui::Sense::hover());
                            ui.painter_at(rect)
                                .rect_filled(rect, 2.0, to_color32(color));
                        }
                        None => {
                            ui.label(egui::RichText::new("auto").size(9.0).color(color_muted));
                        }
                    });
                    row.col(|ui| {
                        ui.label(&item.name);
                    });
                    row.col(|ui| {
                        let drag = egui::DragValue::new(&mut item.count)
                            .speed(0.5)
                            .max_decimals(2);
                        if ui.add(drag).changed() {
                            edited = true;
                        }
                    });
                    row.col(|ui| {
                        if ui.small_button("✖").on_hover_text("Remove").clicked() {
                            remove = Some(idx);
                        }
                    });
                });
            }
        });

    if edited {
        state.chart.set_items(items);
    }
    if let Some(idx) = remove {
        state.remove_item(idx);
    }
}
