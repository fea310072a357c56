/// Main `eframe::App` implementation for the MultiBar demo.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::DemoState;
use crate::theme::from_color32;
use crate::widgets;
use multibar_core::ChartDocument;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so document
/// loading and palette overrides are settled before the OS window exists.
pub struct MultiBarState {
    pub(crate) inner: DemoState,
}

impl MultiBarState {
    /// Demo state with the built-in sample data.
    pub fn build() -> Self {
        Self {
            inner: DemoState::new(),
        }
    }

    /// Demo state populated from a chart document.
    pub fn from_document(doc: &ChartDocument, source: impl Into<String>) -> Self {
        Self {
            inner: DemoState::from_document(doc, source),
        }
    }

    /// Adjust the state before the window opens.
    pub fn demo_mut(&mut self) -> &mut DemoState {
        &mut self.inner
    }
}

/// The MultiBar demo application.
pub struct MultiBarApp {
    state: DemoState,
}

impl MultiBarApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state should have been constructed by [`MultiBarState::build()`]
    /// or [`MultiBarState::from_document()`] *before* `eframe::run_native`
    /// is called.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: MultiBarState) -> Self {
        let state = state.inner;
        cc.egui_ctx.set_visuals(state.theme.visuals());
        Self { state }
    }
}

impl eframe::App for MultiBarApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling the theme takes effect
        // immediately on the next rendered frame. Label text follows the
        // theme's text colour; the chart ignores it when nothing changed.
        let visuals = self.state.theme.visuals();
        let text_color = visuals.text_color();
        ctx.set_visuals(visuals);
        self.state.sync_label_color(from_color32(text_color));

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About MultiBar")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("▮▮▯ MultiBar")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "A proportional multi-segment bar chart.\n\
                             The largest items get their own bar,\n\
                             the long tail folds into \"Other\".",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("MIT License - Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Left sidebar ──────────────────────────────────────────────────
        egui::SidePanel::left("left_panel")
            .default_width(300.0)
            .min_width(240.0)
            .max_width(480.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    panels::config_panel::config_panel(ui, &mut self.state);
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(4.0);
                    panels::items_panel::items_panel(ui, &mut self.state);
                });
            });

        // ── Central panel (chart) ─────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                panels::chart_panel::chart_panel(ui, &mut self.state);
            });
        });
    }
}
