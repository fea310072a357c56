//! MultiBar demo -- proportional multi-segment bar chart.
//!
//! Thin binary entry point. All logic lives in the `multibar-core`
//! and `multibar-gui` crates.
//!
//! Usage: `MultiBarDemo [chart.json]`. The document path may also come from
//! `MULTIBAR_DOCUMENT`; `MULTIBAR_PALETTE` overrides the palette with a
//! comma-separated list of hex colours.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use multibar_gui::MultiBarState;
use std::path::{Path, PathBuf};

const DOCUMENT_ENV: &str = "MULTIBAR_DOCUMENT";
const PALETTE_ENV: &str = "MULTIBAR_PALETTE";

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("MultiBar demo starting");

    let icon = multibar_gui::icon::generate_icon(64);

    // Build application state *before* opening the window so the first
    // rendered frame arrives immediately.
    let mut state = match document_path() {
        Some(path) => match load_state(&path) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("{e:#} -- using sample data");
                MultiBarState::build()
            }
        },
        None => MultiBarState::build(),
    };

    if let Ok(list) = std::env::var(PALETTE_ENV) {
        match multibar_core::config::parse_palette(&list) {
            Ok(palette) => {
                tracing::info!("Using {} colour palette from {PALETTE_ENV}", palette.len());
                state.demo_mut().chart.set_color_palette(palette);
            }
            Err(e) => tracing::warn!("Ignoring {PALETTE_ENV}: {e}"),
        }
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("MultiBar -- Proportional Bar Chart")
            .with_inner_size([1100.0, 640.0])
            .with_min_inner_size([640.0, 400.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "MultiBar",
        options,
        Box::new(|cc| Ok(Box::new(multibar_gui::MultiBarApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

/// First command-line argument, falling back to `MULTIBAR_DOCUMENT`.
fn document_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(DOCUMENT_ENV))
        .map(PathBuf::from)
}

fn load_state(path: &Path) -> anyhow::Result<MultiBarState> {
    let doc = multibar_core::config::load_document(path)
        .with_context(|| format!("Could not load chart document {}", path.display()))?;
    tracing::info!("Loaded {} items from {}", doc.items.len(), path.display());
    Ok(MultiBarState::from_document(&doc, path.display().to_string()))
}
