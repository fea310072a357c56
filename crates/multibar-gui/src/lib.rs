/// MultiBar GUI -- egui host and demo application.
///
/// This crate contains all UI code. Chart logic lives in `multibar-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{MultiBarApp, MultiBarState};
pub use widgets::multi_bar::multi_bar;
