/// Panel layouts for the MultiBar demo.

pub mod chart_panel;
pub mod config_panel;
pub mod items_panel;
