/// UI widgets for the MultiBar demo.

pub mod multi_bar;
pub mod status_bar;
pub mod toolbar;
