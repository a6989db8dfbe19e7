pub mod card;
pub mod details;
pub mod filters_panel;
