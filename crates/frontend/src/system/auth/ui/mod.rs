pub mod auth_button;
pub mod auth_modal;
