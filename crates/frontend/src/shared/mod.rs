pub mod api_utils;
pub mod catalog_context;
pub mod config;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod storage;
pub mod url_state;
