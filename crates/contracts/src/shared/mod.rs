pub mod cache;
pub mod cancellation;
pub mod filters;
