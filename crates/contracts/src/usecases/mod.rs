pub mod u501_resolve_category;
