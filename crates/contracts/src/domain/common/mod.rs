//! Common types and traits for catalog entities

pub mod catalog_entity;

// Re-exports
pub use catalog_entity::CatalogEntity;
