pub mod grid;
pub mod page;
