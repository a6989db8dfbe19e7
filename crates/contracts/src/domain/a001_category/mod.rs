pub mod aggregate;
pub mod seed;

pub use aggregate::{count_by_category, Category, OTHER_CATEGORY_TITLE};
pub use seed::SEED_CATEGORIES;
