pub mod aggregate;
pub mod query;

pub use aggregate::Olympiad;
pub use query::OlympiadQuery;
