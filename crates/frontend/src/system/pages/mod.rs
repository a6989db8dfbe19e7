pub mod documents;
pub mod feedback;
pub mod home;
pub mod not_found;
