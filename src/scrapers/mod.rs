pub mod base;
pub mod investing;
