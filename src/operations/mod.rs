pub mod creation;
pub mod navigation;
pub mod query;
