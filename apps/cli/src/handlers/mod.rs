pub mod datasets;
pub mod list;
pub mod show;
