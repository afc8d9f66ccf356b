pub mod task;
pub mod theme;
