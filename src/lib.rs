pub mod app;
#[cfg(feature = "cli")]
pub mod cli;
pub mod db;
pub mod paths;
