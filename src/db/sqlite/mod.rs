//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod decode;
mod task;
mod theme;


pub use connection::{SCHEMA_VERSION, SqliteDatabase};
pub use task::SqliteTaskRepository;
pub use theme::SqliteThemeRepository;
