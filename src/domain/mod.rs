//! Domain models for asana-deps
//!
//! Contains the task model and status rules without any I/O concerns.

mod task;
mod collection;
mod status;

pub use task::{Task, sanitize_name};
pub use collection::{TaskCollection, CollectionError};
pub use status::{Status, is_ready};
