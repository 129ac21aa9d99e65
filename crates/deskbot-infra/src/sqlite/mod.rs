//! SQLite storage backend.

pub mod message;
pub mod pool;
