//! Completion provider implementations.

pub mod openai;
pub mod shared;
