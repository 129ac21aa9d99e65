//! Chat session persistence and orchestration.

pub mod repository;
pub mod service;
