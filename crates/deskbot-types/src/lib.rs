//! Shared domain types for Deskbot.
//!
//! This crate contains the domain types used across the Deskbot backend:
//! chat messages, prompt variants, completion request/response shapes,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod llm;
pub mod message;
pub mod prompt;
