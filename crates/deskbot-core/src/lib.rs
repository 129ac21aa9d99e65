//! Business logic and trait definitions for Deskbot.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements. It depends only on `deskbot-types` --
//! never on `deskbot-infra` or any database/HTTP crate.

pub mod chat;
pub mod chatbot;
pub mod llm;
pub mod validator;
