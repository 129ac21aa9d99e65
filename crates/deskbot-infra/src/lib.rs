//! Infrastructure layer for Deskbot.
//!
//! Contains implementations of the traits defined in `deskbot-core`:
//! SQLite message storage and the OpenAI-compatible completion provider,
//! plus the process-wide shared provider accessor and env-var secret access.

pub mod llm;
pub mod secret;
pub mod sqlite;
