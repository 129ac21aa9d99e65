//! HTTP/REST API layer for Deskbot.
//!
//! Axum-based API with cookie-derived session identity, plain JSON bodies,
//! and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
