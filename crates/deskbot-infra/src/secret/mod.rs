//! Secret access for credentials.

pub mod env;
