//! Completion-provider abstraction.

pub mod provider;
