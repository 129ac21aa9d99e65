//! Environment variable secret access.
//!
//! Credentials are supplied via environment variables and wrapped in
//! [`secrecy::SecretString`] so they never appear in Debug output or logs.

use secrecy::SecretString;

/// Read a secret from an environment variable.
///
/// Returns `None` when the variable is unset. A variable with invalid
/// Unicode is treated as unset rather than an error, since secrets must be
/// valid strings.
pub fn env_secret(key: &str) -> Option<SecretString> {
    match std::env::var(key) {
        Ok(val) => Some(SecretString::from(val)),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => None,
    }
}
