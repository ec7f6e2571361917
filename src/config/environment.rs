//! Values read from the process environment.
//!
//! The gateway token is read directly before use and is never stored in
//! [`AppConfig`](crate::config::AppConfig).

use crate::errors::{Error, Result};

/// Environment variable holding the Discord bot token
pub const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Reads the Discord bot token from the environment.
///
/// An empty value is treated the same as an unset one.
///
/// # Errors
/// Returns `Error::EnvVar` when the token is absent or blank.
pub fn discord_token() -> Result<String> {
    token_from(std::env::var(TOKEN_VAR))
}

fn token_from(value: std::result::Result<String, std::env::VarError>) -> Result<String> {
    let token = value?;
    if token.trim().is_empty() {
        return Err(Error::EnvVar(std::env::VarError::NotPresent));
    }
    Ok(token)
}
