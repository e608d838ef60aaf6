//! Command guard for authenticated surfaces.
//!
//! The CLI analog of a route guard: before a protected command runs, check
//! that a session token cookie is present and refuse with a pointer back to
//! `signin` (carrying the attempted command) when it is not. Presence only;
//! the server verifies validity on every request.

use super::messages::Message;
use super::token::TokenStore;
use crate::msg_error_anyhow;
use anyhow::Result;

/// Commands that require a signed-in session.
pub const PROTECTED_COMMANDS: &[&str] = &["task"];

pub fn is_protected(command: &str) -> bool {
    PROTECTED_COMMANDS.contains(&command)
}

/// Fails with a signin redirect message when no token is stored.
pub fn ensure_authenticated(command: &str) -> Result<()> {
    let store = TokenStore::new()?;
    if store.get().is_none() {
        return Err(msg_error_anyhow!(Message::NotAuthenticated(command.to_string())));
    }
    Ok(())
}
