//! Session token storage.
//!
//! Holds the bearer token for the current session and mirrors it on disk in
//! cookie format so the session survives process restarts. The on-disk copy
//! is the CLI analog of the browser cookie the task server's web client
//! uses: same name, same 24 hour lifetime, `SameSite=Lax`, and `Secure` in
//! release builds. Only presence is checked locally; expiry and signature
//! validation belong to the server.

use super::data_storage::DataStorage;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub const TOKEN_FILE: &str = ".auth_token";

const COOKIE_NAME: &str = "auth_token";
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24; // matches server-side token expiry

/// Injectable store for the auth bearer token.
///
/// Constructed once per command and passed to the API client, which keeps
/// token state explicit and lets tests substitute a store backed by a
/// temporary file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    token: Option<String>,
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store backed by the default platform data directory,
    /// seeded from the cookie file when one exists.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(TOKEN_FILE)?;
        Ok(Self::with_path(path))
    }

    /// Creates a store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        let token = fs::read_to_string(&path).ok().and_then(|line| parse_cookie(&line));
        Self { token, path }
    }

    /// Returns the current in-memory token.
    pub fn get(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Persists a new token, or clears the store when given `None`.
    pub fn set(&mut self, token: Option<&str>) -> Result<()> {
        match token {
            Some(token) => {
                fs::write(&self.path, cookie_line(token))?;
                self.token = Some(token.to_owned());
            }
            None => {
                if self.path.exists() {
                    fs::remove_file(&self.path)?;
                }
                self.token = None;
            }
        }
        Ok(())
    }
}

fn cookie_line(token: &str) -> String {
    let mut line = format!("{}={}; Path=/; Max-Age={}; SameSite=Lax", COOKIE_NAME, token, COOKIE_MAX_AGE_SECS);
    if !cfg!(debug_assertions) {
        line.push_str("; Secure");
    }
    line
}

fn parse_cookie(line: &str) -> Option<String> {
    let pair = line.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    if name != COOKIE_NAME || value.is_empty() {
        return None;
    }
    Some(value.to_string())
}
