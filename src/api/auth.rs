//! Auth session facade: signup, signin, signout.
//!
//! Signup and signin both POST credentials and, on success, store the
//! returned access token, so signup doubles as a login. Signout clears the
//! local token unconditionally before the best-effort logout notification;
//! a failed notification is logged at debug level and never surfaced, since
//! the client is already signed out either way.

use super::ApiClient;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use serde::{Deserialize, Serialize};

const SIGNUP_URL: &str = "api/auth/signup";
const SIGNIN_URL: &str = "api/auth/signin";
const LOGOUT_URL: &str = "api/auth/logout";

#[derive(Serialize, Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

pub struct Auth {
    client: ApiClient,
}

impl Auth {
    pub fn new() -> Result<Self> {
        Ok(Self { client: ApiClient::new()? })
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Registers a new account. Auto-login: the returned token is stored.
    pub async fn signup(&mut self, credentials: &Credentials) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post(SIGNUP_URL, Some(credentials)).await?;
        self.store_token(&response)?;
        Ok(response)
    }

    pub async fn signin(&mut self, credentials: &Credentials) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post(SIGNIN_URL, Some(credentials)).await?;
        self.store_token(&response)?;
        Ok(response)
    }

    /// Ends the local session, then notifies the server without caring
    /// whether that call succeeds.
    pub async fn signout(&mut self) -> Result<()> {
        self.client.token_store_mut().set(None)?;

        if let Err(err) = self.client.post::<(), serde_json::Value>(LOGOUT_URL, None).await {
            msg_debug!(Message::SignoutNotifyFailed(err.to_string()));
        }
        Ok(())
    }

    /// Token presence only. A UI convenience, not a trust boundary; the
    /// server verifies every request.
    pub fn is_authenticated(&self) -> bool {
        self.client.token_store().get().is_some()
    }

    fn store_token(&mut self, response: &AuthResponse) -> Result<()> {
        if !response.access_token.is_empty() {
            self.client.token_store_mut().set(Some(&response.access_token))?;
        }
        Ok(())
    }
}
