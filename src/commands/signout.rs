//! Sign-out command.
//!
//! Always succeeds from the user's point of view once the local token is
//! cleared; the server notification inside `Auth::signout` is best effort.

use crate::api::Auth;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    Auth::new()?.signout().await?;
    msg_success!(Message::SignoutSuccess);
    Ok(())
}
