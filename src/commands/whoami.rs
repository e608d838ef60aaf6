//! Session status command. Reports token presence without a network call.

use crate::api::Auth;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    if Auth::new()?.is_authenticated() {
        msg_print!(Message::AuthStatusSignedIn);
    } else {
        msg_print!(Message::AuthStatusSignedOut);
    }
    Ok(())
}
