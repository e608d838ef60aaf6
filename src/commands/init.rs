//! Configuration initialization command.
//!
//! Interactive wizard for first-time setup. Currently configures the task
//! server base URL; the `TASKMATE_API_URL` environment variable still wins
//! at runtime.

use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::default().save()?;
        msg_success!(Message::ConfigSaved);
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
