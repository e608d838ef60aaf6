//! Account registration command.

use crate::api::{auth::Credentials, error_detail, ApiError, Auth};
use crate::libs::messages::Message;
use crate::libs::validate;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use reqwest::StatusCode;

#[derive(Debug, Args)]
pub struct SignupArgs {
    /// Email address for the new account
    #[arg(short, long)]
    email: Option<String>,

    /// Password; prompted interactively (with confirmation) when omitted
    #[arg(short, long)]
    password: Option<String>,
}

pub async fn cmd(args: SignupArgs) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    if let Err(msg) = validate::email(&email) {
        msg_bail_anyhow!(msg);
    }

    let interactive = args.password.is_none();
    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?,
    };
    if let Err(msg) = validate::password(&password) {
        msg_bail_anyhow!(msg);
    }
    if interactive {
        let confirmation = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPasswordConfirm.to_string())
            .interact()?;
        if let Err(msg) = validate::password_confirmation(&password, &confirmation) {
            msg_bail_anyhow!(msg);
        }
    }

    let mut auth = Auth::new()?;
    match auth.signup(&Credentials { email, password }).await {
        Ok(response) => {
            msg_success!(Message::SignupSuccess(response.user.email));
            Ok(())
        }
        Err(err) => match err.downcast_ref::<ApiError>() {
            Some(api) if api.status == StatusCode::CONFLICT => Err(msg_error_anyhow!(Message::EmailAlreadyRegistered)),
            _ => Err(msg_error_anyhow!(Message::SignupFailed(error_detail(&err)))),
        },
    }
}
