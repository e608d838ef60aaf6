//! Sign-in command.

use crate::api::{auth::Credentials, error_detail, ApiError, Auth};
use crate::libs::messages::Message;
use crate::libs::validate;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use reqwest::StatusCode;

#[derive(Debug, Args)]
pub struct SigninArgs {
    /// Account email address
    #[arg(short, long)]
    email: Option<String>,

    /// Password; prompted interactively when omitted
    #[arg(short, long)]
    password: Option<String>,
}

pub async fn cmd(args: SigninArgs) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    if let Err(msg) = validate::email(&email) {
        msg_bail_anyhow!(msg);
    }

    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?,
    };
    if password.is_empty() {
        msg_bail_anyhow!(Message::PasswordRequired);
    }

    let mut auth = Auth::new()?;
    match auth.signin(&Credentials { email, password }).await {
        Ok(response) => {
            msg_success!(Message::SigninSuccess(response.user.email));
            Ok(())
        }
        Err(err) => match err.downcast_ref::<ApiError>() {
            Some(api) if api.status == StatusCode::UNAUTHORIZED => Err(msg_error_anyhow!(Message::InvalidCredentials)),
            _ => Err(msg_error_anyhow!(Message::SigninFailed(error_detail(&err)))),
        },
    }
}
