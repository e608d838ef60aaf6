pub mod init;
pub mod signin;
pub mod signout;
pub mod signup;
pub mod task;
pub mod whoami;

use crate::libs::guard;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a new account")]
    Signup(signup::SignupArgs),
    #[command(about = "Sign in to an existing account")]
    Signin(signin::SigninArgs),
    #[command(about = "Sign out of the current session")]
    Signout,
    #[command(about = "Show authentication status")]
    Whoami,
    #[command(subcommand, about = "Manage tasks")]
    Task(task::TaskCommands),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Init(_) => "init",
            Commands::Signup(_) => "signup",
            Commands::Signin(_) => "signin",
            Commands::Signout => "signout",
            Commands::Whoami => "whoami",
            Commands::Task(_) => "task",
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        // Route guard: protected commands require a stored session token.
        let name = cli.command.name();
        if guard::is_protected(name) {
            guard::ensure_authenticated(name)?;
        }

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Signup(args) => signup::cmd(args).await,
            Commands::Signin(args) => signin::cmd(args).await,
            Commands::Signout => signout::cmd().await,
            Commands::Whoami => whoami::cmd(),
            Commands::Task(command) => task::cmd(command).await,
        }
    }
}
