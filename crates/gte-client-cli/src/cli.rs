use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and keep the session for later commands
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "GTE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed in user
    Whoami,
    /// Change the profile of the signed in user
    UpdateProfile(UpdateProfileArgs),
    /// Create a new account (does not sign in)
    Register(RegisterArgs),
}

#[derive(Args)]
pub struct UpdateProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub birthday: Option<String>,
    /// Image to upload as the new avatar
    #[arg(long)]
    pub avatar: Option<PathBuf>,
    #[arg(long, requires = "avatar")]
    pub avatar_mime_type: Option<String>,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "GTE_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long, env = "GTE_PASSWORD_CONFIRMATION", hide_env_values = true)]
    pub password_confirmation: String,
}
