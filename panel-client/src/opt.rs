//! Command line interface definition

use clap::{Parser, Subcommand};
use clio::Input;

#[derive(Debug, Parser)]
#[command(name = "panel-client", about = "Mail panel administration client")]
pub struct Opt {
    /// Config file path
    #[arg(short, long, value_parser, default_value = "config.toml")]
    pub config: Input,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Authenticate against the backend and store the session
    Login {
        username: String,
        password: String,
    },
    /// Drop the session, notifying the backend best-effort
    Logout,
    /// Show the current user, revalidating the session first
    Whoami,
    /// List groups
    Groups {
        /// Bypass the cache
        #[arg(long)]
        refresh: bool,
    },
    /// List mail domains
    Domains {
        /// Bypass the cache
        #[arg(long)]
        refresh: bool,
    },
    /// List accounts, including inactive ones
    Accounts {
        /// Bypass the cache
        #[arg(long)]
        refresh: bool,
    },
    /// Show a single account in full
    Account {
        id: i64,
        /// Include all email addresses of the account
        #[arg(long)]
        emails: bool,
    },
    /// Create an account
    CreateAccount {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value_t = 0)]
        quota: i64,
        /// Group the account starts in
        #[arg(long)]
        group: i64,
        /// Create a shared group mailbox instead of an individual one
        #[arg(long)]
        group_account: bool,
        #[arg(long)]
        backup_email: Option<String>,
        /// Force a password change on first login
        #[arg(long)]
        require_password_change: bool,
        /// Send a password reset email to the backup address
        #[arg(long)]
        send_password_reset: bool,
    },
    /// Update core fields of an account
    UpdateAccount {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        quota: Option<i64>,
        #[arg(long, conflicts_with = "clear_backup_email")]
        backup_email: Option<String>,
        /// Remove the backup address
        #[arg(long)]
        clear_backup_email: bool,
    },
    /// Activate or deactivate an account
    SetActive {
        id: i64,
        #[arg(action = clap::ArgAction::Set)]
        active: bool,
    },
    /// Change the password of the logged-in user
    ChangePassword {
        old_password: String,
        new_password: String,
    },
    /// Resolve a path through the navigation guard
    Nav {
        path: String,
    },
}
