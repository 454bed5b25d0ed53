//! Report one user assignment change to the user sync service.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use user_sync::outbound::oauth::OAuthHttpTransportFactory;
use user_sync::settings::UserSyncSettings;
use user_sync::{SyncIntent, SyncedUser, UserSyncApiClient, UserSyncError};

/// `user-sync` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-sync",
    about = "Notify the user sync service that a user was assigned or unassigned",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Report that the user gained access to the application.
    Assign(SyncArgs),
    /// Report that the user lost access to the application.
    Unassign(SyncArgs),
}

impl Command {
    fn into_parts(self) -> (SyncIntent, SyncArgs) {
        match self {
            Self::Assign(args) => (SyncIntent::Assign, args),
            Self::Unassign(args) => (SyncIntent::Unassign, args),
        }
    }
}

#[derive(Debug, Clone, Args)]
struct SyncArgs {
    /// Marketplace base URL, e.g. `https://marketplace.example.com`.
    #[arg(long = "host-url", value_name = "url")]
    host_url: String,
    /// OAuth consumer key.
    #[arg(long = "oauth-key", value_name = "key")]
    oauth_key: String,
    /// OAuth consumer secret.
    #[arg(long = "oauth-secret", value_name = "secret")]
    oauth_secret: String,
    /// Identifier of the application developer (ISV).
    #[arg(long = "developer-identifier", value_name = "id")]
    developer_identifier: String,
    /// Marketplace account that owns the subscription.
    #[arg(long = "account-identifier", value_name = "id")]
    account_identifier: String,
    /// Marketplace identifier of the user.
    #[arg(long = "user-identifier", value_name = "id")]
    user_identifier: String,
    /// User email address.
    #[arg(long, value_name = "address")]
    email: String,
    /// Given name; empty when omitted.
    #[arg(long = "first-name", value_name = "name", default_value = "")]
    first_name: String,
    /// Family name; empty when omitted.
    #[arg(long = "last-name", value_name = "name", default_value = "")]
    last_name: String,
    /// Login name.
    #[arg(long = "user-name", value_name = "name")]
    user_name: String,
}

impl SyncArgs {
    fn synced_user(&self) -> SyncedUser {
        SyncedUser {
            developer_identifier: self.developer_identifier.clone(),
            account_identifier: self.account_identifier.clone(),
            user_identifier: self.user_identifier.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            user_name: self.user_name.clone(),
        }
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = load_settings()?;

    let client = UserSyncApiClient::new(Arc::new(OAuthHttpTransportFactory::from_settings(
        &settings,
    )));
    let (intent, sync_args) = args.command.into_parts();
    info!(
        action = intent.action(),
        host_url = %sync_args.host_url,
        user_identifier = %sync_args.user_identifier,
        "sending user sync task"
    );

    client
        .sync(
            &sync_args.host_url,
            &sync_args.oauth_key,
            &sync_args.oauth_secret,
            &sync_args.synced_user(),
            intent,
        )
        .map_err(describe_failure)?;

    writeln!(io::stdout(), "status=synced")?;
    writeln!(io::stdout(), "action={}", intent.action())
}

fn load_settings() -> io::Result<UserSyncSettings> {
    UserSyncSettings::load_from_iter([OsString::from("user-sync")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))
}

fn describe_failure(error: UserSyncError) -> io::Error {
    match error {
        UserSyncError::RateLimited => {
            io::Error::other("user sync rate limited; retry later")
        }
        UserSyncError::SyncFailed { code, message } => {
            io::Error::other(format!("user sync rejected ({code}): {message}"))
        }
        UserSyncError::Transport { message } => {
            io::Error::other(format!("user sync transport failed: {message}"))
        }
    }
}
