//! Admin Config

use clap::Args;

/// Back-office access settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Bearer token required by the lead listing; the listing is open when unset
    #[arg(long, env = "ADMIN_TOKEN", hide_env_values = true)]
    pub admin_token: Option<String>,
}
