use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use sustainer_core::models::SubscriberId;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sustainer")]
#[command(author, version, about = "Sustainer - resolve donation badges and subscription status from a snapshot")]
pub struct Args {
    /// JSON snapshot of the level catalog, subscriptions and redemption queue
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Base64 subscriber id whose subscription should be shown
    #[arg(long)]
    pub subscriber_id: Option<SubscriberId>,

    /// Use dark-theme badge icons
    #[arg(long, default_value = "false")]
    pub dark: bool,

    /// Directory holding `<badge id>/{light16,dark16,universal160}.png`
    #[arg(long, env = "SUSTAINER_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Treat a redemption as in flight regardless of the snapshot's queue counts
    #[arg(long, default_value = "false")]
    pub pending: bool,

    /// The device can compose a support email
    #[arg(long, default_value = "false")]
    pub support_email: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
