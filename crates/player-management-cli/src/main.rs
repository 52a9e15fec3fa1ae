//! Command-line demo for the Player Management client.
//!
//! Reads credentials from flags, `PLAYER_MANAGEMENT_*` environment
//! variables, or a `.env` file in the working directory.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use player_management::{ClientConfig, PlayerManagementClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "player-management-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Account ID
    #[arg(short, long, env = "PLAYER_MANAGEMENT_ACCOUNT_ID")]
    account_id: String,
    /// OAuth access token
    #[arg(short = 't', long, env = "PLAYER_MANAGEMENT_ACCESS_TOKEN")]
    access_token: String,
    /// API base URL
    #[arg(long, env = "PLAYER_MANAGEMENT_BASE_URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all players in the account
    ListPlayers,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before clap so env-backed flags see it.
    let dotenv = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let cli = Cli::parse();

    let mut config = ClientConfig::with_token(cli.account_id, cli.access_token);
    if let Some(base_url) = cli.base_url {
        config = config.base_url(base_url);
    }
    let client = PlayerManagementClient::new(config)?;

    match cli.command {
        Commands::ListPlayers => list_players(&client).await,
    }
}

async fn list_players(client: &PlayerManagementClient) -> Result<()> {
    let resp = client.list_players().await?;
    if !resp.is_success() {
        tracing::error!(status = resp.status.as_u16(), "List players failed");
        bail!("list players failed ({}): {}", resp.status, resp.body);
    }

    let body: serde_json::Value = resp.json()?;
    let players = body
        .get("items")
        .cloned()
        .unwrap_or(serde_json::Value::Null);
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "players": players }))?
    );
    Ok(())
}
