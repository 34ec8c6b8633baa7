use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::net::IpAddr;
use std::path::PathBuf;
use tether_server::{DEFAULT_PORT, ServerConfig, TetherServer, default_static_dir};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Single-room WebRTC signaling relay.
#[derive(Parser, Debug)]
#[command(name = "tether", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "TETHER_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    #[arg(short, long, env = "TETHER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory containing panel.html. Defaults to the install directory.
    #[arg(long, env = "TETHER_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            static_dir: self.static_dir.unwrap_or_else(default_static_dir),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    init_tracing();

    println!("{}", "Starting signaling server...".green().bold());
    info!("Configuration: {:?}", config);

    let server = TetherServer::bind(&config)
        .await
        .context("Failed to start signaling server")?;
    server.run().await.context("Signaling server stopped")?;

    Ok(())
}
