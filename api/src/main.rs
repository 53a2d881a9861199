mod dto;
mod routes;

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schedly-api")]
#[command(about = "Scheduling service for task lists", long_about = None)]
struct Cli {
    /// Address to bind the HTTP server on
    #[arg(long, env = "SCHEDLY_ADDR", default_value = "127.0.0.1:8000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    info!(addr = %cli.addr, "listening");
    axum::serve(listener, routes::router()).await?;

    Ok(())
}
