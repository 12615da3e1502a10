// AutomateAI Backend - Mock Gateway Server
// Stand-in backend for the MVP Agent Builder frontend
// Run with: cargo run --bin server

//! # AutomateAI Mock Gateway Binary
//!
//! Starts the HTTP server the agent builder frontend talks to during
//! development. Every answer is canned; see the library docs for the contract.
//!
//! ## Configuration order
//!
//! 1. Built-in defaults (`0.0.0.0:8000`, frontends on ports 3002 and 3000)
//! 2. `gateway.toml` in the working directory, or the file given by `--config`
//! 3. `GATEWAY__*` environment variables (a `.env` file is loaded first)
//! 4. Command line flags
//!
//! ## Rust Learning Notes:
//!
//! ### anyhow in binaries
//! The library exposes precise error enums; the binary only needs to report
//! them, so `anyhow::Result` with `.context(...)` is enough here.

use anyhow::{Context, Result};
use automateai_backend::{GatewayConfig, GatewayServerBuilder};
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "automateai-backend")]
#[command(about = "Mock agent execution backend for the MVP Agent Builder")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(config: &GatewayConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    if let Err(e) = dotenv() {
        // Only warn if .env file is missing - it's optional
        eprintln!("Warning: Could not load .env file: {}", e);
    }

    let cli = Cli::parse();

    let mut config =
        GatewayConfig::load(cli.config.as_deref()).context("Could not load gateway configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config, cli.verbose);

    info!("🚀 Iniciando AutomateAI Backend para MVP Agent Builder...");
    info!("=====================================");
    if let Some(frontend) = config.cors.allowed_origins.first() {
        info!("🌐 Frontend MVP Agent Builder: {}", frontend);
    }
    info!("🔗 Backend API: http://{}", config.server.address());
    info!("❤️ Health Check: http://{}/health", config.server.address());
    info!("🔧 Pressione Ctrl+C para parar");

    GatewayServerBuilder::new()
        .with_config(config)
        .build()
        .run()
        .await
        .map_err(anyhow::Error::from_boxed)
        .context("Gateway server failed")?;

    Ok(())
}
