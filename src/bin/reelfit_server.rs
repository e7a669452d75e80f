// ABOUTME: Server binary wiring config, logging, database, and the HTTP router together
// ABOUTME: Serves the reelfit API with graceful shutdown on ctrl-c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

//! # Reelfit API Server Binary
//!
//! Starts the HTTP API backed by `SQLite`. Configuration comes from the
//! environment (`HTTP_PORT`, `DATABASE_URL`, `LOG_LEVEL`), with the port
//! overridable on the command line.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use reelfit::{config::environment::ServerConfig, database::Database, logging, routes};
use tracing::info;

#[derive(Parser)]
#[command(name = "reelfit-server")]
#[command(about = "Reelfit API - movie rental and gym activity tracker")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Reelfit API");
    info!("{}", config.summary());

    let database = Arc::new(Database::new(&config.database.url.to_connection_string()).await?);
    info!("Database initialized and migrated");

    let app = routes::router(database);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
