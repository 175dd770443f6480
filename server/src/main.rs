use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod http;
mod relay;
mod service;

use config::read_config;
use service::{ESMRegistry, FolioService};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/folio/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise info, without the per-frame chatter from the http stack
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,h2=warn,hyper=warn,rustls=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // both crypto backends can end up in the tree, so pick one before any tls is attempted
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        info!("rustls crypto provider already installed");
    }

    info!("folio server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!("starting core services");

    let registry = ESMRegistry::new();

    // the http service looks up the relay sender when it starts, so the relay goes first
    let relay_svc = relay::svc::RelayService::create(config.clone(), &registry)?;
    let http_svc = http::svc::HttpService::create(config.clone(), &registry)?;

    relay_svc.start(&registry).await?;
    http_svc.start(&registry).await?;

    info!("startup complete!");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("shutting down");
    Ok(())
}
