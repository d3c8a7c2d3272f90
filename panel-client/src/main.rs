//! Admin panel client CLI

use clap::Parser;
use color_eyre::Result;
use std::io::read_to_string;
use tracing::{debug, info};

use crate::config::{Config, LogFormat};
use crate::context::Context;
use crate::opt::Opt;

mod commands;
mod config;
pub mod context;
mod http;
mod nav;
mod opt;
mod persist;

/// Initializes tracing collection
fn setup_tracing(config: config::Logging) {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let fmt_layer = match config.format {
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
        LogFormat::Compact => fmt::layer().compact().boxed(),
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let filter_layer = config
        .filters
        .into_iter()
        .fold(filter_layer, |layer, filter| layer.add_directive(filter));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let Opt {
        config: mut config_file,
        command,
    } = Opt::parse();

    let config = read_to_string(&mut config_file)?;
    let config: Config = toml::from_str(&config)?;

    setup_tracing(config.logging.clone());
    color_eyre::install()?;

    info!(
        config = ?config_file.path().path(),
        server = %config.server,
        "Tracing initialized, setting up the client"
    );

    let context = Context::with_config(&config)?;

    // Explicit startup step: restore the persisted session and revalidate
    // it before any command runs.
    match context.restore().await {
        Some(user) => debug!(user = %user.username, "Restored persisted session"),
        None => debug!("No persisted session to restore"),
    }

    commands::run(&context, command).await
}
