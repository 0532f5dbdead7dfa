mod config;
mod database;
mod entities;
mod http_server;
mod logging;
mod resources;
mod services;
#[cfg(test)]
mod test_utils;

use color_eyre::{Result, eyre::Context};

use crate::{
    config::Config, database::Database, http_server::app::HttpServerConfig,
    logging::init_tracing,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load();
    let tracer_provider = init_tracing(
        env!("CARGO_PKG_NAME"),
        config.otlp_endpoint.as_deref(),
        &config.log_level,
    )?;

    tracing::debug!("Music catalog API starting");

    let database = Database::connect(&config.database_url)
        .await
        .wrap_err("Database is not reachable, aborting")?;

    tracing::info!("Starting HTTP server on port: {}", config.port);
    http_server::app::start(HttpServerConfig {
        port: config.port,
        database,
        request_timeout: config.request_timeout(),
    })
    .await?;

    if let Some(tracer_provider) = tracer_provider {
        tracer_provider
            .shutdown()
            .wrap_err("Failed to flush traces")?;
    }

    Ok(())
}
