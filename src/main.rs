//! Entry point for the Export Metrics binary.
//!
//! Running this binary starts an HTTP server exposing the calculators.
//! The bind address, batch limit and log filter come from the
//! `METRICS_*` environment variables described in [`export_metrics::config`];
//! `RUST_LOG`, when set, takes precedence over `METRICS_LOG`.

use export_metrics::config::Config;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = export_metrics::api::serve(&config).await {
        error!("Error running server: {:#}", err);
        std::process::exit(1);
    }
}
