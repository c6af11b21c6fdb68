//! Wires the order services to their adapters and bootstraps configuration
//! and logging.

pub mod config;
pub mod telemetry;

mod service_provider;

pub use service_provider::ServiceProvider;

/// Loads configuration, starts logging and builds every service.
pub fn bootstrap() -> anyhow::Result<ServiceProvider> {
    let config = config::SystemConfig::load()?;
    telemetry::initialize_telemetry(&config.telemetry)?;
    let provider = ServiceProvider::build(&config)?;
    tracing::info!(blob = ?config.blob, "order system ready");
    Ok(provider)
}
