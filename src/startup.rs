use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, error::AppError};

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence; without it only this crate logs, at the
/// configured level.
///
/// # Arguments
/// - `default_log_level` - Level used when `RUST_LOG` is unset, e.g. `"debug"`
pub fn setup_logger(default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={}",
                    env!("CARGO_PKG_NAME").replace('-', "_"),
                    default_log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the HTTP client used for stats API reads.
///
/// # Arguments
/// - `config` - Application configuration containing the request timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    Ok(client)
}
