mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::setup_logger(&config.log_level);
    let http_client = startup::setup_reqwest_client(&config)?;

    let state = AppState::new(&config, http_client);

    tracing::info!(
        "Starting status bot for channel {} (stats API {})",
        config.status_channel_id,
        config.stats_api_url
    );

    // The poll loop is started from the bot's ready event
    let client = bot::start::init_bot(&config, state).await?;

    if let Err(e) = bot::start::start_bot(client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
