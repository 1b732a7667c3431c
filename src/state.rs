//! Application state shared by the bot handlers and the poll loop.
//!
//! The state is initialized once during startup and cloned into the Discord
//! event handler and the scheduler job. All fields are cheap to clone:
//! - `StatsClient` wraps a `reqwest::Client`, which uses an `Arc` internally
//! - `MessageIdStore` only holds a path
//! - the cycle lock and the poll flag are shared through `Arc`

use serenity::all::ChannelId;
use std::{
    sync::{atomic::AtomicBool, Arc},
    time::Duration,
};
use tokio::sync::Mutex;

use crate::{
    config::Config,
    data::{message_id::MessageIdStore, stats::StatsClient},
};

#[derive(Clone)]
pub struct AppState {
    /// Client for the game-server stats API.
    pub stats: StatsClient,

    /// File holding the id of the status message.
    pub store: MessageIdStore,

    /// Channel the status message is posted in.
    pub status_channel_id: ChannelId,

    /// Period of the poll loop.
    pub poll_interval: Duration,

    /// Prefix of the manual status command, e.g. `!` for `!status`.
    pub command_prefix: String,

    /// Display name of the lobby collecting unassigned players.
    pub catch_all_lobby_name: String,

    /// Held for the duration of a poll cycle so that cycles never overlap.
    pub cycle_lock: Arc<Mutex<()>>,

    /// Set once the poll loop has been started.
    ///
    /// Discord fires `ready` again after every reconnect; the flag keeps the
    /// loop from being scheduled twice.
    pub poll_started: Arc<AtomicBool>,
}

impl AppState {
    /// Creates the application state from configuration.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `http_client` - HTTP client for the stats API
    ///
    /// # Returns
    /// - `AppState` - Initialized state with no poll loop running yet
    pub fn new(config: &Config, http_client: reqwest::Client) -> Self {
        Self {
            stats: StatsClient::new(
                http_client,
                config.stats_api_url.clone(),
                config.stats_application_id,
            ),
            store: MessageIdStore::new(config.message_id_file.clone()),
            status_channel_id: ChannelId::new(config.status_channel_id),
            poll_interval: config.poll_interval,
            command_prefix: config.command_prefix.clone(),
            catch_all_lobby_name: config.catch_all_lobby_name.clone(),
            cycle_lock: Arc::new(Mutex::new(())),
            poll_started: Arc::new(AtomicBool::new(false)),
        }
    }
}
