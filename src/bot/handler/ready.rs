//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. It fires
//! again after every reconnect.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Set the bot's presence
//! - Start the status poll loop, once per process

use serenity::all::{ActivityData, Context, Ready};
use std::sync::atomic::Ordering;

use crate::{scheduler::status_updates, state::AppState};

const PRESENCE: &str = "Monitoring MotorStorm server...";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for setting activity status and HTTP access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing(PRESENCE)));

    if state.poll_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Status poll loop already running");
        return;
    }

    if let Err(e) = status_updates::start_scheduler(state.clone(), ctx.http.clone()).await {
        tracing::error!("Failed to start status poll loop: {}", e);
        // Allow the next ready event to try again
        state.poll_started.store(false, Ordering::SeqCst);
    }
}
