//! Manual status command.
//!
//! `<prefix>status` fetches and renders the status on demand and posts it as a
//! new message in the channel it was typed in. The persisted status message is
//! left untouched.

use serenity::all::{Context, Message};

use crate::{
    data::discord::{DiscordStatusChannel, StatusChannel},
    service::status::StatusService,
    state::AppState,
};

pub const FAILURE_REPLY: &str = "Failed to fetch server status.";

/// Checks whether a message invokes the status command.
///
/// # Arguments
/// - `content` - Message text
/// - `prefix` - Configured command prefix
///
/// # Returns
/// - `true` - Text is exactly `<prefix>status`, ignoring surrounding whitespace
pub fn is_status_command(content: &str, prefix: &str) -> bool {
    content
        .trim()
        .strip_prefix(prefix)
        .is_some_and(|command| command == "status")
}

/// Handle message creation in a channel
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot || !is_status_command(&message.content, &state.command_prefix) {
        return;
    }

    tracing::info!(
        "Status requested by {} in channel {}",
        message.author.name,
        message.channel_id
    );

    let report = StatusService::new(&state.stats, &state.catch_all_lobby_name)
        .report()
        .await;

    match report {
        Ok(document) => {
            let channel = DiscordStatusChannel::new(ctx.http.clone(), message.channel_id);
            if let Err(e) = channel.send_status(&document).await {
                tracing::error!(
                    "Failed to send status to channel {}: {}",
                    message.channel_id,
                    e
                );
            }
        }
        Err(e) => {
            tracing::error!("Failed to fetch server status: {}", e);

            if let Err(e) = message.channel_id.say(&ctx.http, FAILURE_REPLY).await {
                tracing::error!(
                    "Failed to send failure reply to channel {}: {}",
                    message.channel_id,
                    e
                );
            }
        }
    }
}
