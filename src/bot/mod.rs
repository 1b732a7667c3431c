//! Discord bot integration.
//!
//! The bot keeps a status message in one channel up to date and answers the
//! manual status command in any channel it can read. The poll loop is started
//! from the `ready` event, once the gateway connection is established.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Resolve the guild channels the bot posts into
//! - `GUILD_MESSAGES` - Receive messages to detect the status command
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
