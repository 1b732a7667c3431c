//! Discord binding of the status message.
//!
//! The status message keeper only needs to look up, post and edit one message.
//! `StatusChannel` captures exactly that, and `DiscordStatusChannel` implements it
//! with Serenity's HTTP client for a single channel.

use serenity::{
    all::{ChannelId, CreateMessage, EditMessage, MessageId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{error::AppError, model::status::StatusDocument};

/// Message operations the status message keeper relies on.
#[async_trait]
pub trait StatusChannel: Send + Sync {
    /// Checks that the message still exists in the channel.
    async fn fetch_status(&self, message_id: u64) -> Result<(), AppError>;

    /// Posts the document as a new message and returns its id.
    async fn send_status(&self, document: &StatusDocument) -> Result<u64, AppError>;

    /// Replaces the content of an existing message with the document.
    async fn edit_status(&self, message_id: u64, document: &StatusDocument)
        -> Result<(), AppError>;
}

/// Status channel backed by the Discord API.
pub struct DiscordStatusChannel {
    /// Discord HTTP client for sending and editing messages
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordStatusChannel {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }

    /// Checks that the channel exists and is visible to the bot.
    ///
    /// # Returns
    /// - `Ok(())` - Channel resolved
    /// - `Err(AppError::NotFound)` - Channel deleted, unknown or inaccessible
    pub async fn resolve_channel(&self) -> Result<(), AppError> {
        self.http
            .get_channel(self.channel_id)
            .await
            .map_err(|e| {
                AppError::NotFound(format!(
                    "Status channel {} not found: {}",
                    self.channel_id, e
                ))
            })?;

        Ok(())
    }
}

#[async_trait]
impl StatusChannel for DiscordStatusChannel {
    async fn fetch_status(&self, message_id: u64) -> Result<(), AppError> {
        self.http
            .get_message(self.channel_id, to_message_id(message_id)?)
            .await?;

        Ok(())
    }

    async fn send_status(&self, document: &StatusDocument) -> Result<u64, AppError> {
        let embed = document.to_embed(chrono::Utc::now())?;
        let new_message = CreateMessage::new().embed(embed);

        let message = self.channel_id.send_message(&self.http, new_message).await?;

        Ok(message.id.get())
    }

    async fn edit_status(
        &self,
        message_id: u64,
        document: &StatusDocument,
    ) -> Result<(), AppError> {
        let embed = document.to_embed(chrono::Utc::now())?;
        let edit_message = EditMessage::new().embed(embed);

        self.http
            .edit_message(
                self.channel_id,
                to_message_id(message_id)?,
                &edit_message,
                vec![],
            )
            .await?;

        Ok(())
    }
}

fn to_message_id(message_id: u64) -> Result<MessageId, AppError> {
    // MessageId::new panics on zero
    if message_id == 0 {
        return Err(AppError::NotFound(
            "Status message id 0 is invalid".to_string(),
        ));
    }

    Ok(MessageId::new(message_id))
}
