//! Status message keeper.
//!
//! The bot owns one status message which it edits in place on every poll
//! cycle. The message's id lives in the message id file. Whenever that id
//! cannot be used (no file, garbage in the file, message deleted, Discord
//! error) a replacement message is posted and its id stored instead.

use crate::{
    data::{discord::StatusChannel, message_id::MessageIdStore},
    error::AppError,
    model::status::StatusDocument,
};

/// Result of resolving the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusHandle {
    pub message_id: u64,
    /// Whether the message was just posted, already showing the document.
    pub created: bool,
}

pub struct StatusMessageService<'a, C: StatusChannel + ?Sized> {
    channel: &'a C,
    store: &'a MessageIdStore,
}

impl<'a, C: StatusChannel + ?Sized> StatusMessageService<'a, C> {
    pub fn new(channel: &'a C, store: &'a MessageIdStore) -> Self {
        Self { channel, store }
    }

    /// Resolves the stored status message, posting a new one if needed.
    ///
    /// # Arguments
    /// - `document` - Content of the message if a new one has to be posted
    ///
    /// # Returns
    /// - `Ok(StatusHandle)` - Id of the live status message
    /// - `Err(AppError)` - Posting the replacement or storing its id failed
    pub async fn get_or_create(&self, document: &StatusDocument) -> Result<StatusHandle, AppError> {
        if let Some(message_id) = self.find_existing().await {
            return Ok(StatusHandle {
                message_id,
                created: false,
            });
        }

        let message_id = self.channel.send_status(document).await?;
        self.store.save(message_id).await?;

        tracing::info!("Posted new status message {}", message_id);

        Ok(StatusHandle {
            message_id,
            created: true,
        })
    }

    /// Shows the document in the status message.
    ///
    /// Edits the existing message, or posts a new one when none can be resolved.
    ///
    /// # Returns
    /// - `Ok(u64)` - Id of the message now showing the document
    /// - `Err(AppError)` - Discord or file error
    pub async fn publish(&self, document: &StatusDocument) -> Result<u64, AppError> {
        let handle = self.get_or_create(document).await?;

        if !handle.created {
            self.channel
                .edit_status(handle.message_id, document)
                .await?;
        }

        Ok(handle.message_id)
    }

    /// Loads the stored id and checks that the message still exists.
    async fn find_existing(&self) -> Option<u64> {
        let message_id = match self.store.load().await {
            Ok(Some(message_id)) => message_id,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Ignoring unusable status message id: {}", e);
                return None;
            }
        };

        match self.channel.fetch_status(message_id).await {
            Ok(()) => Some(message_id),
            Err(e) => {
                tracing::warn!(
                    "Status message {} could not be fetched, posting a replacement: {}",
                    message_id,
                    e
                );
                None
            }
        }
    }
}
