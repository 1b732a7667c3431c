//! Rendered status document.
//!
//! The renderer produces a `StatusDocument` instead of a Discord embed so that
//! rendering stays free of clocks and platform types. The embed is built at the
//! last moment, when the document is sent or edited.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::error::{internal::InternalError, AppError};

/// One titled section of the status document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl StatusField {
    pub fn chars(&self) -> usize {
        self.name.chars().count() + self.value.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDocument {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<StatusField>,
    pub footer: String,
}

impl StatusDocument {
    /// Looks up a section by its exact name.
    pub fn field(&self, name: &str) -> Option<&StatusField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Number of characters Discord counts against the embed total.
    ///
    /// Covers title, description, footer and every field's name and value.
    pub fn embed_chars(&self) -> usize {
        self.title.chars().count()
            + self.description.chars().count()
            + self.footer.chars().count()
            + self.fields.iter().map(StatusField::chars).sum::<usize>()
    }

    /// Builds the Discord embed for this document, stamped with `now`.
    ///
    /// # Arguments
    /// - `now` - Time shown next to the footer as the last update
    ///
    /// # Returns
    /// - `Ok(CreateEmbed)` - Embed ready for sending or editing
    /// - `Err(AppError::InternalError)` - `now` is outside Discord's timestamp range
    pub fn to_embed(&self, now: DateTime<Utc>) -> Result<CreateEmbed, AppError> {
        let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
            AppError::InternalError(InternalError::InvalidDiscordTimestamp {
                timestamp: now.timestamp(),
                reason: e.to_string(),
            })
        })?;

        let mut embed = CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .color(self.color);

        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        Ok(embed
            .footer(CreateEmbedFooter::new(&self.footer))
            .timestamp(timestamp))
    }
}
