//! Error types for the status bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Nothing in the bot
//! surfaces these errors to Discord users directly: the poll loop logs them and waits
//! for the next tick, and the manual status command replies with a generic failure
//! message.

pub mod config;
pub mod internal;
pub mod stats;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, stats::StatsError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion so that `?` can be used
/// across the data, service and scheduler layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Aborts startup as configuration issues prevent normal operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Stats API read failure.
    ///
    /// Aborts the current fetch cycle as a unit; no partial snapshot is produced.
    #[error(transparent)]
    StatsErr(#[from] StatsError),

    /// HTTP client construction error from reqwest.
    ///
    /// Only raised at startup; request failures are reported as `StatsErr`.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Poll scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error while reading or writing the message id file.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal failure, see `InternalError`.
    #[error(transparent)]
    InternalError(#[from] InternalError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
