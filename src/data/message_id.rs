//! Durable slot for the status message id.
//!
//! The bot keeps exactly one status message alive. Its id is written to a plain
//! text file so that restarts keep editing the same message instead of posting a
//! new one.

use std::{io::ErrorKind, path::PathBuf};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Repository over the message id file.
#[derive(Debug, Clone)]
pub struct MessageIdStore {
    path: PathBuf,
}

impl MessageIdStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the stored message id.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - File exists and holds a decimal id
    /// - `Ok(None)` - No file yet
    /// - `Err(AppError::InternalError)` - File contents are not an id
    /// - `Err(AppError::IoErr)` - File exists but could not be read
    pub async fn load(&self) -> Result<Option<u64>, AppError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(parse_u64_from_string(&contents)?))
    }

    /// Overwrites the stored message id.
    ///
    /// # Arguments
    /// - `message_id` - Id of the freshly posted status message
    ///
    /// # Returns
    /// - `Ok(())` - Id written
    /// - `Err(AppError::IoErr)` - File could not be written
    pub async fn save(&self, message_id: u64) -> Result<(), AppError> {
        tokio::fs::write(&self.path, message_id.to_string()).await?;

        Ok(())
    }
}
