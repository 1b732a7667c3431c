//! Status pipeline shared by the poll loop and the manual status command.

use crate::{
    data::{discord::StatusChannel, message_id::MessageIdStore, stats::StatsSource},
    error::AppError,
    model::status::StatusDocument,
    service::{
        render::render_status, snapshot::SnapshotService, status_message::StatusMessageService,
    },
};

pub struct StatusService<'a, S: StatsSource + ?Sized> {
    stats: &'a S,
    catch_all_name: &'a str,
}

impl<'a, S: StatsSource + ?Sized> StatusService<'a, S> {
    pub fn new(stats: &'a S, catch_all_name: &'a str) -> Self {
        Self {
            stats,
            catch_all_name,
        }
    }

    /// Fetches a snapshot and renders it, without touching the status message.
    ///
    /// # Returns
    /// - `Ok(StatusDocument)` - Rendered status
    /// - `Err(AppError::StatsErr)` - Snapshot could not be fetched
    pub async fn report(&self) -> Result<StatusDocument, AppError> {
        let snapshot = SnapshotService::new(self.stats, self.catch_all_name)
            .fetch_snapshot()
            .await?;

        Ok(render_status(&snapshot))
    }

    /// Runs one poll cycle: fetch, render and publish to the status message.
    ///
    /// A failed fetch returns before the status message is resolved, so an
    /// unreachable stats API never causes a message to be posted.
    ///
    /// # Arguments
    /// - `channel` - Channel holding the status message
    /// - `store` - Message id file
    ///
    /// # Returns
    /// - `Ok(u64)` - Id of the updated status message
    /// - `Err(AppError::StatsErr)` - Snapshot could not be fetched, nothing was sent
    /// - `Err(AppError)` - Discord or file error while publishing
    pub async fn refresh<C: StatusChannel + ?Sized>(
        &self,
        channel: &C,
        store: &MessageIdStore,
    ) -> Result<u64, AppError> {
        let document = self.report().await?;

        StatusMessageService::new(channel, store)
            .publish(&document)
            .await
    }
}
