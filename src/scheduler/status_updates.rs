use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::discord::DiscordStatusChannel,
    error::AppError,
    service::status::StatusService,
    state::AppState,
};

/// Starts the status poll loop
///
/// Runs one cycle right away, then one every `state.poll_interval`. A failing
/// cycle is logged and the loop carries on with the next tick.
///
/// # Arguments
/// - `state`: Shared application state
/// - `discord_http`: Discord HTTP client for editing the status message
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_state = state.clone();
    let job_http = discord_http.clone();

    let job = Job::new_repeated_async(state.poll_interval, move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            run_status_cycle(&state, http).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Status poll loop started, updating every {}s",
        state.poll_interval.as_secs()
    );

    tokio::spawn(async move {
        run_status_cycle(&state, discord_http).await;
    });

    Ok(())
}

/// Runs a single poll cycle, skipping it if the previous one is still running
pub async fn run_status_cycle(state: &AppState, discord_http: Arc<Http>) {
    let Some(_guard) = try_begin_cycle(&state.cycle_lock) else {
        return;
    };

    let channel = DiscordStatusChannel::new(discord_http, state.status_channel_id);

    if let Err(e) = channel.resolve_channel().await {
        tracing::error!("Skipping status update: {}", e);
        return;
    }

    match StatusService::new(&state.stats, &state.catch_all_lobby_name)
        .refresh(&channel, &state.store)
        .await
    {
        Ok(message_id) => tracing::info!("Status updated (message {})", message_id),
        Err(AppError::StatsErr(e)) => {
            tracing::warn!("Skipping status update, stats API unavailable: {}", e)
        }
        Err(e) => tracing::error!("Error updating status message: {}", e),
    }
}

/// Claims the cycle lock for one poll cycle.
///
/// # Returns
/// - `Some(guard)` - No other cycle is running; the lock is held until dropped
/// - `None` - A cycle is still in flight and this tick is skipped
fn try_begin_cycle(cycle_lock: &Mutex<()>) -> Option<MutexGuard<'_, ()>> {
    match cycle_lock.try_lock() {
        Ok(guard) => Some(guard),
        Err(_) => {
            tracing::warn!("Previous status update still running, skipping this tick");
            None
        }
    }
}
