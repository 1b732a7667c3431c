//! Stats API client.
//!
//! This module provides the `StatsClient` for reading rooms and players from the
//! game-server stats service. All endpoints are plain JSON GETs. Responses are
//! decoded into the wire DTOs of `model::api` and converted to domain models before
//! they leave this module.

use serde::de::DeserializeOwned;
use serenity::async_trait;

use crate::{
    error::stats::StatsError,
    model::{
        api::{PlayerDto, RoomDetailDto, RoomSummaryDto},
        player::PlayerName,
        room::{RoomDetail, RoomSummary},
    },
};

/// Source of the three reads a snapshot is built from.
///
/// Implemented by `StatsClient` over HTTP; tests provide an in-memory source.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Lists all rooms of the application.
    async fn get_rooms(&self) -> Result<Vec<RoomSummary>, StatsError>;

    /// Lists every online player of the application, names normalized.
    async fn get_players(&self) -> Result<Vec<PlayerName>, StatsError>;

    /// Reads one room's detail, flattened from whichever shape the API used.
    async fn get_room_detail(&self, room_id: u64) -> Result<RoomDetail, StatsError>;
}

/// HTTP client for the stats API.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct StatsClient {
    /// Shared HTTP client, configured with the request timeout at startup
    http: reqwest::Client,
    /// API base URL without trailing slash, e.g. `https://api.psrewired.com/us/api`
    base_url: String,
    /// Application id sent as `applicationId` query parameter
    application_id: u64,
}

impl StatsClient {
    /// Creates a new StatsClient instance.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `base_url` - API base URL without trailing slash
    /// - `application_id` - Application whose rooms and players are read
    ///
    /// # Returns
    /// - `StatsClient` - New client instance
    pub fn new(http: reqwest::Client, base_url: String, application_id: u64) -> Self {
        Self {
            http,
            base_url,
            application_id,
        }
    }

    pub fn rooms_url(&self) -> String {
        format!(
            "{}/rooms?applicationId={}",
            self.base_url, self.application_id
        )
    }

    pub fn players_url(&self) -> String {
        format!(
            "{}/universes/players?applicationId={}",
            self.base_url, self.application_id
        )
    }

    pub fn room_detail_url(&self, room_id: u64) -> String {
        format!("{}/rooms/{}", self.base_url, room_id)
    }

    /// Performs a GET and decodes the JSON body.
    ///
    /// # Arguments
    /// - `url` - Full endpoint URL
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded body
    /// - `Err(StatsError::Transport)` - Request failed or status was not 2xx
    /// - `Err(StatsError::MalformedData)` - Body did not decode into `T`
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, StatsError> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        let body = match response {
            Ok(response) => response.bytes().await,
            Err(e) => Err(e),
        }
        .map_err(|source| StatsError::Transport {
            endpoint: url.clone(),
            source,
        })?;

        tracing::debug!(
            "Stats API response from {}: {}",
            url,
            String::from_utf8_lossy(&body)
        );

        decode(&url, &body)
    }
}

#[async_trait]
impl StatsSource for StatsClient {
    async fn get_rooms(&self) -> Result<Vec<RoomSummary>, StatsError> {
        let rooms: Vec<RoomSummaryDto> = self.get_json(self.rooms_url()).await?;

        Ok(rooms.into_iter().map(RoomSummary::from_dto).collect())
    }

    async fn get_players(&self) -> Result<Vec<PlayerName>, StatsError> {
        let players: Vec<PlayerDto> = self.get_json(self.players_url()).await?;

        Ok(players
            .into_iter()
            .map(|player| PlayerName::parse(&player.name))
            .collect())
    }

    async fn get_room_detail(&self, room_id: u64) -> Result<RoomDetail, StatsError> {
        let detail: RoomDetailDto = self.get_json(self.room_detail_url(room_id)).await?;

        Ok(RoomDetail::from_dto(detail))
    }
}

/// Decodes a response body, tagging failures with the endpoint they came from.
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T, StatsError> {
    serde_json::from_slice(body).map_err(|source| StatsError::MalformedData {
        endpoint: endpoint.to_string(),
        source,
    })
}
