use serde::de::DeserializeOwned;
use serde_json::Value;
use serenity::async_trait;
use std::sync::Mutex;

use crate::{
    data::{
        discord::StatusChannel,
        message_id::MessageIdStore,
        stats::{decode, StatsSource},
    },
    error::{stats::StatsError, AppError},
    model::{
        api::{PlayerDto, RoomDetailDto, RoomSummaryDto},
        player::PlayerName,
        room::{Room, RoomDetail, RoomSummary},
        snapshot::{CatchAllLobby, Snapshot, Summary},
        status::StatusDocument,
    },
    service::{
        render::{self, render_status},
        snapshot::{reconcile, SnapshotService},
        status::StatusService,
        status_message::StatusMessageService,
    },
};
use test_utils::{
    builder::TestBuilder,
    stats::{room_detail_array, room_detail_object, StatsFixture},
};

mod snapshot;

const CATCH_ALL: &str = "Pacific Rift US";

/// In-memory stats source serving a `StatsFixture`.
///
/// Payloads go through the same JSON decoding as real responses. A room
/// without a detail in the fixture answers `null`, which fails to decode.
pub struct FixtureStats {
    fixture: StatsFixture,
    /// Endpoints read so far, in order
    reads: Mutex<Vec<String>>,
}

impl FixtureStats {
    pub fn new(fixture: StatsFixture) -> Self {
        Self {
            fixture,
            reads: Mutex::new(Vec::new()),
        }
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    fn read<T: DeserializeOwned>(&self, endpoint: String, body: Value) -> Result<T, StatsError> {
        self.reads.lock().unwrap().push(endpoint.clone());
        decode(&endpoint, &serde_json::to_vec(&body).unwrap())
    }
}

#[async_trait]
impl StatsSource for FixtureStats {
    async fn get_rooms(&self) -> Result<Vec<RoomSummary>, StatsError> {
        let rooms: Vec<RoomSummaryDto> = self.read("rooms".to_string(), self.fixture.rooms_json())?;

        Ok(rooms.into_iter().map(RoomSummary::from_dto).collect())
    }

    async fn get_players(&self) -> Result<Vec<PlayerName>, StatsError> {
        let players: Vec<PlayerDto> =
            self.read("players".to_string(), self.fixture.players_json())?;

        Ok(players
            .into_iter()
            .map(|player| PlayerName::parse(&player.name))
            .collect())
    }

    async fn get_room_detail(&self, room_id: u64) -> Result<RoomDetail, StatsError> {
        let body = self
            .fixture
            .room_detail_json(room_id)
            .unwrap_or(Value::Null);
        let detail: RoomDetailDto = self.read(format!("rooms/{}", room_id), body)?;

        Ok(RoomDetail::from_dto(detail))
    }
}

/// What happened to an in-memory channel.
#[derive(Default)]
pub struct ChannelLog {
    /// Ids of messages that currently exist
    pub live: Vec<u64>,
    pub sent: Vec<(u64, StatusDocument)>,
    pub edits: Vec<(u64, StatusDocument)>,
}

/// In-memory Discord channel.
///
/// New messages get ids counting up from 1000.
#[derive(Default)]
pub struct RecordingChannel {
    log: Mutex<ChannelLog>,
}

impl RecordingChannel {
    pub fn with_live_message(message_id: u64) -> Self {
        let channel = Self::default();
        channel.log.lock().unwrap().live.push(message_id);
        channel
    }

    /// Deletes a message, as a moderator would.
    pub fn delete(&self, message_id: u64) {
        self.log
            .lock()
            .unwrap()
            .live
            .retain(|live| *live != message_id);
    }

    pub fn sent_count(&self) -> usize {
        self.log.lock().unwrap().sent.len()
    }

    pub fn edit_count(&self) -> usize {
        self.log.lock().unwrap().edits.len()
    }

    pub fn edited_ids(&self) -> Vec<u64> {
        self.log
            .lock()
            .unwrap()
            .edits
            .iter()
            .map(|(id, _)| *id)
            .collect()
    }
}

#[async_trait]
impl StatusChannel for RecordingChannel {
    async fn fetch_status(&self, message_id: u64) -> Result<(), AppError> {
        if self.log.lock().unwrap().live.contains(&message_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Unknown message {}", message_id)))
        }
    }

    async fn send_status(&self, document: &StatusDocument) -> Result<u64, AppError> {
        let mut log = self.log.lock().unwrap();
        let message_id = 1000 + log.sent.len() as u64;

        log.live.push(message_id);
        log.sent.push((message_id, document.clone()));

        Ok(message_id)
    }

    async fn edit_status(
        &self,
        message_id: u64,
        document: &StatusDocument,
    ) -> Result<(), AppError> {
        let mut log = self.log.lock().unwrap();
        if !log.live.contains(&message_id) {
            return Err(AppError::NotFound(format!("Unknown message {}", message_id)));
        }

        log.edits.push((message_id, document.clone()));

        Ok(())
    }
}

/// The scenario used throughout: one lobby with Alice and Bob, Carol idle.
pub fn lobby_a_fixture() -> StatsFixture {
    StatsFixture::new()
        .with_room(1, "Lobby A", 2, 12)
        .with_room_detail(1, room_detail_object(None, &["1-Alice", "2-Bob"]))
        .with_players(&["1-Alice", "2-Bob", "3-Carol"])
}

pub fn names(names: &[&str]) -> Vec<PlayerName> {
    names.iter().map(|name| PlayerName::parse(name)).collect()
}

pub fn room(name: &str, player_count: u32, max_players: u32, players: &[&str]) -> Room {
    Room {
        id: 1,
        declared_name: name.to_string(),
        name: name.to_string(),
        player_count,
        max_players,
        players: names(players),
    }
}

pub fn snapshot_with_rooms(rooms: Vec<Room>) -> Snapshot {
    let total_players = rooms.iter().map(|room| u64::from(room.player_count)).sum();
    let active_lobbies = rooms.iter().filter(|room| room.is_active()).count();

    Snapshot {
        rooms,
        catch_all: CatchAllLobby {
            name: CATCH_ALL.to_string(),
            player_count: total_players,
            players: Vec::new(),
        },
        summary: Summary {
            active_lobbies,
            total_players,
        },
    }
}
