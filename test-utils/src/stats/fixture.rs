use std::collections::HashMap;

use serde_json::Value;

use super::{player_json, room_detail_object, room_json};

/// Describes everything the stats API would return during one poll cycle.
///
/// Rooms added without an explicit detail get an object-shaped detail with no
/// players, which mirrors an idle lobby.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::stats::{room_detail_object, StatsFixture};
///
/// let fixture = StatsFixture::new()
///     .with_room(1, "Lobby A", 2, 12)
///     .with_room_detail(1, room_detail_object(None, &["1-Alice", "2-Bob"]))
///     .with_players(&["1-Alice", "2-Bob", "3-Carol"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatsFixture {
    rooms: Vec<Value>,
    players: Vec<Value>,
    details: HashMap<u64, Value>,
}

impl StatsFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room to the room list endpoint.
    pub fn with_room(mut self, id: u64, name: &str, player_count: u32, max_players: u32) -> Self {
        self.rooms
            .push(room_json(id, name, player_count, max_players));
        self.details
            .entry(id)
            .or_insert_with(|| room_detail_object(None, &[]));
        self
    }

    /// Replaces the detail response of a room.
    pub fn with_room_detail(mut self, id: u64, detail: Value) -> Self {
        self.details.insert(id, detail);
        self
    }

    /// Removes the detail response of a room, as if the endpoint failed.
    pub fn without_room_detail(mut self, id: u64) -> Self {
        self.details.remove(&id);
        self
    }

    /// Adds players to the global player list endpoint.
    pub fn with_players(mut self, raw_names: &[&str]) -> Self {
        self.players
            .extend(raw_names.iter().map(|name| player_json(name)));
        self
    }

    /// Response body of the room list endpoint.
    pub fn rooms_json(&self) -> Value {
        Value::Array(self.rooms.clone())
    }

    /// Response body of the global player list endpoint.
    pub fn players_json(&self) -> Value {
        Value::Array(self.players.clone())
    }

    /// Response body of a room's detail endpoint, `None` if it should fail.
    pub fn room_detail_json(&self, id: u64) -> Option<Value> {
        self.details.get(&id).cloned()
    }
}
