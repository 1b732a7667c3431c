//! Point-in-time view of the game server.
//!
//! A `Snapshot` is rebuilt from live reads on every poll cycle, rendered once
//! and dropped. Nothing about previous cycles is retained.

use crate::model::{player::PlayerName, room::Room};

/// Synthetic lobby holding every online player not found in a specific room.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchAllLobby {
    pub name: String,
    /// Sum of all rooms' declared player counts, taken before count correction.
    pub player_count: u64,
    pub players: Vec<PlayerName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Rooms whose (corrected) player count is above zero.
    pub active_lobbies: usize,
    /// Sum of declared player counts before count correction.
    pub total_players: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Rooms in the order the room list endpoint returned them.
    pub rooms: Vec<Room>,
    pub catch_all: CatchAllLobby,
    pub summary: Summary,
}
