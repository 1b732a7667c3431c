//! Room domain models.
//!
//! A room is first known through the room list endpoint (`RoomSummary`), then
//! enriched by its own detail endpoint (`RoomDetail`) and finally resolved into a
//! `Room` once the reconciler has assigned players to it.

use crate::model::{
    api::{RoomDetailDto, RoomDetailEntryDto, RoomSummaryDto},
    player::PlayerName,
};

const UNKNOWN_ROOM_NAME: &str = "Unknown Lobby";
const DEFAULT_MAX_PLAYERS: u32 = 12;

/// Room as declared by the room list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSummary {
    pub id: u64,
    pub name: String,
    pub player_count: u32,
    pub max_players: u32,
}

impl RoomSummary {
    /// Converts a room list entry, filling in the API client's usual fallbacks.
    pub fn from_dto(dto: RoomSummaryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_else(|| UNKNOWN_ROOM_NAME.to_string()),
            player_count: dto.player_count.unwrap_or(0),
            max_players: dto.max_players.unwrap_or(DEFAULT_MAX_PLAYERS),
        }
    }
}

/// Flattened room detail, independent of the response shape it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomDetail {
    /// Display name overriding the room list name, if the detail carried one.
    pub name: Option<String>,
    pub players: Vec<PlayerName>,
}

impl RoomDetail {
    /// Normalizes either detail shape.
    ///
    /// For the array shape the name is taken from the first element only, while
    /// players are collected from every element in order.
    pub fn from_dto(dto: RoomDetailDto) -> Self {
        match dto {
            RoomDetailDto::Single(entry) => Self {
                name: entry.name.clone(),
                players: entry_players(entry),
            },
            RoomDetailDto::Many(entries) => Self {
                name: entries.first().and_then(|entry| entry.name.clone()),
                players: entries.into_iter().flat_map(entry_players).collect(),
            },
        }
    }
}

fn entry_players(entry: RoomDetailEntryDto) -> Vec<PlayerName> {
    entry
        .players
        .unwrap_or_default()
        .into_iter()
        .filter_map(|player| player.name)
        .map(|name| PlayerName::parse(&name))
        .collect()
}

/// Room after reconciliation, as shown in the status message.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: u64,
    /// Name from the room list endpoint.
    pub declared_name: String,
    /// Name to display: the detail name if present, otherwise `declared_name`.
    pub name: String,
    /// Declared player count, forced to 0 when no players could be resolved.
    pub player_count: u32,
    pub max_players: u32,
    pub players: Vec<PlayerName>,
}

impl Room {
    pub fn is_active(&self) -> bool {
        self.player_count > 0
    }
}

#[cfg(test)]
mod tests {
    use test_utils::stats::{room_detail_array, room_detail_object};

    use super::*;

    fn detail(value: serde_json::Value) -> RoomDetail {
        RoomDetail::from_dto(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn summary_falls_back_to_defaults() {
        let dto: RoomSummaryDto = serde_json::from_value(serde_json::json!({ "id": 3 })).unwrap();
        let summary = RoomSummary::from_dto(dto);

        assert_eq!(summary.name, "Unknown Lobby");
        assert_eq!(summary.player_count, 0);
        assert_eq!(summary.max_players, 12);
    }

    #[test]
    fn object_detail_normalizes_players() {
        let detail = detail(room_detail_object(Some("Renamed"), &["1-Alice", "22-Bob"]));

        assert_eq!(detail.name.as_deref(), Some("Renamed"));
        assert_eq!(
            detail.players,
            vec![PlayerName::parse("Alice"), PlayerName::parse("Bob")]
        );
    }

    #[test]
    fn array_detail_takes_name_from_first_element_only() {
        let detail = detail(room_detail_array(&[
            (None, vec!["1-Alice"]),
            (Some("Ignored"), vec!["2-Bob"]),
        ]));

        assert_eq!(detail.name, None);
        assert_eq!(
            detail.players,
            vec![PlayerName::parse("Alice"), PlayerName::parse("Bob")]
        );
    }

    #[test]
    fn skips_players_without_name_and_missing_lists() {
        let detail = detail(serde_json::json!([
            { "name": "Lobby", "players": [{ "name": "1-Alice" }, { "id": 5 }] },
            { "state": "open" },
        ]));

        assert_eq!(detail.name.as_deref(), Some("Lobby"));
        assert_eq!(detail.players, vec![PlayerName::parse("Alice")]);
    }

    #[test]
    fn empty_array_detail_has_nothing() {
        assert_eq!(detail(serde_json::json!([])), RoomDetail::default());
    }
}
