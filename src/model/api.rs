//! Wire types of the game-server stats API.
//!
//! These structs mirror the JSON the API returns and are converted into domain
//! models at the data layer boundary (see `model::room`). Optional fields carry
//! the same fallbacks the API's own web client applies.

use serde::Deserialize;

/// Entry of `GET /rooms?applicationId=..`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub player_count: Option<u32>,
    #[serde(default)]
    pub max_players: Option<u32>,
}

/// Entry of `GET /universes/players?applicationId=..`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDto {
    pub name: String,
}

/// Player entry nested in a room detail response. Entries without a name are skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomPlayerDto {
    #[serde(default)]
    pub name: Option<String>,
}

/// One object of a room detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomDetailEntryDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<RoomPlayerDto>>,
}

/// Response of `GET /rooms/{id}`.
///
/// The endpoint answers with either a single object or an array of objects.
/// The array shape is tried first; anything that is neither fails to decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RoomDetailDto {
    Many(Vec<RoomDetailEntryDto>),
    Single(RoomDetailEntryDto),
}

#[cfg(test)]
mod tests {
    use test_utils::stats::{room_detail_array, room_detail_object, room_json};

    use super::*;

    #[test]
    fn decodes_room_summary() {
        let dto: RoomSummaryDto =
            serde_json::from_value(room_json(7, "Lobby A", 3, 12)).unwrap();

        assert_eq!(dto.id, 7);
        assert_eq!(dto.name.as_deref(), Some("Lobby A"));
        assert_eq!(dto.player_count, Some(3));
        assert_eq!(dto.max_players, Some(12));
    }

    #[test]
    fn room_summary_requires_id() {
        let result = serde_json::from_value::<RoomSummaryDto>(serde_json::json!({
            "name": "Lobby A",
            "playerCount": 1,
        }));

        assert!(result.is_err());
    }

    #[test]
    fn player_requires_name() {
        let result = serde_json::from_value::<PlayerDto>(serde_json::json!({ "onlineId": "x" }));

        assert!(result.is_err());
    }

    #[test]
    fn decodes_object_shaped_detail() {
        let dto: RoomDetailDto =
            serde_json::from_value(room_detail_object(Some("Renamed"), &["1-Alice"])).unwrap();

        assert!(matches!(dto, RoomDetailDto::Single(ref entry) if entry.name.as_deref() == Some("Renamed")));
    }

    #[test]
    fn decodes_array_shaped_detail() {
        let dto: RoomDetailDto = serde_json::from_value(room_detail_array(&[
            (Some("Renamed"), vec!["1-Alice"]),
            (None, vec!["2-Bob"]),
        ]))
        .unwrap();

        match dto {
            RoomDetailDto::Many(entries) => assert_eq!(entries.len(), 2),
            RoomDetailDto::Single(_) => panic!("array decoded as single object"),
        }
    }

    #[test]
    fn rejects_non_object_detail() {
        assert!(serde_json::from_value::<RoomDetailDto>(serde_json::json!("offline")).is_err());
        assert!(serde_json::from_value::<RoomDetailDto>(serde_json::Value::Null).is_err());
    }
}
