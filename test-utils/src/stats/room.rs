use serde_json::{json, Value};

/// Creates one entry of the room list endpoint.
///
/// # Arguments
/// - `id` - Room id used by the detail endpoint
/// - `name` - Room name reported by the list endpoint
/// - `player_count` - Declared player count
/// - `max_players` - Declared capacity
///
/// # Returns
/// - `Value` - JSON object with camelCase fields as the API sends them
pub fn room_json(id: u64, name: &str, player_count: u32, max_players: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "playerCount": player_count,
        "maxPlayers": max_players,
        "worldId": 1,
        "password": false,
    })
}

/// Creates a room detail response in its object shape.
///
/// # Arguments
/// - `name` - Updated room name, omitted from the JSON when `None`
/// - `players` - Raw player names listed in the room
///
/// # Returns
/// - `Value` - JSON object `{ "name"?, "players": [{ "name" }, ...] }`
pub fn room_detail_object(name: Option<&str>, players: &[&str]) -> Value {
    let mut detail = json!({
        "players": players
            .iter()
            .map(|player| json!({ "name": player }))
            .collect::<Vec<_>>(),
    });

    if let Some(name) = name {
        detail["name"] = json!(name);
    }

    detail
}

/// Creates a room detail response in its array shape.
///
/// Each entry is built like `room_detail_object`; the API only ever puts the
/// room's name on the first element, but tests may set it anywhere.
///
/// # Arguments
/// - `entries` - `(name, players)` per array element
///
/// # Returns
/// - `Value` - JSON array of detail objects
pub fn room_detail_array(entries: &[(Option<&str>, Vec<&str>)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(name, players)| room_detail_object(*name, players.as_slice()))
            .collect(),
    )
}
