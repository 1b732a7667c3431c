use serde_json::{json, Value};

/// Creates one entry of the global player list endpoint.
///
/// # Arguments
/// - `raw_name` - Name as the API reports it, e.g. `"12345-PlayerOne"`
///
/// # Returns
/// - `Value` - JSON object with the fields the API sends
pub fn player_json(raw_name: &str) -> Value {
    json!({
        "name": raw_name,
        "onlineId": raw_name,
        "universeId": 1,
    })
}
