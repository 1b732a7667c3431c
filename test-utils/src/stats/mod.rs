//! Test factories for stats API payloads.
//!
//! Each factory returns a `serde_json::Value` shaped exactly like the stats API
//! response it stands in for, so tests exercise the real DTO decoding instead of
//! constructing domain types by hand.
//!
//! # Available Factories
//!
//! - `room::room_json` - One entry of the room list endpoint
//! - `room::room_detail_object` - Room detail response, object shape
//! - `room::room_detail_array` - Room detail response, array shape
//! - `player::player_json` - One entry of the global player list
//! - `fixture::StatsFixture` - A whole universe of rooms, players and details

pub mod fixture;
pub mod player;
pub mod room;

pub use fixture::StatsFixture;
pub use player::player_json;
pub use room::{room_detail_array, room_detail_object, room_json};
