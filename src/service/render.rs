//! Status document rendering.
//!
//! Lays a `Snapshot` out as the status message: a static header, the server
//! summary, the catch-all lobby and one section per active room. Rendering is
//! pure; the "last updated" time is added when the document becomes an embed.

use crate::model::{
    player::PlayerName,
    room::Room,
    snapshot::{CatchAllLobby, Snapshot, Summary},
    status::{StatusDocument, StatusField},
};

pub const STATUS_TITLE: &str = "🎮 **MotorStorm Server Status**";
pub const STATUS_DESCRIPTION: &str = "Real-time status of all lobbies and players.";
pub const STATUS_FOOTER: &str = "Last Updated";
pub const SUMMARY_FIELD_NAME: &str = "📊 **Server Summary**";
pub const NO_PLAYERS: &str = "No players online";
pub const PLAYER_JOINING: &str = "Player is joining...";

/// Discord green
const STATUS_COLOR: u32 = 0x2ECC71;

/// Discord rejects embeds with more fields than this.
const MAX_EMBED_FIELDS: usize = 25;
/// Discord rejects embeds whose title, description, footer and fields add up
/// to more characters than this.
const MAX_EMBED_CHARS: usize = 6000;
/// Discord rejects field names longer than this many characters.
const MAX_FIELD_NAME_CHARS: usize = 256;
/// Discord rejects field values longer than this many characters.
const MAX_FIELD_VALUE_CHARS: usize = 1024;

/// Renders a snapshot into the status document.
///
/// Inactive rooms are left out entirely. Active rooms are added in listing
/// order until either the field limit or the total character limit of an
/// embed is reached; the remaining rooms are dropped.
///
/// # Arguments
/// - `snapshot` - Reconciled snapshot of the server
///
/// # Returns
/// - `StatusDocument` - Identical for identical snapshots, always within
///   Discord's embed limits
pub fn render_status(snapshot: &Snapshot) -> StatusDocument {
    let mut document = StatusDocument {
        title: STATUS_TITLE.to_string(),
        description: STATUS_DESCRIPTION.to_string(),
        color: STATUS_COLOR,
        fields: vec![
            summary_field(&snapshot.summary),
            catch_all_field(&snapshot.catch_all),
        ],
        footer: STATUS_FOOTER.to_string(),
    };

    let fixed_fields = document.fields.len();
    let room_slots = MAX_EMBED_FIELDS - fixed_fields;
    let mut chars_left = MAX_EMBED_CHARS.saturating_sub(document.embed_chars());

    let active_rooms: Vec<&Room> = snapshot.rooms.iter().filter(|room| room.is_active()).collect();
    for room in active_rooms.iter().take(room_slots) {
        let field = room_field(room);
        let chars = field.chars();
        if chars > chars_left {
            break;
        }

        chars_left -= chars;
        document.fields.push(field);
    }

    let shown = document.fields.len() - fixed_fields;
    if shown < active_rooms.len() {
        tracing::warn!(
            "{} active lobbies exceed the embed limits, showing the first {}",
            active_rooms.len(),
            shown
        );
    }

    document
}

/// Player line of a room section.
///
/// A room can report players before its roster catches up; that window shows
/// the joining placeholder instead of an empty list.
pub fn room_player_status(room: &Room) -> String {
    if room.player_count > 0 && room.players.is_empty() {
        PLAYER_JOINING.to_string()
    } else if !room.players.is_empty() {
        join_players(&room.players)
    } else {
        NO_PLAYERS.to_string()
    }
}

fn summary_field(summary: &Summary) -> StatusField {
    StatusField {
        name: SUMMARY_FIELD_NAME.to_string(),
        value: format!(
            "**Active Lobbies:** `{}`\n**Total Players Online:** `{}`",
            summary.active_lobbies, summary.total_players
        ),
        inline: false,
    }
}

fn catch_all_field(lobby: &CatchAllLobby) -> StatusField {
    let players = if lobby.players.is_empty() {
        NO_PLAYERS.to_string()
    } else {
        join_players(&lobby.players)
    };

    StatusField {
        name: section_name("🌐", &lobby.name),
        value: lobby_value(&lobby.player_count.to_string(), &players),
        inline: false,
    }
}

fn room_field(room: &Room) -> StatusField {
    StatusField {
        name: section_name("🏠", &room.name),
        value: lobby_value(
            &format!("{}/{}", room.player_count, room.max_players),
            &room_player_status(room),
        ),
        inline: false,
    }
}

/// Formats a section heading, cutting the name to fit Discord's limit.
fn section_name(icon: &str, name: &str) -> String {
    let overhead = format!("{} ****", icon).chars().count();
    let name = truncate_chars(name, MAX_FIELD_NAME_CHARS.saturating_sub(overhead));

    format!("{} **{}**", icon, name)
}

fn join_players(players: &[PlayerName]) -> String {
    players
        .iter()
        .map(PlayerName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a lobby section, cutting the player line to fit Discord's limit.
fn lobby_value(online: &str, players: &str) -> String {
    let overhead = format!("**Players Online:** `{}`\n**Players:** ``", online)
        .chars()
        .count();
    let players = truncate_chars(players, MAX_FIELD_VALUE_CHARS.saturating_sub(overhead));

    format!("**Players Online:** `{}`\n**Players:** `{}`", online, players)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
