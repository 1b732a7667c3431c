//! Snapshot fetching and lobby reconciliation.
//!
//! The stats API has no single endpoint that says which player sits in which
//! lobby. The room list carries declared counts, the global player list carries
//! everyone online, and each room's detail endpoint carries the players it can
//! resolve. This module stitches the three together.

use crate::{
    data::stats::StatsSource,
    error::AppError,
    model::{
        player::PlayerName,
        room::{Room, RoomDetail, RoomSummary},
        snapshot::{CatchAllLobby, Snapshot, Summary},
    },
};

/// Service building snapshots from a stats source.
pub struct SnapshotService<'a, S: StatsSource + ?Sized> {
    stats: &'a S,
    /// Display name of the lobby collecting unassigned players
    catch_all_name: &'a str,
}

impl<'a, S: StatsSource + ?Sized> SnapshotService<'a, S> {
    pub fn new(stats: &'a S, catch_all_name: &'a str) -> Self {
        Self {
            stats,
            catch_all_name,
        }
    }

    /// Reads rooms, players and every room's detail, then reconciles them.
    ///
    /// Reads run one after another. The first failing read aborts the whole fetch,
    /// so callers either get a complete snapshot or none at all.
    ///
    /// # Returns
    /// - `Ok(Snapshot)` - Fresh snapshot of the server
    /// - `Err(AppError::StatsErr)` - Any read failed or returned malformed data
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, AppError> {
        let rooms = self.stats.get_rooms().await?;
        let players = self.stats.get_players().await?;

        let mut listing = Vec::with_capacity(rooms.len());
        for room in rooms {
            let detail = self.stats.get_room_detail(room.id).await?;
            listing.push((room, detail));
        }

        Ok(reconcile(self.catch_all_name, listing, players))
    }
}

/// Assigns players to rooms and repairs inconsistent counts.
///
/// Every player a room's detail resolves is removed once from the global pool;
/// what is left of the pool belongs to the catch-all lobby. A room claiming
/// players while resolving none has its count forced to 0. The summary's total
/// is summed from the declared counts before that correction, while the active
/// lobby count uses the corrected ones.
///
/// # Arguments
/// - `catch_all_name` - Name of the catch-all lobby
/// - `listing` - Each room with its detail, in room list order
/// - `players` - Normalized global player list
///
/// # Returns
/// - `Snapshot` - Deterministic result of the inputs
pub fn reconcile(
    catch_all_name: &str,
    listing: Vec<(RoomSummary, RoomDetail)>,
    players: Vec<PlayerName>,
) -> Snapshot {
    let total_players: u64 = listing
        .iter()
        .map(|(room, _)| u64::from(room.player_count))
        .sum();

    let mut remaining = players;
    let rooms: Vec<Room> = listing
        .into_iter()
        .map(|(summary, detail)| {
            for player in &detail.players {
                if let Some(position) = remaining.iter().position(|p| p == player) {
                    remaining.remove(position);
                }
            }

            let name = detail.name.unwrap_or_else(|| summary.name.clone());

            let player_count = if detail.players.is_empty() && summary.player_count > 0 {
                tracing::debug!(
                    "Lobby '{}' has playerCount={} but no players in its detail, adjusting to 0",
                    name,
                    summary.player_count
                );
                0
            } else {
                summary.player_count
            };

            Room {
                id: summary.id,
                declared_name: summary.name,
                name,
                player_count,
                max_players: summary.max_players,
                players: detail.players,
            }
        })
        .collect();

    let active_lobbies = rooms.iter().filter(|room| room.is_active()).count();

    Snapshot {
        rooms,
        catch_all: CatchAllLobby {
            name: catch_all_name.to_string(),
            player_count: total_players,
            players: remaining,
        },
        summary: Summary {
            active_lobbies,
            total_players,
        },
    }
}
