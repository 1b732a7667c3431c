use super::*;

/// Tests the basic lobby scenario end to end through the fetcher.
///
/// Verifies that players resolved by a room's detail are assigned to it and
/// everyone else online ends up in the catch-all lobby.
///
/// Expected: Ok with Alice and Bob in Lobby A, Carol in the catch-all lobby
#[tokio::test]
async fn assigns_resolved_players_to_rooms() -> Result<(), AppError> {
    let stats = FixtureStats::new(lobby_a_fixture());

    let snapshot = SnapshotService::new(&stats, CATCH_ALL)
        .fetch_snapshot()
        .await?;

    assert_eq!(snapshot.rooms.len(), 1);
    assert_eq!(snapshot.rooms[0].name, "Lobby A");
    assert_eq!(snapshot.rooms[0].players, names(&["Alice", "Bob"]));
    assert_eq!(snapshot.catch_all.name, CATCH_ALL);
    assert_eq!(snapshot.catch_all.players, names(&["Carol"]));
    assert_eq!(snapshot.summary.total_players, 2);
    assert_eq!(snapshot.summary.active_lobbies, 1);

    Ok(())
}

/// Tests that all reads happen one after another in a fixed order.
///
/// Expected: rooms, players, then each room's detail in room list order
#[tokio::test]
async fn reads_endpoints_in_order() -> Result<(), AppError> {
    let stats = FixtureStats::new(
        lobby_a_fixture()
            .with_room(2, "Lobby B", 0, 8)
            .with_room(3, "Lobby C", 0, 8),
    );

    SnapshotService::new(&stats, CATCH_ALL)
        .fetch_snapshot()
        .await?;

    assert_eq!(
        stats.reads(),
        vec!["rooms", "players", "rooms/1", "rooms/2", "rooms/3"]
    );

    Ok(())
}

/// Tests that one failing room detail fails the whole fetch.
///
/// Verifies that no partial snapshot is produced and no further rooms are read
/// after the failure.
///
/// Expected: Err(StatsErr(MalformedData)) after reading rooms/2
#[tokio::test]
async fn failing_room_detail_aborts_fetch() {
    let stats = FixtureStats::new(
        lobby_a_fixture()
            .with_room(2, "Lobby B", 1, 8)
            .with_room(3, "Lobby C", 0, 8)
            .without_room_detail(2),
    );

    let result = SnapshotService::new(&stats, CATCH_ALL).fetch_snapshot().await;

    assert!(matches!(
        result,
        Err(AppError::StatsErr(StatsError::MalformedData { .. }))
    ));
    assert_eq!(stats.reads(), vec!["rooms", "players", "rooms/1", "rooms/2"]);
}

/// Tests the count correction for rooms whose roster is empty.
///
/// The summary total keeps the declared count while the room itself is
/// corrected to 0.
///
/// Expected: room count 0 and inactive, total players 3, no active lobbies
#[tokio::test]
async fn total_players_uses_declared_counts_before_correction() -> Result<(), AppError> {
    let stats = FixtureStats::new(
        StatsFixture::new()
            .with_room(1, "Lobby A", 3, 12)
            .with_players(&["1-Alice"]),
    );

    let snapshot = SnapshotService::new(&stats, CATCH_ALL)
        .fetch_snapshot()
        .await?;

    assert_eq!(snapshot.rooms[0].player_count, 0);
    assert!(!snapshot.rooms[0].is_active());
    assert_eq!(snapshot.summary.active_lobbies, 0);
    assert_eq!(snapshot.summary.total_players, 3);
    assert_eq!(snapshot.catch_all.player_count, 3);
    assert_eq!(snapshot.catch_all.players, names(&["Alice"]));

    Ok(())
}

/// Tests that the detail endpoint's room name wins over the listed one.
///
/// Expected: display name from the detail, declared name kept
#[tokio::test]
async fn detail_name_overrides_listed_name() -> Result<(), AppError> {
    let stats = FixtureStats::new(
        StatsFixture::new()
            .with_room(1, "Lobby A", 1, 12)
            .with_room_detail(1, room_detail_object(Some("Rift Race #4"), &["1-Alice"]))
            .with_players(&["1-Alice"]),
    );

    let snapshot = SnapshotService::new(&stats, CATCH_ALL)
        .fetch_snapshot()
        .await?;

    assert_eq!(snapshot.rooms[0].name, "Rift Race #4");
    assert_eq!(snapshot.rooms[0].declared_name, "Lobby A");

    Ok(())
}

/// Tests that array shaped details are handled like object shaped ones.
///
/// Expected: players of every element assigned to the room
#[tokio::test]
async fn handles_array_shaped_details() -> Result<(), AppError> {
    let stats = FixtureStats::new(
        StatsFixture::new()
            .with_room(1, "Lobby A", 2, 12)
            .with_room_detail(
                1,
                room_detail_array(&[
                    (Some("Rift Race #4"), vec!["1-Alice"]),
                    (None, vec!["2-Bob"]),
                ]),
            )
            .with_players(&["1-Alice", "2-Bob", "3-Carol"]),
    );

    let snapshot = SnapshotService::new(&stats, CATCH_ALL)
        .fetch_snapshot()
        .await?;

    assert_eq!(snapshot.rooms[0].name, "Rift Race #4");
    assert_eq!(snapshot.rooms[0].players, names(&["Alice", "Bob"]));
    assert_eq!(snapshot.catch_all.players, names(&["Carol"]));

    Ok(())
}

/// Tests that every online player lands in exactly one place.
///
/// Uses two rooms and a duplicated name in the global list: each resolved room
/// player removes one occurrence only.
///
/// Expected: every global player in exactly one of the rooms or the catch-all lobby
#[test]
fn every_player_is_placed_exactly_once() {
    let listing = vec![
        (
            RoomSummary {
                id: 1,
                name: "Lobby A".to_string(),
                player_count: 2,
                max_players: 12,
            },
            RoomDetail {
                name: None,
                players: names(&["Alice", "Bob"]),
            },
        ),
        (
            RoomSummary {
                id: 2,
                name: "Lobby B".to_string(),
                player_count: 1,
                max_players: 8,
            },
            RoomDetail {
                name: None,
                players: names(&["Dave"]),
            },
        ),
    ];
    let global = names(&["Alice", "Bob", "Carol", "Dave", "Alice"]);

    let snapshot = reconcile(CATCH_ALL, listing, global.clone());

    let mut placed: Vec<PlayerName> = snapshot
        .rooms
        .iter()
        .flat_map(|room| room.players.iter().cloned())
        .chain(snapshot.catch_all.players.iter().cloned())
        .collect();
    let mut expected = global;
    placed.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    expected.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    assert_eq!(placed, expected);
    assert_eq!(snapshot.catch_all.players, names(&["Carol", "Alice"]));
}

/// Tests a room listing a player the global list does not know yet.
///
/// Expected: player shown in the room, catch-all lobby unaffected
#[test]
fn room_players_missing_from_global_list_stay_in_room() {
    let listing = vec![(
        RoomSummary {
            id: 1,
            name: "Lobby A".to_string(),
            player_count: 1,
            max_players: 12,
        },
        RoomDetail {
            name: None,
            players: names(&["Erin"]),
        },
    )];

    let snapshot = reconcile(CATCH_ALL, listing, names(&["Carol"]));

    assert_eq!(snapshot.rooms[0].players, names(&["Erin"]));
    assert_eq!(snapshot.catch_all.players, names(&["Carol"]));
}

/// Tests that reconciliation is a pure function of its inputs.
///
/// Expected: identical snapshots from identical inputs
#[tokio::test]
async fn reconciliation_is_repeatable() -> Result<(), AppError> {
    let stats = FixtureStats::new(lobby_a_fixture().with_room(2, "Lobby B", 4, 8));
    let service = SnapshotService::new(&stats, CATCH_ALL);

    let first = service.fetch_snapshot().await?;
    let second = service.fetch_snapshot().await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests declared counts whose sum does not fit the per-room count type.
///
/// Expected: total players summed without overflow
#[test]
fn sums_large_declared_counts() {
    let summary = |id: u64, player_count: u32| RoomSummary {
        id,
        name: format!("Lobby {}", id),
        player_count,
        max_players: 12,
    };
    let listing = vec![
        (summary(1, u32::MAX), RoomDetail::default()),
        (
            summary(2, 1),
            RoomDetail {
                name: None,
                players: names(&["Alice"]),
            },
        ),
    ];

    let snapshot = reconcile(CATCH_ALL, listing, names(&["Alice"]));

    assert_eq!(snapshot.summary.total_players, u64::from(u32::MAX) + 1);
    assert_eq!(snapshot.catch_all.player_count, u64::from(u32::MAX) + 1);
    assert_eq!(snapshot.summary.active_lobbies, 1);
}
