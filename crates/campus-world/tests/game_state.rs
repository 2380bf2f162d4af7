//! Integration tests for room navigation and resize propagation.

use campus_world::{
    Body, Door, Entity, Extent, GameState, Npc, Point, Room, RoomId, RoomKind, ScoreLedger,
    RoomScoreData, WorldError,
};

// =========================================================================
// Helpers
// =========================================================================

fn env() -> Extent {
    Extent::new(800, 600)
}

fn door(target: u32) -> Door {
    Door::new(Body::new(Point::new(100.0, 0.0), 60.0, 20.0, env()), RoomId(target))
}

fn npc() -> Npc {
    Npc::new(
        Body::new(Point::new(400.0, 200.0), 32.0, 32.0, env()),
        "Porter",
        "Keeps the keys.",
        "Hello.",
    )
}

/// A hub that (unusually) has an NPC, plus one puzzle room with an NPC.
fn world_with_npcs() -> GameState {
    let rooms = vec![
        Room::new(RoomId(0), RoomKind::Main, vec![door(1)], Some(npc())),
        Room::new(RoomId(1), RoomKind::Puzzle, vec![door(0)], Some(npc())),
    ];
    GameState::from_rooms(env(), rooms).unwrap()
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn test_default_world_starts_in_hub() {
    let state = GameState::new(env()).unwrap();
    assert_eq!(state.room_count(), 5);
    assert_eq!(state.current_room_id(), RoomId::HUB);
    assert_eq!(state.current_room().kind(), RoomKind::Main);
    assert_eq!(state.environment(), env());
}

#[test]
fn test_from_rooms_rejects_empty() {
    assert_eq!(
        GameState::from_rooms(env(), Vec::new()).unwrap_err(),
        WorldError::NoRooms
    );
}

#[test]
fn test_from_rooms_rejects_out_of_order_ids() {
    let rooms = vec![
        Room::new(RoomId(0), RoomKind::Main, vec![], None),
        Room::new(RoomId(2), RoomKind::Puzzle, vec![], None),
    ];
    assert_eq!(
        GameState::from_rooms(env(), rooms).unwrap_err(),
        WorldError::RoomOutOfOrder {
            index: 1,
            id: RoomId(2)
        }
    );
}

#[test]
fn test_with_room_count_beyond_npc_data_fails() {
    let err = GameState::with_room_count(env(), 7).unwrap_err();
    assert_eq!(err, WorldError::NoNpc(RoomId(6)));
}

// =========================================================================
// change_room
// =========================================================================

#[test]
fn test_change_room_to_every_valid_id() {
    let mut state = GameState::new(env()).unwrap();
    for id in 0..state.room_count() as u32 {
        state.change_room(RoomId(id)).unwrap();
        assert_eq!(state.current_room_id(), RoomId(id));
        assert_eq!(state.current_room().id(), RoomId(id));
    }
}

#[test]
fn test_change_room_invalid_id_leaves_current_unchanged() {
    let mut state = GameState::new(env()).unwrap();
    state.change_room(RoomId(3)).unwrap();

    for bad in [5, 6, 100, u32::MAX] {
        let err = state.change_room(RoomId(bad)).unwrap_err();
        assert_eq!(
            err,
            WorldError::InvalidRoom {
                id: RoomId(bad),
                room_count: 5
            }
        );
        assert_eq!(state.current_room_id(), RoomId(3));
    }
}

#[test]
fn test_invalid_room_error_message() {
    let mut state = GameState::new(env()).unwrap();
    let err = state.change_room(RoomId(9)).unwrap_err();
    assert_eq!(err.to_string(), "invalid room id R-9: expected an id below 5");
}

// =========================================================================
// resize
// =========================================================================

#[test]
fn test_resize_in_puzzle_room_updates_npc() {
    let mut state = world_with_npcs();
    state.change_room(RoomId(1)).unwrap();

    let half = Extent::new(400, 300);
    state.resize(half);

    let room = state.current_room();
    assert_eq!(room.npc().unwrap().body().env(), half);
    assert_eq!(room.npc().unwrap().body().position(), Point::new(200.0, 100.0));
    assert_eq!(room.doors()[0].body().env(), half);
    assert_eq!(state.player().body().env(), half);
}

#[test]
fn test_resize_in_main_room_leaves_npc_untouched() {
    let mut state = world_with_npcs();
    let npc_before = state.current_room().npc().unwrap().clone();

    let half = Extent::new(400, 300);
    state.resize(half);

    let room = state.current_room();
    assert_eq!(room.npc().unwrap(), &npc_before);
    assert_eq!(room.doors()[0].body().env(), half);
    assert_eq!(state.player().body().env(), half);
    assert_eq!(state.environment(), half);
}

#[test]
fn test_resize_only_touches_current_room() {
    let mut state = world_with_npcs();
    state.resize(Extent::new(400, 300));

    let other = state.room(RoomId(1)).unwrap();
    assert_eq!(other.doors()[0].body().env(), env());
    assert_eq!(other.npc().unwrap().body().env(), env());
}

#[test]
fn test_empty_resize_is_ignored() {
    let mut state = GameState::new(env()).unwrap();
    let doors_before: Vec<Point> = state
        .current_room()
        .doors()
        .iter()
        .map(|d| d.body().position())
        .collect();
    let player_before = state.player().body().position();

    state.resize(Extent::new(0, 0));
    state.resize(Extent::new(640, 0));
    assert_eq!(state.environment(), env());

    state.resize(env());
    let doors_after: Vec<Point> = state
        .current_room()
        .doors()
        .iter()
        .map(|d| d.body().position())
        .collect();
    assert_eq!(doors_after, doors_before);
    assert_eq!(state.player().body().position(), player_before);
}

// =========================================================================
// Ledger serialization
// =========================================================================

#[test]
fn test_ledger_serializes_by_room() {
    let mut ledger = ScoreLedger::new();
    ledger.record(RoomId(4), RoomScoreData::new(12, 60, true));
    let json = serde_json::to_value(&ledger).unwrap();
    assert_eq!(json["entries"]["4"]["points_gained"], 60);
    assert_eq!(json["entries"]["4"]["completed"], true);
}
