//! The overworld game state.

use tracing::{debug, info};

use crate::{Entity, Extent, Player, Room, RoomGenerator, RoomId, RoomKind, WorldError};

/// Rooms, the player and the room the player is in.
///
/// Invariant: `current` always indexes an existing room. The only ways to
/// change it are [`change_room`](Self::change_room), which validates the
/// id, and construction, which starts in the hub.
#[derive(Debug, Clone)]
pub struct GameState {
    rooms: Vec<Room>,
    player: Player,
    current: usize,
    environment: Extent,
}

impl GameState {
    /// Number of rooms in the default layout: the hub and four puzzle rooms.
    pub const DEFAULT_ROOM_COUNT: u32 = 5;

    /// Builds the default layout for an environment size.
    pub fn new(environment: Extent) -> Result<Self, WorldError> {
        Self::with_room_count(environment, Self::DEFAULT_ROOM_COUNT)
    }

    /// Builds the default layout with `room_count` rooms.
    pub fn with_room_count(environment: Extent, room_count: u32) -> Result<Self, WorldError> {
        let rooms = RoomGenerator::new(environment, room_count).generate_all()?;
        Self::from_rooms(environment, rooms)
    }

    /// Builds a state from externally generated rooms.
    ///
    /// Rooms must be non-empty and in id order starting at the hub.
    pub fn from_rooms(environment: Extent, rooms: Vec<Room>) -> Result<Self, WorldError> {
        if rooms.is_empty() {
            return Err(WorldError::NoRooms);
        }
        if let Some((index, room)) = rooms
            .iter()
            .enumerate()
            .find(|(i, r)| r.id().index() != *i)
        {
            return Err(WorldError::RoomOutOfOrder {
                index,
                id: room.id(),
            });
        }
        info!(rooms = rooms.len(), ?environment, "world created");
        Ok(Self {
            rooms,
            player: Player::new(environment),
            current: 0,
            environment,
        })
    }

    /// The room the player is in.
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    pub fn current_room_id(&self) -> RoomId {
        self.current_room().id()
    }

    /// Moves the player to another room.
    ///
    /// Fails with [`WorldError::InvalidRoom`] for ids outside
    /// `0..room_count`, leaving the current room unchanged.
    pub fn change_room(&mut self, id: RoomId) -> Result<(), WorldError> {
        if id.index() >= self.rooms.len() {
            return Err(WorldError::InvalidRoom {
                id,
                room_count: self.rooms.len(),
            });
        }
        let from = self.current_room_id();
        self.current = id.index();
        info!(%from, to = %id, "room changed");
        Ok(())
    }

    /// Propagates a new environment size.
    ///
    /// The player and every door of the current room always follow. The
    /// current room's NPC follows only in puzzle rooms. An empty size is
    /// ignored: positions clamped into it could not be scaled back.
    pub fn resize(&mut self, environment: Extent) {
        if environment.is_empty() {
            debug!(?environment, "empty resize ignored");
            return;
        }
        self.environment = environment;
        self.player.resize(environment);

        let room = &mut self.rooms[self.current];
        let resize_npc = room.kind() == RoomKind::Puzzle;
        for door in room.doors_mut() {
            door.resize(environment);
        }
        if resize_npc {
            if let Some(npc) = room.npc_mut() {
                npc.resize(environment);
            }
        }
        debug!(?environment, room = %room.id(), resize_npc, "world resized");
    }

    /// The player. Every layer observes this same instance.
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The environment size last propagated.
    pub fn environment(&self) -> Extent {
        self.environment
    }
}
