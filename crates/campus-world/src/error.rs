//! Error types for the world layer.

use crate::RoomId;

/// Errors that can occur while building or navigating the world.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorldError {
    /// A room id outside `0..room_count`.
    #[error("invalid room id {id}: expected an id below {room_count}")]
    InvalidRoom { id: RoomId, room_count: usize },

    /// A world needs at least the hub room.
    #[error("a world needs at least one room")]
    NoRooms,

    /// Rooms must be supplied in id order, starting at 0.
    #[error("room at index {index} has id {id}")]
    RoomOutOfOrder { index: usize, id: RoomId },

    /// No NPC data exists for this room.
    #[error("no npc defined for room {0}")]
    NoNpc(RoomId),
}
