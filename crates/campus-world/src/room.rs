//! Room identity and structure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Door, Npc};

/// Index of a room. Room 0 is the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl RoomId {
    /// The hub room every door network starts from.
    pub const HUB: RoomId = RoomId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

/// Classification of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    /// The hub connecting every other room.
    Main,
    /// A room with an NPC that hands out a challenge.
    Puzzle,
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "Main"),
            Self::Puzzle => write!(f, "Puzzle"),
        }
    }
}

/// A room. Its structure (id, kind, which doors and NPC it has) is fixed
/// once generated; only the contained entities change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    kind: RoomKind,
    doors: Vec<Door>,
    npc: Option<Npc>,
}

impl Room {
    pub fn new(id: RoomId, kind: RoomKind, doors: Vec<Door>, npc: Option<Npc>) -> Self {
        Self {
            id,
            kind,
            doors,
            npc,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn doors_mut(&mut self) -> &mut [Door] {
        &mut self.doors
    }

    pub fn npc(&self) -> Option<&Npc> {
        self.npc.as_ref()
    }

    pub fn npc_mut(&mut self) -> Option<&mut Npc> {
        self.npc.as_mut()
    }

    /// The door leading to `target`, if this room has one.
    pub fn door_to(&self, target: RoomId) -> Option<&Door> {
        self.doors.iter().find(|d| d.target() == target)
    }
}
