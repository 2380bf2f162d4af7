//! Default room layout.
//!
//! Content generation proper is out of scope for the core; this produces
//! the minimal layout the game needs: a hub with one door per puzzle room,
//! and puzzle rooms with a door back to the hub and one NPC each.

use crate::{Body, Door, Extent, Npc, Point, Room, RoomId, RoomKind, WorldError};

const DOOR_WIDTH: f32 = 60.0;
const DOOR_HEIGHT: f32 = 20.0;
const NPC_SIZE: f32 = 32.0;

/// Builds rooms for a given environment size.
#[derive(Debug, Clone)]
pub struct RoomGenerator {
    env: Extent,
    room_count: u32,
    npcs: NpcGenerator,
}

impl RoomGenerator {
    pub fn new(env: Extent, room_count: u32) -> Self {
        Self {
            env,
            room_count,
            npcs: NpcGenerator::new(env),
        }
    }

    /// Generates every room, hub first.
    pub fn generate_all(&self) -> Result<Vec<Room>, WorldError> {
        (0..self.room_count)
            .map(|id| self.generate(RoomId(id)))
            .collect()
    }

    /// Generates one room.
    pub fn generate(&self, id: RoomId) -> Result<Room, WorldError> {
        if id == RoomId::HUB {
            return Ok(self.hub());
        }
        if id.0 >= self.room_count {
            return Err(WorldError::InvalidRoom {
                id,
                room_count: self.room_count as usize,
            });
        }
        let back = self.door_at(self.env.width as f32 / 2.0, self.bottom_row(), RoomId::HUB);
        let npc = self.npcs.generate(id)?;
        Ok(Room::new(id, RoomKind::Puzzle, vec![back], Some(npc)))
    }

    fn hub(&self) -> Room {
        let slots = self.room_count.saturating_sub(1);
        let spacing = self.env.width as f32 / (slots + 1) as f32;
        let doors = (1..self.room_count)
            .map(|target| self.door_at(spacing * target as f32, 0.0, RoomId(target)))
            .collect();
        Room::new(RoomId::HUB, RoomKind::Main, doors, None)
    }

    fn bottom_row(&self) -> f32 {
        self.env.height as f32 - DOOR_HEIGHT
    }

    fn door_at(&self, center_x: f32, y: f32, target: RoomId) -> Door {
        let body = Body::new(
            Point::new(center_x - DOOR_WIDTH / 2.0, y),
            DOOR_WIDTH,
            DOOR_HEIGHT,
            self.env,
        );
        Door::new(body, target)
    }
}

/// Builds the interactable NPC of a puzzle room.
#[derive(Debug, Clone)]
pub struct NpcGenerator {
    env: Extent,
}

impl NpcGenerator {
    /// Name, description and dialogue of the NPC in rooms 1 to 5.
    const NPCS: [(&'static str, &'static str, &'static str); 5] = [
        (
            "Mario the Gardener",
            "The campus gardener, an expert on plants.",
            "Catch the falling water drops to help the plants.",
        ),
        (
            "R2D2",
            "Always ready to solve a problem.",
            "Bzz bzz! Find the way out of the lab maze.",
        ),
        (
            "Coach Andrew",
            "An energetic, motivating coach.",
            "Ready for a physical challenge?",
        ),
        (
            "Barista Bro",
            "The friendly barista who knows every student.",
            "Sort the drinks so every glass holds one flavour.",
        ),
        (
            "Einstein",
            "A maths lecturer, keen and helpful.",
            "Answer the quiz to prove what you know.",
        ),
    ];

    pub fn new(env: Extent) -> Self {
        Self { env }
    }

    /// The NPC for puzzle room `id` (1-based).
    pub fn generate(&self, id: RoomId) -> Result<Npc, WorldError> {
        let (name, description, dialogue) = id
            .index()
            .checked_sub(1)
            .and_then(|i| Self::NPCS.get(i))
            .ok_or(WorldError::NoNpc(id))?;
        let position = Point::new(
            self.env.width as f32 / 2.0 - NPC_SIZE / 2.0,
            self.env.height as f32 / 3.0,
        );
        let body = Body::new(position, NPC_SIZE, NPC_SIZE, self.env);
        Ok(Npc::new(body, *name, *description, *dialogue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entity;

    #[test]
    fn test_hub_has_a_door_to_every_puzzle_room() {
        let rooms = RoomGenerator::new(Extent::default(), 5).generate_all().unwrap();
        assert_eq!(rooms.len(), 5);

        let hub = &rooms[0];
        assert_eq!(hub.kind(), RoomKind::Main);
        assert!(hub.npc().is_none());
        for target in 1..5 {
            assert!(hub.door_to(RoomId(target)).is_some());
        }
    }

    #[test]
    fn test_puzzle_rooms_lead_back_to_hub() {
        let rooms = RoomGenerator::new(Extent::default(), 5).generate_all().unwrap();
        for room in &rooms[1..] {
            assert_eq!(room.kind(), RoomKind::Puzzle);
            assert!(room.door_to(RoomId::HUB).is_some());
            assert!(room.npc().is_some());
        }
        let barista = rooms[4].npc().unwrap();
        assert_eq!(barista.name(), "Barista Bro");
        assert_eq!(
            barista.description(),
            "The friendly barista who knows every student."
        );
    }

    #[test]
    fn test_doors_do_not_overlap() {
        let rooms = RoomGenerator::new(Extent::default(), 5).generate_all().unwrap();
        let doors = rooms[0].doors();
        for (i, a) in doors.iter().enumerate() {
            for b in &doors[i + 1..] {
                assert!(!a.body().overlaps(b.body()));
            }
        }
    }

    #[test]
    fn test_npc_outside_data_is_an_error() {
        let npcs = NpcGenerator::new(Extent::default());
        assert_eq!(npcs.generate(RoomId(0)).unwrap_err(), WorldError::NoNpc(RoomId(0)));
        assert_eq!(npcs.generate(RoomId(6)).unwrap_err(), WorldError::NoNpc(RoomId(6)));
    }
}
