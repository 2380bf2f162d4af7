//! The Campus overworld.
//!
//! A fixed set of rooms generated once at startup, one player shared by
//! every room, and the index of the room the player is in. Room 0 is the
//! hub; every other room is a puzzle room hosting an NPC and, possibly, a
//! minigame.
//!
//! # Key types
//!
//! - [`GameState`]: rooms, player and current room; validated navigation
//! - [`Room`] / [`RoomKind`] / [`RoomId`]: room structure
//! - [`Player`], [`Door`], [`Npc`]: entities that track the environment size
//! - [`ScoreLedger`] / [`RoomScoreData`]: per-room minigame results

mod entity;
mod error;
mod generator;
mod geometry;
mod ledger;
mod room;
mod state;

pub use entity::{Body, Door, Entity, Npc, Player};
pub use error::WorldError;
pub use generator::{NpcGenerator, RoomGenerator};
pub use geometry::{Extent, Point};
pub use ledger::{RoomScoreData, ScoreLedger};
pub use room::{Room, RoomId, RoomKind};
pub use state::GameState;
