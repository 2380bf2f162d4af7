//! Per-room minigame results.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::RoomId;

/// The outcome of one minigame attempt in a room.
///
/// Built fresh from a finished run and never edited afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomScoreData {
    time_taken: u32,
    points_gained: u32,
    completed: bool,
}

impl RoomScoreData {
    /// `time_taken` is in whole seconds.
    pub fn new(time_taken: u32, points_gained: u32, completed: bool) -> Self {
        Self {
            time_taken,
            points_gained,
            completed,
        }
    }

    /// Seconds the attempt took.
    pub fn time_taken(&self) -> u32 {
        self.time_taken
    }

    pub fn points_gained(&self) -> u32 {
        self.points_gained
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl fmt::Display for RoomScoreData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}s, {} pts, {}",
            self.time_taken,
            self.points_gained,
            if self.completed { "completed" } else { "not completed" }
        )
    }
}

/// The latest [`RoomScoreData`] of every room that has been attempted.
///
/// A retry replaces the previous entry for that room; results never
/// accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    entries: BTreeMap<RoomId, RoomScoreData>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of an attempt, returning the entry it replaced.
    pub fn record(&mut self, room: RoomId, data: RoomScoreData) -> Option<RoomScoreData> {
        info!(
            %room,
            time_taken = data.time_taken(),
            points = data.points_gained(),
            completed = data.is_completed(),
            "room score recorded"
        );
        self.entries.insert(room, data)
    }

    pub fn get(&self, room: RoomId) -> Option<&RoomScoreData> {
        self.entries.get(&room)
    }

    /// Entries in room order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &RoomScoreData)> {
        self.entries.iter().map(|(id, data)| (*id, data))
    }

    /// Sum of the points of every room's latest attempt, saturating at
    /// `u32::MAX`.
    pub fn total_points(&self) -> u32 {
        self.entries
            .values()
            .map(|d| d.points_gained())
            .fold(0, u32::saturating_add)
    }

    /// Rooms whose latest attempt was completed.
    pub fn completed_rooms(&self) -> Vec<RoomId> {
        self.entries
            .iter()
            .filter(|(_, d)| d.is_completed())
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut ledger = ScoreLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.record(RoomId(4), RoomScoreData::new(12, 60, true)).is_none());

        let entry = ledger.get(RoomId(4)).unwrap();
        assert_eq!(entry.time_taken(), 12);
        assert_eq!(entry.points_gained(), 60);
        assert!(entry.is_completed());
        assert!(ledger.get(RoomId(1)).is_none());
    }

    #[test]
    fn test_retry_replaces_not_accumulates() {
        let mut ledger = ScoreLedger::new();
        ledger.record(RoomId(4), RoomScoreData::new(12, 60, true));
        let previous = ledger.record(RoomId(4), RoomScoreData::new(30, 0, false));

        assert_eq!(previous, Some(RoomScoreData::new(12, 60, true)));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_points(), 0);
        assert!(ledger.completed_rooms().is_empty());
    }

    #[test]
    fn test_totals_across_rooms() {
        let mut ledger = ScoreLedger::new();
        ledger.record(RoomId(2), RoomScoreData::new(5, 20, true));
        ledger.record(RoomId(1), RoomScoreData::new(9, 0, false));
        ledger.record(RoomId(4), RoomScoreData::new(7, 40, true));

        assert_eq!(ledger.total_points(), 60);
        assert_eq!(ledger.completed_rooms(), vec![RoomId(2), RoomId(4)]);
        let order: Vec<RoomId> = ledger.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![RoomId(1), RoomId(2), RoomId(4)]);
    }

    #[test]
    fn test_total_points_saturates() {
        let mut ledger = ScoreLedger::new();
        ledger.record(RoomId(1), RoomScoreData::new(1, u32::MAX, true));
        ledger.record(RoomId(2), RoomScoreData::new(1, 1, true));
        assert_eq!(ledger.total_points(), u32::MAX);
    }

    #[test]
    fn test_display() {
        let data = RoomScoreData::new(3, 10, false);
        assert_eq!(data.to_string(), "3s, 10 pts, not completed");
    }
}
