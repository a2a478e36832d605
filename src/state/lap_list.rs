//! Task laps and the active-lap cursor

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TrackerError;

/// Stable task identifier, never reused within a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LapId(pub u64);

impl fmt::Display for LapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named task and the seconds it has been active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lap {
    pub id: LapId,
    pub label: String,
    pub elapsed: u64,
}

/// Ordered task list with a cursor on the active lap.
///
/// `current < laps.len()` whenever the list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LapList {
    laps: Vec<Lap>,
    current: usize,
    next_id: u64,
}

impl LapList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Blank labels are ignored.
    pub fn add(&mut self, label: &str) -> Option<&Lap> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        self.next_id += 1;
        let id = LapId(self.next_id);
        self.laps.push(Lap {
            id,
            label: label.to_string(),
            elapsed: 0,
        });
        self.laps.last()
    }

    /// Credit one second to the active lap
    pub fn accrue(&mut self) {
        if let Some(lap) = self.laps.get_mut(self.current) {
            lap.elapsed += 1;
        }
    }

    /// Move to the next lap and restart its clock. Stays put on the last lap.
    pub fn advance(&mut self) -> Option<LapId> {
        if self.current + 1 >= self.laps.len() {
            return None;
        }
        self.current += 1;
        let lap = &mut self.laps[self.current];
        lap.elapsed = 0;
        Some(lap.id)
    }

    /// Remove a task by id, keeping the cursor on a valid lap.
    ///
    /// A lap that becomes active through removal keeps its elapsed time,
    /// unlike `advance`, which restarts it from zero.
    pub fn remove(&mut self, id: LapId) -> Result<Lap, TrackerError> {
        let index = self
            .laps
            .iter()
            .position(|lap| lap.id == id)
            .ok_or(TrackerError::UnknownLap(id))?;

        let removed = self.laps.remove(index);

        if index < self.current {
            self.current -= 1;
        } else if self.current >= self.laps.len() {
            self.current = self.laps.len().saturating_sub(1);
        }

        Ok(removed)
    }

    pub fn current(&self) -> Option<&Lap> {
        self.laps.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn get(&self, id: LapId) -> Option<&Lap> {
        self.laps.iter().find(|lap| lap.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lap> {
        self.laps.iter()
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }
}
