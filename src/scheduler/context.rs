//! Run-scoped generation state.
//!
//! One [`GenerationContext`] lives for exactly one generation call. It holds
//! the shared round-robin cursors and the occupancy maps, and is threaded by
//! `&mut` through every placement step.

use std::collections::{HashMap, HashSet};

use crate::models::Weekday;

/// Slot key: a start hour on a day.
type SlotKey = (Weekday, u32);

/// Who is busy when.
///
/// Three independent maps (lecturer, room, section) from slot to the set of
/// identities committed there, plus the labs each section has received.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    lecturers: HashMap<SlotKey, HashSet<String>>,
    rooms: HashMap<SlotKey, HashSet<String>>,
    sections: HashMap<SlotKey, HashSet<String>>,
    labs_placed: HashMap<String, HashSet<String>>,
}

impl Occupancy {
    /// Creates empty maps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the lecturer is free at `hour` on `day`.
    pub fn is_lecturer_free(&self, lecturer: &str, day: Weekday, hour: u32) -> bool {
        is_free(&self.lecturers, lecturer, day, hour)
    }

    /// Whether the room is free at `hour` on `day`.
    pub fn is_room_free(&self, room: &str, day: Weekday, hour: u32) -> bool {
        is_free(&self.rooms, room, day, hour)
    }

    /// Whether the section is free at `hour` on `day`.
    pub fn is_section_free(&self, section: &str, day: Weekday, hour: u32) -> bool {
        is_free(&self.sections, section, day, hour)
    }

    /// Marks lecturer, room and section busy for every hour in `hours`.
    pub fn commit(&mut self, lecturer: &str, room: &str, section: &str, day: Weekday, hours: &[u32]) {
        for &hour in hours {
            mark(&mut self.lecturers, lecturer, day, hour);
            mark(&mut self.rooms, room, day, hour);
            mark(&mut self.sections, section, day, hour);
        }
    }

    /// Whether `section` already received lab `subject` (case-insensitive).
    pub fn has_lab(&self, section: &str, subject: &str) -> bool {
        self.labs_placed
            .get(section)
            .is_some_and(|labs| labs.contains(&subject.to_lowercase()))
    }

    /// Records that `section` received lab `subject`.
    pub fn record_lab(&mut self, section: &str, subject: &str) {
        self.labs_placed
            .entry(section.to_string())
            .or_default()
            .insert(subject.to_lowercase());
    }

    /// Number of busy (section, slot) pairs.
    pub fn section_hours(&self) -> usize {
        self.sections.values().map(HashSet::len).sum()
    }
}

fn is_free(map: &HashMap<SlotKey, HashSet<String>>, id: &str, day: Weekday, hour: u32) -> bool {
    !map.get(&(day, hour)).is_some_and(|busy| busy.contains(id))
}

fn mark(map: &mut HashMap<SlotKey, HashSet<String>>, id: &str, day: Weekday, hour: u32) {
    map.entry((day, hour)).or_default().insert(id.to_string());
}

/// Shared cursors and occupancy for one run.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    /// Next lecturer index to try.
    pub lecturer_cursor: usize,
    /// Next room index to try.
    pub room_cursor: usize,
    /// Origin of the section walk, re-read at every step.
    pub section_cursor: usize,
    /// Committed slots.
    pub occupancy: Occupancy,
}

impl GenerationContext {
    /// Fresh context: all cursors at zero, nothing occupied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the section cursor one step forward, wrapping at `section_count`.
    pub fn advance_section_cursor(&mut self, section_count: usize) {
        if section_count > 0 {
            self.section_cursor = (self.section_cursor + 1) % section_count;
        }
    }
}

/// Round-robin search over `0..len` starting at `*cursor`.
///
/// Returns the first index accepted by `is_free`, leaving the cursor on it.
/// The cursor is untouched when nothing is accepted.
pub fn round_robin(cursor: &mut usize, len: usize, mut is_free: impl FnMut(usize) -> bool) -> Option<usize> {
    for offset in 0..len {
        let idx = (*cursor + offset) % len;
        if is_free(idx) {
            *cursor = idx;
            return Some(idx);
        }
    }
    None
}
