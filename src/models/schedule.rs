//! Timetable (solution) model.
//!
//! A timetable is the ordered list of placements produced by one generation
//! run. Order is the order in which the generator committed them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::Weekday;

/// One scheduled lesson: a subject taught to a section by a lecturer in a
/// room, over `[start_hour, end_hour)` on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Subject name.
    pub subject: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Section name.
    pub section: String,
    /// Room number.
    pub room: String,
    /// Teaching day.
    pub day: Weekday,
    /// Start hour (inclusive).
    pub start_hour: u32,
    /// End hour (exclusive).
    pub end_hour: u32,
}

/// Ordered placements plus run bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Placements in commit order.
    pub placements: Vec<Placement>,
    /// Placements the sink failed to persist (still present in `placements`).
    pub sink_failures: usize,
}

/// Weekly view: section → day → start hour → placement.
pub type WeeklyGrid<'a> = BTreeMap<&'a str, BTreeMap<Weekday, BTreeMap<u32, &'a Placement>>>;

impl Placement {
    /// Creates a placement.
    pub fn new(
        subject: impl Into<String>,
        lecturer: impl Into<String>,
        section: impl Into<String>,
        room: impl Into<String>,
        day: Weekday,
        start_hour: u32,
        end_hour: u32,
    ) -> Self {
        Self {
            subject: subject.into(),
            lecturer: lecturer.into(),
            section: section.into(),
            room: room.into(),
            day,
            start_hour,
            end_hour,
        }
    }

    /// Length in hours.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Whether this placement spans more than one hour (a lab block).
    #[inline]
    pub fn is_block(&self) -> bool {
        self.duration_hours() > 1
    }

    /// Whether the placement occupies `hour` on `day`.
    #[inline]
    pub fn is_active_at(&self, day: Weekday, hour: u32) -> bool {
        self.day == day && hour >= self.start_hour && hour < self.end_hour
    }

    /// Whether two placements share any hour on the same day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_hour < other.end_hour
            && other.start_hour < self.end_hour
    }

    /// Occupied hours, start inclusive, end exclusive.
    pub fn hours(&self) -> std::ops::Range<u32> {
        self.start_hour..self.end_hour
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placement.
    pub fn add_placement(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Number of placements.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements for a section, in commit order.
    pub fn for_section(&self, section: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.section == section)
            .collect()
    }

    /// Placements taught by a lecturer.
    pub fn for_lecturer(&self, lecturer: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.lecturer == lecturer)
            .collect()
    }

    /// Placements held in a room.
    pub fn for_room(&self, room: &str) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.room == room).collect()
    }

    /// Placements on a day.
    pub fn on_day(&self, day: Weekday) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.day == day).collect()
    }

    /// Placements occupying `hour` on `day`.
    pub fn active_at(&self, day: Weekday, hour: u32) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.is_active_at(day, hour))
            .collect()
    }

    /// Multi-hour (lab) placements.
    pub fn block_placements(&self) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.is_block()).collect()
    }

    /// Distinct subject names in first-seen order.
    ///
    /// Feeding these back as bare subjects regenerates a timetable from an
    /// existing one.
    pub fn subject_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.placements
            .iter()
            .map(|p| p.subject.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Groups placements by section, day and start hour.
    ///
    /// A later placement with the same key replaces an earlier one; the
    /// generator never produces such duplicates.
    pub fn weekly_grid(&self) -> WeeklyGrid<'_> {
        let mut grid: WeeklyGrid<'_> = BTreeMap::new();
        for p in &self.placements {
            grid.entry(p.section.as_str())
                .or_default()
                .entry(p.day)
                .or_default()
                .insert(p.start_hour, p);
        }
        grid
    }

    /// Consumes the timetable, returning placements in commit order.
    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }
}
