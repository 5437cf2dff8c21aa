//! Weekly calendar models.
//!
//! Defines the teaching week: six weekdays in fixed order and the hour grid
//! of lesson start times that every day shares.
//!
//! # Time Model
//! Hours are whole clock hours (`9` = 09:00). A lesson starting at `h` runs
//! until `h + 1`; a lab block starting at `h` runs until `h + block_len`.
//!
//! # Contiguity
//! A block of length `n` may start at grid position `i` only if
//! `grid[i + j] == grid[i] + j` for every `j < n`. Neighbouring grid entries
//! separated by a break (e.g. `11` then `13`) are not contiguous.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

/// A teaching day. Ordering follows the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All teaching days, Monday first.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Day name as written in records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecordError::UnknownDay(s.to_string()))
    }
}

/// Ordered lesson start hours shared by every day.
///
/// Order is significant: the generator walks positions in the order given,
/// not sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourGrid {
    hours: Vec<u32>,
}

impl HourGrid {
    /// Default grid: three morning hours, lunch break, four afternoon hours.
    pub const DEFAULT_HOURS: [u32; 7] = [9, 10, 11, 13, 14, 15, 16];

    /// Creates a grid from start hours in the given order.
    pub fn new(hours: impl Into<Vec<u32>>) -> Self {
        Self {
            hours: hours.into(),
        }
    }

    /// Start hours in grid order.
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    /// Number of slots per day.
    #[inline]
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Whether the grid has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Whether `hour` is a slot start in this grid.
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        self.hours.contains(&hour)
    }

    /// Start hours of every contiguous block of `block_len` slots,
    /// sorted ascending.
    ///
    /// A block starts at position `i` when the following `block_len - 1`
    /// grid entries are exactly `+1, +2, ...` of `grid[i]`. Blocks whose end
    /// hour would not fit in a `u32` are left out.
    pub fn block_starts(&self, block_len: usize) -> Vec<u32> {
        if block_len == 0 || self.hours.len() < block_len {
            return Vec::new();
        }

        let mut starts: Vec<u32> = self
            .hours
            .windows(block_len)
            .filter(|w| {
                w.iter().enumerate().all(|(j, &h)| offset_hour(w[0], j) == Some(h))
                    && offset_hour(w[0], block_len).is_some()
            })
            .map(|w| w[0])
            .collect();
        starts.sort_unstable();
        starts
    }

    /// Block starts ordered for a search beginning at `from_hour`:
    /// starts at or after `from_hour` first, then the earlier ones.
    pub fn block_starts_from(&self, block_len: usize, from_hour: u32) -> Vec<u32> {
        let starts = self.block_starts(block_len);
        let (later, earlier): (Vec<u32>, Vec<u32>) =
            starts.into_iter().partition(|&s| s >= from_hour);
        later.into_iter().chain(earlier).collect()
    }
}

fn offset_hour(start: u32, steps: usize) -> Option<u32> {
    u32::try_from(steps).ok().and_then(|s| start.checked_add(s))
}

impl Default for HourGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOURS)
    }
}

impl From<Vec<u32>> for HourGrid {
    fn from(hours: Vec<u32>) -> Self {
        Self::new(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_order() {
        assert_eq!(Weekday::ALL.len(), 6);
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[5], Weekday::Saturday);
        assert!(Weekday::Monday < Weekday::Friday);
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("Monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!(" friday ".parse::<Weekday>(), Ok(Weekday::Friday));
        assert_eq!(
            "Sunday".parse::<Weekday>(),
            Err(RecordError::UnknownDay("Sunday".into()))
        );
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
    }

    #[test]
    fn test_default_grid() {
        let grid = HourGrid::default();
        assert_eq!(grid.hours(), &[9, 10, 11, 13, 14, 15, 16]);
        assert_eq!(grid.len(), 7);
        assert!(grid.contains(13));
        assert!(!grid.contains(12)); // lunch break
    }

    #[test]
    fn test_block_starts_respect_break() {
        let grid = HourGrid::default();
        // 9-10-11, 13-14-15, 14-15-16; 10-11-13 and 11-13-14 cross the break
        assert_eq!(grid.block_starts(3), vec![9, 13, 14]);
        assert_eq!(grid.block_starts(2), vec![9, 10, 13, 14, 15]);
    }

    #[test]
    fn test_block_starts_follow_grid_order() {
        // Adjacent in value but not in sequence order → no block
        let grid = HourGrid::new(vec![10, 9, 11]);
        assert!(grid.block_starts(3).is_empty());

        let grid = HourGrid::new(vec![14, 15, 16, 9, 10, 11]);
        assert_eq!(grid.block_starts(3), vec![9, 14]);
    }

    #[test]
    fn test_block_starts_short_grid() {
        let grid = HourGrid::new(vec![9, 10]);
        assert!(grid.block_starts(3).is_empty());
        assert!(grid.block_starts(0).is_empty());
        assert!(HourGrid::new(Vec::<u32>::new()).block_starts(1).is_empty());
    }

    #[test]
    fn test_block_starts_near_u32_max() {
        let top = u32::MAX;
        let grid = HourGrid::new(vec![top - 3, top - 2, top - 1, top]);
        // top-2..top+1 would end past u32::MAX
        assert_eq!(grid.block_starts(3), vec![top - 3]);
        assert!(HourGrid::new(vec![top]).block_starts(1).is_empty());
    }

    #[test]
    fn test_block_starts_from_wraps() {
        let grid = HourGrid::default();
        assert_eq!(grid.block_starts_from(3, 9), vec![9, 13, 14]);
        assert_eq!(grid.block_starts_from(3, 10), vec![13, 14, 9]);
        assert_eq!(grid.block_starts_from(3, 14), vec![14, 9, 13]);
        assert_eq!(grid.block_starts_from(3, 16), vec![9, 13, 14]);
    }
}
