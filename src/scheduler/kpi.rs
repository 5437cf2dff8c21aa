//! Timetable quality metrics (KPIs).
//!
//! Computes simple load indicators from a generated timetable.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement count | Number of emitted placements |
//! | Block count | Placements longer than one hour (labs) |
//! | Taught hours | Sum of placement durations |
//! | Hours by lecturer / room | Taught hours per identity |
//! | Section fill rate | Occupied section-hours / available section-hours |

use std::collections::HashMap;

use crate::models::{HourGrid, Section, Timetable, Weekday};

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Number of placements.
    pub placement_count: usize,
    /// Number of multi-hour placements.
    pub block_count: usize,
    /// Total taught hours across all placements.
    pub taught_hours: u32,
    /// Taught hours per lecturer.
    pub hours_by_lecturer: HashMap<String, u32>,
    /// Taught hours per room.
    pub hours_by_room: HashMap<String, u32>,
    /// Per-section fill rate (0.0..1.0).
    pub fill_rate_by_section: HashMap<String, f64>,
    /// Mean fill rate over the given sections.
    pub avg_fill_rate: f64,
    /// Placements whose sink save failed.
    pub sink_failures: usize,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable.
    ///
    /// # Arguments
    /// * `timetable` - The generated timetable.
    /// * `sections` - Sections to report fill rates for.
    /// * `grid` - The hour grid the timetable was generated on.
    pub fn calculate(timetable: &Timetable, sections: &[Section], grid: &HourGrid) -> Self {
        let mut taught_hours = 0;
        let mut block_count = 0;
        let mut hours_by_lecturer: HashMap<String, u32> = HashMap::new();
        let mut hours_by_room: HashMap<String, u32> = HashMap::new();
        let mut hours_by_section: HashMap<&str, u32> = HashMap::new();

        for p in &timetable.placements {
            let hours = p.duration_hours();
            taught_hours += hours;
            if p.is_block() {
                block_count += 1;
            }
            *hours_by_lecturer.entry(p.lecturer.clone()).or_default() += hours;
            *hours_by_room.entry(p.room.clone()).or_default() += hours;
            *hours_by_section.entry(p.section.as_str()).or_default() += hours;
        }

        let available = (Weekday::ALL.len() * grid.len()) as f64;
        let fill_rate_by_section: HashMap<String, f64> = sections
            .iter()
            .map(|s| {
                let used = hours_by_section.get(s.name.as_str()).copied().unwrap_or(0);
                let rate = if available == 0.0 {
                    0.0
                } else {
                    f64::from(used) / available
                };
                (s.name.clone(), rate)
            })
            .collect();

        let avg_fill_rate = if fill_rate_by_section.is_empty() {
            0.0
        } else {
            fill_rate_by_section.values().sum::<f64>() / fill_rate_by_section.len() as f64
        };

        Self {
            placement_count: timetable.placement_count(),
            block_count,
            taught_hours,
            hours_by_lecturer,
            hours_by_room,
            fill_rate_by_section,
            avg_fill_rate,
            sink_failures: timetable.sink_failures,
        }
    }

    /// Whether every placement was persisted and the mean fill rate reaches
    /// `min_fill_rate`.
    pub fn meets_thresholds(&self, min_fill_rate: f64) -> bool {
        self.sink_failures == 0 && self.avg_fill_rate >= min_fill_rate
    }
}
