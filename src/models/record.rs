//! REST wire shape of a placement.
//!
//! Course stores exchange placements as flat camelCase records with clock
//! strings (`"9:00"`) and day names. Store-assigned fields such as `id` are
//! carried through untouched.

use serde::{Deserialize, Serialize};

use super::{Placement, Weekday};
use crate::error::RecordError;

/// A placement as stored by the course service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Store-assigned identifier, absent before the first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub course_name: String,
    pub lecturer_name: String,
    pub section_name: String,
    pub room_number: String,
    /// `"H:00"`.
    pub start_time: String,
    /// `"H:00"`.
    pub end_time: String,
    /// Day name, e.g. `"Monday"`.
    pub date: String,
}

impl From<&Placement> for CourseRecord {
    fn from(p: &Placement) -> Self {
        Self {
            id: None,
            course_name: p.subject.clone(),
            lecturer_name: p.lecturer.clone(),
            section_name: p.section.clone(),
            room_number: p.room.clone(),
            start_time: format_hour(p.start_hour),
            end_time: format_hour(p.end_hour),
            date: p.day.to_string(),
        }
    }
}

impl TryFrom<&CourseRecord> for Placement {
    type Error = RecordError;

    fn try_from(r: &CourseRecord) -> Result<Self, Self::Error> {
        Ok(Placement {
            subject: r.course_name.clone(),
            lecturer: r.lecturer_name.clone(),
            section: r.section_name.clone(),
            room: r.room_number.clone(),
            day: r.date.parse::<Weekday>()?,
            start_hour: parse_hour(&r.start_time)?,
            end_hour: parse_hour(&r.end_time)?,
        })
    }
}

/// Formats a clock hour as `"H:00"`.
pub fn format_hour(hour: u32) -> String {
    format!("{hour}:00")
}

/// Reads the hour part of `"H:MM"` (or a bare `"H"`).
pub fn parse_hour(time: &str) -> Result<u32, RecordError> {
    let hour = time.trim().split(':').next().unwrap_or_default();
    hour.parse::<u32>()
        .map_err(|_| RecordError::InvalidTime(time.to_string()))
}
