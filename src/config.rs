//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::models::{DepartmentRules, HourGrid};

/// Tunables for [`TimetableGenerator`](crate::scheduler::TimetableGenerator).
///
/// Every field has a default, so a partial JSON/YAML document deserializes
/// into a complete config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Hour grid used when a request does not supply one.
    pub hour_grid: HourGrid,
    /// Case-insensitive substring marking a subject as a lab.
    pub lab_keyword: String,
    /// Contiguous hours a lab occupies.
    pub lab_block_hours: usize,
    /// Section-name → department inference rules.
    pub department_rules: DepartmentRules,
    /// Substitute section when none are supplied.
    pub placeholder_section: String,
    /// Substitute lecturer when none are supplied.
    pub placeholder_lecturer: String,
    /// Substitute room when none are supplied.
    pub placeholder_room: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            hour_grid: HourGrid::default(),
            lab_keyword: "lab".to_string(),
            lab_block_hours: 3,
            department_rules: DepartmentRules::default(),
            placeholder_section: "Section-1".to_string(),
            placeholder_lecturer: "Lecturer-1".to_string(),
            placeholder_room: "Room-1".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Sets the default hour grid.
    pub fn with_hour_grid(mut self, grid: impl Into<HourGrid>) -> Self {
        self.hour_grid = grid.into();
        self
    }

    /// Sets the lab keyword.
    pub fn with_lab_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.lab_keyword = keyword.into();
        self
    }

    /// Sets the lab block length (clamped to at least 1).
    pub fn with_lab_block_hours(mut self, hours: usize) -> Self {
        self.lab_block_hours = hours.max(1);
        self
    }

    /// Replaces the department rules.
    pub fn with_department_rules(mut self, rules: DepartmentRules) -> Self {
        self.department_rules = rules;
        self
    }

    /// Sets the placeholder names used for missing catalogs.
    pub fn with_placeholders(
        mut self,
        section: impl Into<String>,
        lecturer: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        self.placeholder_section = section.into();
        self.placeholder_lecturer = lecturer.into();
        self.placeholder_room = room.into();
        self
    }
}
