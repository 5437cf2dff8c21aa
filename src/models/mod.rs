//! Timetabling domain models.
//!
//! Catalog inputs (subjects, sections, lecturers, rooms), the weekly
//! calendar, and the produced timetable.
//!
//! # Domain Mappings
//!
//! | u-timetable | College | School | Training Center |
//! |-------------|---------|--------|-----------------|
//! | Subject | Course | Subject | Module |
//! | Section | Class Section | Form/Grade | Cohort |
//! | Lecturer | Faculty | Teacher | Trainer |
//! | Room | Lecture Hall/Lab | Classroom | Studio |
//! | Placement | Timetable Entry | Lesson | Session |

mod calendar;
mod department;
mod record;
mod resource;
mod schedule;
mod section;
mod subject;

pub use calendar::{HourGrid, Weekday};
pub use department::{DepartmentRule, DepartmentRules};
pub use record::{format_hour, parse_hour, CourseRecord};
pub use resource::{Lecturer, Room};
pub use schedule::{Placement, Timetable, WeeklyGrid};
pub use section::{permits, Section};
pub use subject::{normalize_subjects, Subject, SubjectInput, SubjectRecord};
