//! Weekly timetable generation.
//!
//! Turns static catalog inputs (subjects, sections, lecturers, rooms and an
//! hour grid) into a conflict-free weekly timetable with a deterministic,
//! single-pass, round-robin assignment.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Subject`, `Section`, `Lecturer`, `Room`,
//!   `Weekday`, `HourGrid`, `Placement`, `Timetable`, `CourseRecord`
//! - **`scheduler`**: `TimetableGenerator`, placement sinks, `TimetableKpi`
//! - **`config`**: `GeneratorConfig` (hour grid, lab rules, department rules)
//! - **`validation`**: Catalog duplicates and timetable invariant checks
//! - **`error`**: Abort, sink and record errors
//!
//! # Guarantees
//!
//! - No lecturer, room or section is double-booked at any hour.
//! - A section never receives the same lab twice in one run.
//! - A section only receives subjects its department permits.
//! - Identical inputs produce identical timetables.

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::GeneratorConfig;
pub use error::{GenerateError, RecordError, SinkError};
pub use scheduler::{generate, TimetableGenerator, TimetableRequest};
