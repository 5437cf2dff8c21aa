//! Greedy timetable generation and KPI evaluation.
//!
//! # Algorithm
//!
//! `TimetableGenerator` walks days, then hour-grid positions, then sections
//! from a rotating start point, and fills each free section slot with the
//! next permitted subject. Lecturers and rooms are picked round-robin from
//! shared cursors; lab subjects take a contiguous block of grid hours. There
//! is no backtracking: a slot that cannot be filled is left empty. It is not
//! optimal, but it is fast and fully deterministic.
//!
//! # Persistence
//!
//! Every placement is handed to a [`PlacementSink`] as soon as it is
//! committed. A failed save is logged and counted, never fatal.
//!
//! # KPI
//!
//! `TimetableKpi` computes load metrics: block count, taught hours per
//! lecturer and room, and section fill rate.

mod context;
mod generator;
mod kpi;
mod sink;

pub use context::{round_robin, GenerationContext, Occupancy};
pub use generator::{generate, TimetableGenerator, TimetableRequest};
pub use kpi::TimetableKpi;
pub use sink::{MemorySink, NoopSink, PlacementSink};
