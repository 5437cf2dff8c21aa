//! Weekly timetable generator.
//!
//! # Algorithm
//!
//! Single greedy pass, no backtracking:
//!
//! 1. Days in week order, then hour-grid positions in the order given.
//! 2. Each hour walks `section_count` steps from a shared section cursor.
//!    The cursor moves one step per successful placement and is re-read at
//!    every step, so a busy hour can skip some sections.
//! 3. A section takes the next subject from its own rotation, skipping labs
//!    it has already received.
//! 4. Lessons need a lecturer and a room free at the hour; labs need a
//!    contiguous block whose every hour is free for section, lecturer and
//!    room. Lecturers and rooms are searched round-robin from shared cursors.
//! 5. Anything that cannot be placed is skipped silently.
//!
//! # Complexity
//! O(d * h * s * (l + r) * b) where d=days, h=grid slots, s=sections,
//! l=lecturers, r=rooms, b=lab block candidates.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::context::{round_robin, GenerationContext, Occupancy};
use super::sink::PlacementSink;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::models::{
    normalize_subjects, HourGrid, Lecturer, Placement, Room, Section, SubjectInput, Timetable,
    Weekday,
};
use crate::validation::validate_catalog;

/// Input container for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableRequest {
    /// Subjects, as bare names or catalog records.
    pub subjects: Vec<SubjectInput>,
    /// Sections. Empty = one placeholder section.
    pub sections: Vec<Section>,
    /// Lecturers. Empty = one placeholder lecturer.
    pub lecturers: Vec<Lecturer>,
    /// Rooms. Empty = one placeholder room.
    pub rooms: Vec<Room>,
    /// Hour grid. `None` = the generator's configured grid.
    pub hour_grid: Option<HourGrid>,
}

impl TimetableRequest {
    /// Creates a request with the given subjects and no other catalogs.
    pub fn new(subjects: Vec<SubjectInput>) -> Self {
        Self {
            subjects,
            ..Default::default()
        }
    }

    /// Sets the sections.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Sets the lecturers.
    pub fn with_lecturers(mut self, lecturers: Vec<Lecturer>) -> Self {
        self.lecturers = lecturers;
        self
    }

    /// Sets the rooms.
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the hour grid.
    pub fn with_hour_grid(mut self, grid: impl Into<HourGrid>) -> Self {
        self.hour_grid = Some(grid.into());
        self
    }
}

/// Greedy round-robin timetable generator.
///
/// Holds only configuration; every run builds its own
/// [`GenerationContext`], so one generator may serve concurrent runs.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Lecturer, Room, Section, SubjectInput};
/// use u_timetable::scheduler::{NoopSink, TimetableGenerator, TimetableRequest};
///
/// let request = TimetableRequest::new(vec![SubjectInput::from("Java")])
///     .with_sections(vec![Section::new("CSE-A")])
///     .with_lecturers(vec![Lecturer::new("Dilip")])
///     .with_rooms(vec![Room::new("101")]);
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let generator = TimetableGenerator::new();
/// let timetable = runtime
///     .block_on(generator.generate_request(&request, &NoopSink))
///     .unwrap();
/// assert_eq!(timetable.placement_count(), 42);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    config: GeneratorConfig,
}

/// Per-section state for one run.
struct SectionPlan<'a> {
    name: &'a str,
    subjects: Vec<Candidate<'a>>,
    cursor: usize,
}

#[derive(Clone, Copy)]
struct Candidate<'a> {
    name: &'a str,
    lab: bool,
}

/// Lecturers, rooms and grid in effect for a run.
struct Catalog<'a> {
    lecturers: &'a [Lecturer],
    rooms: &'a [Room],
    grid: &'a HourGrid,
}

impl TimetableGenerator {
    /// Creates a generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a weekly timetable.
    ///
    /// Every committed placement is passed to `sink` before the next step.
    /// Sink failures are logged and counted in
    /// [`Timetable::sink_failures`]; the placement stays in the result.
    ///
    /// # Errors
    /// [`GenerateError::EmptyInput`] if `subjects` is empty,
    /// [`GenerateError::InvalidSubject`] if an entry has no name. Both are
    /// raised before the sink is called.
    pub async fn generate(
        &self,
        subjects: &[SubjectInput],
        sections: &[Section],
        lecturers: &[Lecturer],
        rooms: &[Room],
        hour_grid: Option<&HourGrid>,
        sink: &dyn PlacementSink,
    ) -> Result<Timetable, GenerateError> {
        let subjects = normalize_subjects(subjects)?;

        let sections = or_placeholder(sections, || Section::new(&self.config.placeholder_section));
        let lecturers =
            or_placeholder(lecturers, || Lecturer::new(&self.config.placeholder_lecturer));
        let rooms = or_placeholder(rooms, || Room::new(&self.config.placeholder_room));
        let grid = hour_grid.unwrap_or(&self.config.hour_grid);

        if let Err(issues) = validate_catalog(&sections, &lecturers, &rooms) {
            for issue in issues {
                warn!("{}", issue.message);
            }
        }

        let rules = &self.config.department_rules;
        let mut plans: Vec<SectionPlan<'_>> = sections
            .iter()
            .map(|section| {
                let candidates: Vec<Candidate<'_>> = section
                    .permitted_subjects(&subjects, rules)
                    .into_iter()
                    .map(|s| Candidate {
                        name: &s.name,
                        lab: s.is_lab(&self.config.lab_keyword),
                    })
                    .collect();
                if candidates.is_empty() {
                    debug!("section {} has no permitted subjects", section.name);
                }
                SectionPlan {
                    name: &section.name,
                    subjects: candidates,
                    cursor: 0,
                }
            })
            .collect();

        info!(
            "generating timetable: {} subjects, {} sections, {} lecturers, {} rooms, {} slots/day",
            subjects.len(),
            plans.len(),
            lecturers.len(),
            rooms.len(),
            grid.len()
        );

        let catalog = Catalog {
            lecturers: &lecturers,
            rooms: &rooms,
            grid,
        };
        let mut ctx = GenerationContext::new();
        let mut timetable = Timetable::new();
        let section_count = plans.len();

        for day in Weekday::ALL {
            for &hour in grid.hours() {
                // The cursor is read live: a success shifts the rest of this
                // hour's walk, so some sections may not be visited.
                for offset in 0..section_count {
                    let plan = &mut plans[(ctx.section_cursor + offset) % section_count];
                    let Some(placement) = self.place_section(plan, &catalog, day, hour, &mut ctx)
                    else {
                        continue;
                    };
                    plan.cursor += 1;
                    ctx.advance_section_cursor(section_count);
                    persist(placement, sink, &mut timetable).await;
                }
            }
        }

        info!(
            "generated {} placements ({} unsaved)",
            timetable.placement_count(),
            timetable.sink_failures
        );
        Ok(timetable)
    }

    /// Generates from a request.
    pub async fn generate_request(
        &self,
        request: &TimetableRequest,
        sink: &dyn PlacementSink,
    ) -> Result<Timetable, GenerateError> {
        self.generate(
            &request.subjects,
            &request.sections,
            &request.lecturers,
            &request.rooms,
            request.hour_grid.as_ref(),
            sink,
        )
        .await
    }

    /// Tries to fill `(day, hour)` for one section.
    fn place_section(
        &self,
        plan: &mut SectionPlan<'_>,
        catalog: &Catalog<'_>,
        day: Weekday,
        hour: u32,
        ctx: &mut GenerationContext,
    ) -> Option<Placement> {
        if plan.subjects.is_empty() || !ctx.occupancy.is_section_free(plan.name, day, hour) {
            return None;
        }

        let Some(subject) = next_subject(plan, &ctx.occupancy) else {
            debug!("{} {day} {hour}:00: all labs already placed", plan.name);
            return None;
        };

        if subject.lab {
            self.place_lab(plan.name, subject.name, catalog, day, hour, ctx)
        } else {
            place_lesson(plan.name, subject.name, catalog, day, hour, ctx)
        }
    }

    /// Places a lab in the first workable contiguous block.
    ///
    /// Blocks starting at or after `hour` are tried before earlier ones.
    fn place_lab(
        &self,
        section: &str,
        subject: &str,
        catalog: &Catalog<'_>,
        day: Weekday,
        hour: u32,
        ctx: &mut GenerationContext,
    ) -> Option<Placement> {
        let block = self.config.lab_block_hours.max(1);
        let Ok(block_hours) = u32::try_from(block) else {
            return None;
        };

        for start in catalog.grid.block_starts_from(block, hour) {
            let Some(end) = start.checked_add(block_hours) else {
                continue;
            };
            let hours: Vec<u32> = (start..end).collect();
            let occ = &ctx.occupancy;

            if hours
                .iter()
                .any(|&h| !catalog.grid.contains(h) || !occ.is_section_free(section, day, h))
            {
                continue;
            }

            let Some(li) = round_robin(&mut ctx.lecturer_cursor, catalog.lecturers.len(), |i| {
                let name = &catalog.lecturers[i].name;
                hours.iter().all(|&h| occ.is_lecturer_free(name, day, h))
            }) else {
                continue;
            };

            let Some(ri) = round_robin(&mut ctx.room_cursor, catalog.rooms.len(), |i| {
                let number = &catalog.rooms[i].number;
                hours.iter().all(|&h| occ.is_room_free(number, day, h))
            }) else {
                continue;
            };

            let lecturer = &catalog.lecturers[li].name;
            let room = &catalog.rooms[ri].number;
            ctx.occupancy.commit(lecturer, room, section, day, &hours);
            ctx.occupancy.record_lab(section, subject);
            debug!("{section} {day} {start}:00: lab {subject} with {lecturer} in {room}");

            return Some(Placement::new(
                subject,
                lecturer.as_str(),
                section,
                room.as_str(),
                day,
                start,
                end,
            ));
        }

        debug!("{section} {day} {hour}:00: no block for lab {subject}");
        None
    }
}

/// Next subject from the section's rotation, skipping labs it already has.
///
/// Each skipped lab advances the section cursor. Gives up after one full
/// cycle of the permitted list.
fn next_subject<'a>(plan: &mut SectionPlan<'a>, occupancy: &Occupancy) -> Option<Candidate<'a>> {
    let len = plan.subjects.len();
    for _ in 0..len {
        let candidate = plan.subjects[plan.cursor % len];
        if candidate.lab && occupancy.has_lab(plan.name, candidate.name) {
            plan.cursor += 1;
            continue;
        }
        return Some(candidate);
    }
    None
}

/// Places a one-hour lesson at `(day, hour)`.
fn place_lesson(
    section: &str,
    subject: &str,
    catalog: &Catalog<'_>,
    day: Weekday,
    hour: u32,
    ctx: &mut GenerationContext,
) -> Option<Placement> {
    let Some(end) = hour.checked_add(1) else {
        debug!("{section} {day} {hour}:00: lesson would end past the last hour");
        return None;
    };
    let occ = &ctx.occupancy;

    let Some(li) = round_robin(&mut ctx.lecturer_cursor, catalog.lecturers.len(), |i| {
        occ.is_lecturer_free(&catalog.lecturers[i].name, day, hour)
    }) else {
        debug!("{section} {day} {hour}:00: no free lecturer for {subject}");
        return None;
    };

    let Some(ri) = round_robin(&mut ctx.room_cursor, catalog.rooms.len(), |i| {
        occ.is_room_free(&catalog.rooms[i].number, day, hour)
    }) else {
        debug!("{section} {day} {hour}:00: no free room for {subject}");
        return None;
    };

    let lecturer = &catalog.lecturers[li].name;
    let room = &catalog.rooms[ri].number;
    ctx.occupancy.commit(lecturer, room, section, day, &[hour]);

    Some(Placement::new(
        subject,
        lecturer.as_str(),
        section,
        room.as_str(),
        day,
        hour,
        end,
    ))
}

/// Hands a placement to the sink and records it regardless of the outcome.
async fn persist(placement: Placement, sink: &dyn PlacementSink, timetable: &mut Timetable) {
    if let Err(err) = sink.save(&placement).await {
        warn!(
            "failed to persist {} for {} on {} at {}:00: {}",
            placement.subject, placement.section, placement.day, placement.start_hour, err
        );
        timetable.sink_failures += 1;
    }
    timetable.add_placement(placement);
}

fn or_placeholder<T: Clone>(items: &[T], placeholder: impl FnOnce() -> T) -> Cow<'_, [T]> {
    if items.is_empty() {
        Cow::Owned(vec![placeholder()])
    } else {
        Cow::Borrowed(items)
    }
}

/// Generates a timetable with the default configuration.
///
/// Shorthand for [`TimetableGenerator::generate`] on
/// `TimetableGenerator::new()`.
pub async fn generate(
    subjects: &[SubjectInput],
    sections: &[Section],
    lecturers: &[Lecturer],
    rooms: &[Room],
    hour_grid: Option<&HourGrid>,
    sink: &dyn PlacementSink,
) -> Result<Timetable, GenerateError> {
    TimetableGenerator::new()
        .generate(subjects, sections, lecturers, rooms, hour_grid, sink)
        .await
}
