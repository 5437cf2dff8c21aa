//! Structural validation for timetabling.
//!
//! Two checks:
//! - [`validate_catalog`]: duplicate identities in the catalog inputs.
//!   Identity is by name, so duplicates silently merge in occupancy.
//! - [`validate_timetable`]: the invariants every generated timetable must
//!   satisfy:
//!   - no lecturer, room or section is in two placements at the same hour
//!   - no section receives the same lab twice
//!   - every placement's subject is permitted for its section's department

use std::collections::{HashMap, HashSet};

use crate::config::GeneratorConfig;
use crate::models::{permits, Lecturer, Placement, Room, Section, Subject, Weekday};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two catalog entries share the same identity.
    DuplicateId,
    /// A lecturer teaches two placements at once.
    LecturerOverlap,
    /// A room hosts two placements at once.
    RoomOverlap,
    /// A section attends two placements at once.
    SectionOverlap,
    /// A section received the same lab more than once.
    RepeatedLab,
    /// A subject was placed in a section outside its department.
    DepartmentMismatch,
    /// A placement names a subject that is not in the catalog.
    UnknownSubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks catalog inputs for duplicate identities.
///
/// # Returns
/// `Ok(())` if every section, lecturer and room name is unique,
/// `Err(errors)` with one entry per duplicate.
pub fn validate_catalog(sections: &[Section], lecturers: &[Lecturer], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique(sections.iter().map(|s| s.name.as_str()), "section", &mut errors);
    check_unique(lecturers.iter().map(|l| l.name.as_str()), "lecturer", &mut errors);
    check_unique(rooms.iter().map(|r| r.number.as_str()), "room", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>, label: &str, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label}: {id}"),
            ));
        }
    }
}

/// Validates a generated timetable against the placement invariants.
///
/// `subjects` is the normalized subject catalog the timetable was built
/// from; `config` supplies the lab keyword and department rules.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_timetable(
    placements: &[Placement],
    subjects: &[Subject],
    config: &GeneratorConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    check_overlaps(placements, |p| &p.lecturer, ValidationErrorKind::LecturerOverlap, "Lecturer", &mut errors);
    check_overlaps(placements, |p| &p.room, ValidationErrorKind::RoomOverlap, "Room", &mut errors);
    check_overlaps(placements, |p| &p.section, ValidationErrorKind::SectionOverlap, "Section", &mut errors);

    // Repeated labs
    let mut labs_seen = HashSet::new();
    for p in placements {
        let is_lab = Subject::new(p.subject.as_str()).is_lab(&config.lab_keyword);
        if is_lab && !labs_seen.insert((p.section.as_str(), p.subject.to_lowercase())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::RepeatedLab,
                format!("Section '{}' received lab '{}' more than once", p.section, p.subject),
            ));
        }
    }

    // Department filter
    for p in placements {
        let candidates: Vec<&Subject> = subjects.iter().filter(|s| s.name == p.subject).collect();
        if candidates.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSubject,
                format!("Placement for '{}' names unknown subject '{}'", p.section, p.subject),
            ));
            continue;
        }

        let section_dept = config.department_rules.infer(&p.section);
        if !candidates.iter().any(|s| permits(section_dept, s)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DepartmentMismatch,
                format!(
                    "Subject '{}' is not permitted for section '{}' ({})",
                    p.subject,
                    p.section,
                    section_dept.unwrap_or("unrestricted")
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports every hour at which one identity is held by two placements.
fn check_overlaps<'a>(
    placements: &'a [Placement],
    identity: impl Fn(&'a Placement) -> &'a String,
    kind: ValidationErrorKind,
    label: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut holders: HashMap<(Weekday, u32, &str), usize> = HashMap::new();
    for (i, p) in placements.iter().enumerate() {
        let id = identity(p).as_str();
        for hour in p.hours() {
            if let Some(prev) = holders.insert((p.day, hour, id), i) {
                errors.push(ValidationError::new(
                    kind.clone(),
                    format!(
                        "{label} '{id}' double-booked on {} at {hour}:00 (placements {prev} and {i})",
                        p.day
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Subject> {
        vec![
            Subject::new("Java"),
            Subject::new("DS Lab"),
            Subject::new("DBMS").with_department("CSE"),
            Subject::new("Circuits").with_department("ECE"),
        ]
    }

    fn lesson(subject: &str, lecturer: &str, section: &str, room: &str, hour: u32) -> Placement {
        Placement::new(subject, lecturer, section, room, Weekday::Monday, hour, hour + 1)
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_timetable() {
        let placements = vec![
            lesson("Java", "Dilip", "CSE-A", "101", 9),
            lesson("Circuits", "Asha", "ECE-A", "102", 9),
            Placement::new("DS Lab", "Dilip", "CSE-A", "101", Weekday::Monday, 13, 16),
        ];
        assert!(validate_timetable(&placements, &catalog(), &GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_lecturer_overlap() {
        let placements = vec![
            lesson("Java", "Dilip", "CSE-A", "101", 9),
            lesson("Java", "Dilip", "CSE-B", "102", 9),
        ];
        let result = validate_timetable(&placements, &catalog(), &GeneratorConfig::default());
        assert_eq!(kinds(result), vec![ValidationErrorKind::LecturerOverlap]);
    }

    #[test]
    fn test_room_overlap_inside_lab_block() {
        let placements = vec![
            Placement::new("DS Lab", "Dilip", "CSE-A", "L1", Weekday::Monday, 13, 16),
            lesson("Java", "Asha", "CSE-B", "L1", 14),
        ];
        let result = validate_timetable(&placements, &catalog(), &GeneratorConfig::default());
        assert_eq!(kinds(result), vec![ValidationErrorKind::RoomOverlap]);
    }

    #[test]
    fn test_section_overlap() {
        let placements = vec![
            lesson("Java", "Dilip", "CSE-A", "101", 9),
            lesson("DBMS", "Asha", "CSE-A", "102", 9),
        ];
        let errors = validate_timetable(&placements, &catalog(), &GeneratorConfig::default())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::SectionOverlap);
        assert!(errors[0].message.contains("CSE-A"));
    }

    #[test]
    fn test_repeated_lab() {
        let placements = vec![
            Placement::new("DS Lab", "Dilip", "CSE-A", "101", Weekday::Monday, 9, 12),
            Placement::new("ds lab", "Dilip", "CSE-A", "101", Weekday::Tuesday, 9, 12),
        ];
        let subjects = vec![Subject::new("DS Lab"), Subject::new("ds lab")];
        let result = validate_timetable(&placements, &subjects, &GeneratorConfig::default());
        assert_eq!(kinds(result), vec![ValidationErrorKind::RepeatedLab]);
    }

    #[test]
    fn test_same_lab_different_sections_ok() {
        let placements = vec![
            Placement::new("DS Lab", "Dilip", "CSE-A", "101", Weekday::Monday, 9, 12),
            Placement::new("DS Lab", "Dilip", "CSE-B", "101", Weekday::Tuesday, 9, 12),
        ];
        assert!(validate_timetable(&placements, &catalog(), &GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_department_mismatch() {
        let placements = vec![lesson("Circuits", "Dilip", "CSE-A", "101", 9)];
        let result = validate_timetable(&placements, &catalog(), &GeneratorConfig::default());
        assert_eq!(kinds(result), vec![ValidationErrorKind::DepartmentMismatch]);

        // Unrestricted sections may take any subject
        let placements = vec![lesson("Circuits", "Dilip", "Evening", "101", 9)];
        assert!(validate_timetable(&placements, &catalog(), &GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_subject() {
        let placements = vec![lesson("Astrology", "Dilip", "CSE-A", "101", 9)];
        let result = validate_timetable(&placements, &catalog(), &GeneratorConfig::default());
        assert_eq!(kinds(result), vec![ValidationErrorKind::UnknownSubject]);
    }

    #[test]
    fn test_valid_catalog() {
        let sections = vec![Section::new("CSE-A"), Section::new("ECE-A")];
        let lecturers = vec![Lecturer::new("Dilip")];
        let rooms = vec![Room::new("101"), Room::new("102")];
        assert!(validate_catalog(&sections, &lecturers, &rooms).is_ok());
    }

    #[test]
    fn test_duplicate_catalog_entries() {
        let sections = vec![Section::new("CSE-A"), Section::new("CSE-A")];
        let lecturers = vec![Lecturer::new("Dilip"), Lecturer::new("Dilip")];
        let rooms = vec![Room::new("101")];

        let errors = validate_catalog(&sections, &lecturers, &rooms).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errors.iter().any(|e| e.message.contains("section")));
        assert!(errors.iter().any(|e| e.message.contains("lecturer")));
    }
}
