//! Teaching resources: lecturers and rooms.
//!
//! Both are identified by name only. Catalog records from different sources
//! spell the identity field differently, so deserialization accepts either a
//! bare string or a record using any of the known field names.

use serde::{Deserialize, Serialize};

/// A lecturer who can teach any subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LecturerRepr")]
pub struct Lecturer {
    /// Lecturer name (identity key).
    pub name: String,
}

/// A room that can host any lesson.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RoomRepr")]
pub struct Room {
    /// Room number (identity key).
    pub number: String,
}

impl Lecturer {
    /// Creates a lecturer.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Room {
    /// Creates a room.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

impl From<&str> for Lecturer {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Room {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LecturerRepr {
    Name(String),
    Record {
        #[serde(alias = "lecturerName")]
        name: String,
    },
}

impl From<LecturerRepr> for Lecturer {
    fn from(repr: LecturerRepr) -> Self {
        match repr {
            LecturerRepr::Name(name) | LecturerRepr::Record { name } => Self { name },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoomRepr {
    Number(String),
    Record {
        #[serde(alias = "roomNumber", alias = "roomNo")]
        number: String,
    },
}

impl From<RoomRepr> for Room {
    fn from(repr: RoomRepr) -> Self {
        match repr {
            RoomRepr::Number(number) | RoomRepr::Record { number } => Self { number },
        }
    }
}
